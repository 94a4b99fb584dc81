//! Test support: logging setup and catalog fixture builders
//!
//! Used by both unit tests and the integration tests under `tests/`.

use std::env;
use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::catalog::{Brand, Category, Model, Part, SubCategory};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let noisy_modules: [&str; 0] = [];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::ENTER)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Build a brand with the given models.
pub fn brand(id: &str, name: &str, models: Vec<Model>) -> Brand {
    Brand {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        models,
    }
}

/// Build a model with the given categories.
pub fn model(id: &str, name: &str, categories: Vec<Category>) -> Model {
    Model {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        categories,
    }
}

/// Build a category with the given subcategories.
pub fn category(id: &str, name: &str, sub_categories: Vec<SubCategory>) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        sub_categories,
    }
}

/// Build a subcategory with the given parts.
pub fn sub_category(id: &str, name: &str, parts: Vec<Part>) -> SubCategory {
    SubCategory {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        parts,
    }
}

/// Build a part with zero price and stock.
pub fn part(id: &str, name: &str, part_number: &str) -> Part {
    Part {
        id: id.to_string(),
        name: name.to_string(),
        part_number: part_number.to_string(),
        description: None,
        price_usd: 0.0,
        stock_quantity: 0,
    }
}
