//! Command dispatch: maps parsed arguments onto services

use std::io;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::{output, tree_view};
use crate::config::{global_config_path, Settings};
use crate::domain::catalog::{Brand, CatalogStats};
use crate::domain::ExpansionState;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let mut settings = Settings::load()?;
    if let Some(catalog) = &cli.catalog {
        settings.catalog_path = catalog.clone();
    }
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Some(Commands::Search { query }) => _search(&container, query),
        Some(Commands::Tree {
            query,
            expand_all,
            expand,
        }) => _tree(&container, query.as_deref(), *expand_all, expand),
        Some(Commands::Brands) => _brands(&container),
        Some(Commands::Parts { query }) => _parts(&container, query.as_deref()),
        Some(Commands::Stats) => _stats(&container),
        Some(Commands::Validate) => _validate(&container),
        Some(Commands::Config { command }) => _config(&container, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

fn load_brands(container: &ServiceContainer) -> CliResult<Vec<Brand>> {
    let snapshot = container.catalog.load(&container.settings.catalog_path)?;
    if let Some(ts) = snapshot.generated_at {
        debug!("snapshot generated at {}", ts);
    }
    Ok(snapshot.brands)
}

#[instrument(skip(container))]
fn _search(container: &ServiceContainer, query: &str) -> CliResult<()> {
    let brands = load_brands(container)?;
    let filtered = container.catalog.search(&brands, query);

    if filtered.is_empty() {
        output::info("no matches");
        return Ok(());
    }
    for brand in &filtered {
        print_paths(brand);
    }
    Ok(())
}

/// Print one line per deepest retained node, as a slash-separated path.
fn print_paths(brand: &Brand) {
    if brand.models.is_empty() {
        output::info(&brand.name);
        return;
    }
    for model in &brand.models {
        if model.categories.is_empty() {
            output::info(&format!("{} / {}", brand.name, model.name));
            continue;
        }
        for category in &model.categories {
            if category.sub_categories.is_empty() {
                output::info(&format!("{} / {} / {}", brand.name, model.name, category.name));
                continue;
            }
            for sub in &category.sub_categories {
                if sub.parts.is_empty() {
                    output::info(&format!(
                        "{} / {} / {} / {}",
                        brand.name, model.name, category.name, sub.name
                    ));
                    continue;
                }
                for part in &sub.parts {
                    output::info(&format!(
                        "{} / {} / {} / {} / {}",
                        brand.name,
                        model.name,
                        category.name,
                        sub.name,
                        tree_view::part_label(part)
                    ));
                }
            }
        }
    }
}

#[instrument(skip(container))]
fn _tree(
    container: &ServiceContainer,
    query: Option<&str>,
    expand_all: bool,
    expand: &[String],
) -> CliResult<()> {
    let brands = load_brands(container)?;
    let filtered = container.catalog.search(&brands, query.unwrap_or(""));

    let mut expansion = ExpansionState::new();
    for id in expand {
        expansion.toggle(id);
    }
    if expand.is_empty() && container.settings.auto_expand_first {
        if let Some(first) = filtered.first() {
            expansion.expand_one(&first.id);
        }
    }

    for tree in tree_view::render(&filtered, &expansion, expand_all) {
        output::info(&tree);
    }
    Ok(())
}

#[instrument(skip(container))]
fn _brands(container: &ServiceContainer) -> CliResult<()> {
    let brands = load_brands(container)?;
    for brand in &brands {
        let models = brand.models.iter().map(|m| m.name.as_str()).join(", ");
        if models.is_empty() {
            output::info(&format!("{} ({} parts)", brand.name, brand.part_count()));
        } else {
            output::info(&format!(
                "{} ({} parts): {}",
                brand.name,
                brand.part_count(),
                models
            ));
        }
    }
    Ok(())
}

#[instrument(skip(container))]
fn _parts(container: &ServiceContainer, query: Option<&str>) -> CliResult<()> {
    let brands = load_brands(container)?;
    let filtered = container.catalog.search(&brands, query.unwrap_or(""));

    for brand in &filtered {
        for model in &brand.models {
            for category in &model.categories {
                for sub in &category.sub_categories {
                    for part in &sub.parts {
                        output::info(&tree_view::part_label(part));
                    }
                }
            }
        }
    }
    Ok(())
}

#[instrument(skip(container))]
fn _stats(container: &ServiceContainer) -> CliResult<()> {
    let brands = load_brands(container)?;
    let stats: CatalogStats = container.catalog.stats(&brands);

    output::header("Catalog");
    output::detail(&format!("brands:        {}", stats.brands));
    output::detail(&format!("models:        {}", stats.models));
    output::detail(&format!("categories:    {}", stats.categories));
    output::detail(&format!("subcategories: {}", stats.sub_categories));
    output::detail(&format!("parts:         {}", stats.parts));
    output::detail(&format!("total stock:   {}", stats.total_stock));
    output::detail(&format!("total value:   ${:.2}", stats.total_value_usd));
    Ok(())
}

#[instrument(skip(container))]
fn _validate(container: &ServiceContainer) -> CliResult<()> {
    let brands = load_brands(container)?;
    container.catalog.validate(&brands)?;
    output::success(&format!(
        "catalog ok: {} brands, ids unique per collection",
        brands.len()
    ));
    Ok(())
}

#[instrument(skip(container))]
fn _config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml().map_err(CliError::from)?);
            Ok(())
        }
        ConfigCommands::Init => {
            let path = config_path_or_err()?;
            if path.exists() {
                output::warning(&format!("config already exists: {}", path.display()));
                return Ok(());
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
            }
            std::fs::write(&path, Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
        ConfigCommands::Path => {
            let path = config_path_or_err()?;
            output::info(&path.display());
            Ok(())
        }
    }
}

fn config_path_or_err() -> CliResult<PathBuf> {
    global_config_path()
        .ok_or_else(|| CliError::InvalidArgs("cannot determine config directory".to_string()))
}
