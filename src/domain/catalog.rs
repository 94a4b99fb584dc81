//! Catalog entities: the fixed 5-level spares hierarchy
//!
//! Brand → Model → Category → SubCategory → Part. The backend delivers the
//! tree as camelCase JSON; child collections may be absent and deserialize
//! to empty. Parent-child containment is the only relationship, there are
//! no back-references and no cross-links.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};

/// Top-level catalog node (e.g., an engine manufacturer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub models: Vec<Model>,
}

/// Equipment model within a brand (e.g., a specific engine series).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Part category within a model (e.g., "Engine Parts").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sub_categories: Vec<SubCategory>,
}

/// Sub-category within a category (e.g., "Piston Rings").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Leaf node: an orderable spare part.
///
/// `price_usd` and `stock_quantity` are display data; the hierarchy logic
/// never interprets them and does not enforce non-negativity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: String,
    pub name: String,
    pub part_number: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "priceUSD", default)]
    pub price_usd: f64,
    #[serde(default)]
    pub stock_quantity: u32,
}

impl Brand {
    /// Total number of parts anywhere under this brand.
    pub fn part_count(&self) -> usize {
        self.models.iter().map(Model::part_count).sum()
    }

    /// Total number of nodes in this subtree, the brand itself included.
    pub fn node_count(&self) -> usize {
        1 + self.models.iter().map(Model::node_count).sum::<usize>()
    }
}

impl Model {
    pub fn part_count(&self) -> usize {
        self.categories.iter().map(Category::part_count).sum()
    }

    pub fn node_count(&self) -> usize {
        1 + self.categories.iter().map(Category::node_count).sum::<usize>()
    }
}

impl Category {
    pub fn part_count(&self) -> usize {
        self.sub_categories.iter().map(SubCategory::part_count).sum()
    }

    pub fn node_count(&self) -> usize {
        1 + self
            .sub_categories
            .iter()
            .map(SubCategory::node_count)
            .sum::<usize>()
    }
}

impl SubCategory {
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn node_count(&self) -> usize {
        1 + self.parts.len()
    }
}

/// Aggregate counts over a whole catalog, one figure per level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStats {
    pub brands: usize,
    pub models: usize,
    pub categories: usize,
    pub sub_categories: usize,
    pub parts: usize,
    pub total_stock: u64,
    pub total_value_usd: f64,
}

impl CatalogStats {
    /// Walk the catalog once and count every level.
    pub fn collect(brands: &[Brand]) -> Self {
        let mut stats = Self {
            brands: brands.len(),
            ..Self::default()
        };
        for brand in brands {
            stats.models += brand.models.len();
            for model in &brand.models {
                stats.categories += model.categories.len();
                for category in &model.categories {
                    stats.sub_categories += category.sub_categories.len();
                    for sub in &category.sub_categories {
                        stats.parts += sub.parts.len();
                        for part in &sub.parts {
                            stats.total_stock += u64::from(part.stock_quantity);
                            stats.total_value_usd +=
                                part.price_usd * f64::from(part.stock_quantity);
                        }
                    }
                }
            }
        }
        stats
    }

    /// Total node count across all levels.
    pub fn node_count(&self) -> usize {
        self.brands + self.models + self.categories + self.sub_categories + self.parts
    }
}

/// Check id uniqueness within each sibling collection.
///
/// Ids are only required to be unique among siblings of the same level, not
/// globally. The filter engine does not depend on this; it is an input
/// contract the backend is supposed to uphold, checked on demand.
pub fn validate(brands: &[Brand]) -> DomainResult<()> {
    check_unique("brand", brands.iter().map(|b| b.id.as_str()))?;
    for brand in brands {
        check_unique("model", brand.models.iter().map(|m| m.id.as_str()))?;
        for model in &brand.models {
            check_unique("category", model.categories.iter().map(|c| c.id.as_str()))?;
            for category in &model.categories {
                check_unique(
                    "subcategory",
                    category.sub_categories.iter().map(|s| s.id.as_str()),
                )?;
                for sub in &category.sub_categories {
                    check_unique("part", sub.parts.iter().map(|p| p.id.as_str()))?;
                }
            }
        }
    }
    Ok(())
}

fn check_unique<'a>(level: &str, ids: impl Iterator<Item = &'a str>) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DomainError::DuplicateId {
                level: level.to_string(),
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
