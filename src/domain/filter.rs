//! Hierarchy filter engine
//!
//! Given the full brand tree and a free-text query, computes the minimal
//! sub-tree containing every node that either matches the query itself or
//! has a matching descendant, preserving ancestor chains and sibling order.
//!
//! Matching is a case-insensitive substring test on `name` and `description`
//! (parts additionally match on `part_number`). Retention is decided strictly
//! bottom-up: parts are filtered before their subcategory decides whether it
//! survives, subcategories before categories, and so on. A node retained only
//! because of its own match keeps an empty child list; retention never
//! broadcasts downward.
//!
//! The engine is a pure function over a borrowed snapshot: it returns
//! structural copies of the surviving paths and never mutates its input.
//! Cost is O(N) in the total node count, each node visited exactly once.

use tracing::instrument;

use crate::domain::catalog::{Brand, Category, Model, Part, SubCategory};

/// Filter the brand tree by a free-text query.
///
/// An empty or whitespace-only query is the "no filter" case and returns a
/// full structural copy of the input. A query matching nothing returns an
/// empty vector. Sibling order in the output always matches the input.
#[instrument(level = "debug", skip(brands), fields(brand_count = brands.len()))]
pub fn filter(brands: &[Brand], query: &str) -> Vec<Brand> {
    if query.trim().is_empty() {
        return brands.to_vec();
    }
    let needle = query.to_lowercase();
    brands
        .iter()
        .filter_map(|brand| filter_brand(brand, &needle))
        .collect()
}

fn filter_brand(brand: &Brand, needle: &str) -> Option<Brand> {
    let models: Vec<Model> = brand
        .models
        .iter()
        .filter_map(|model| filter_model(model, needle))
        .collect();

    let self_matches = matches_text(&brand.name, brand.description.as_deref(), needle);
    if self_matches || !models.is_empty() {
        Some(Brand {
            id: brand.id.clone(),
            name: brand.name.clone(),
            description: brand.description.clone(),
            models,
        })
    } else {
        None
    }
}

fn filter_model(model: &Model, needle: &str) -> Option<Model> {
    let categories: Vec<Category> = model
        .categories
        .iter()
        .filter_map(|category| filter_category(category, needle))
        .collect();

    let self_matches = matches_text(&model.name, model.description.as_deref(), needle);
    if self_matches || !categories.is_empty() {
        Some(Model {
            id: model.id.clone(),
            name: model.name.clone(),
            description: model.description.clone(),
            categories,
        })
    } else {
        None
    }
}

fn filter_category(category: &Category, needle: &str) -> Option<Category> {
    let sub_categories: Vec<SubCategory> = category
        .sub_categories
        .iter()
        .filter_map(|sub| filter_sub_category(sub, needle))
        .collect();

    let self_matches = matches_text(&category.name, category.description.as_deref(), needle);
    if self_matches || !sub_categories.is_empty() {
        Some(Category {
            id: category.id.clone(),
            name: category.name.clone(),
            description: category.description.clone(),
            sub_categories,
        })
    } else {
        None
    }
}

fn filter_sub_category(sub: &SubCategory, needle: &str) -> Option<SubCategory> {
    let parts: Vec<Part> = sub
        .parts
        .iter()
        .filter(|part| matches_part(part, needle))
        .cloned()
        .collect();

    let self_matches = matches_text(&sub.name, sub.description.as_deref(), needle);
    if self_matches || !parts.is_empty() {
        Some(SubCategory {
            id: sub.id.clone(),
            name: sub.name.clone(),
            description: sub.description.clone(),
            parts,
        })
    } else {
        None
    }
}

/// Case-insensitive substring match on name and optional description.
/// `needle` must already be lowercased.
fn matches_text(name: &str, description: Option<&str>, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
        || description
            .map(|d| d.to_lowercase().contains(needle))
            .unwrap_or(false)
}

/// Parts additionally match on their part number.
fn matches_part(part: &Part, needle: &str) -> bool {
    part.part_number.to_lowercase().contains(needle)
        || matches_text(&part.name, part.description.as_deref(), needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{brand, category, model, part, sub_category};

    fn sample_catalog() -> Vec<Brand> {
        vec![
            brand(
                "b1",
                "Caterpillar",
                vec![model(
                    "m1",
                    "C3516",
                    vec![category(
                        "c1",
                        "Engine Parts",
                        vec![
                            sub_category(
                                "s1",
                                "Piston Rings",
                                vec![
                                    part("p1", "Piston Ring Set", "PART-123"),
                                    part("p2", "Cylinder Liner", "PART-200"),
                                ],
                            ),
                            sub_category("s2", "Gaskets", vec![part("p3", "Head Gasket", "PART-300")]),
                        ],
                    )],
                )],
            ),
            brand(
                "b2",
                "Wartsila",
                vec![model(
                    "m2",
                    "W32",
                    vec![category(
                        "c2",
                        "Fuel System",
                        vec![sub_category(
                            "s3",
                            "Injectors",
                            vec![part("p4", "Fuel Injector", "INJ-001")],
                        )],
                    )],
                )],
            ),
        ]
    }

    #[test]
    fn given_empty_query_when_filtering_then_returns_identity() {
        let catalog = sample_catalog();
        assert_eq!(filter(&catalog, ""), catalog);
    }

    #[test]
    fn given_whitespace_query_when_filtering_then_returns_identity() {
        let catalog = sample_catalog();
        assert_eq!(filter(&catalog, "   \t "), catalog);
    }

    #[test]
    fn given_part_query_when_filtering_then_retains_full_ancestor_chain() {
        let catalog = sample_catalog();
        let result = filter(&catalog, "piston");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "b1");
        assert_eq!(result[0].models.len(), 1);
        assert_eq!(result[0].models[0].categories.len(), 1);
        let subs = &result[0].models[0].categories[0].sub_categories;
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].id, "s1");
        // Non-matching sibling part is dropped from the subcategory.
        assert_eq!(subs[0].parts.len(), 1);
        assert_eq!(subs[0].parts[0].id, "p1");
    }

    #[test]
    fn given_brand_only_match_when_filtering_then_retains_brand_with_empty_models() {
        // Retention is bottom-up only: a matching brand does not drag its
        // non-matching descendants along.
        let catalog = sample_catalog();
        let result = filter(&catalog, "Caterpillar");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "b1");
        assert!(result[0].models.is_empty());
    }

    #[test]
    fn given_no_match_when_filtering_then_returns_empty() {
        let catalog = sample_catalog();
        assert!(filter(&catalog, "nonexistent-xyz").is_empty());
    }

    #[test]
    fn given_mixed_case_queries_when_filtering_then_results_are_identical() {
        let catalog = sample_catalog();
        assert_eq!(filter(&catalog, "ENGINE"), filter(&catalog, "engine"));
    }

    #[test]
    fn given_part_number_query_when_filtering_then_matches_part() {
        let catalog = sample_catalog();
        let result = filter(&catalog, "inj-001");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "b2");
        let parts = &result[0].models[0].categories[0].sub_categories[0].parts;
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].part_number, "INJ-001");
    }

    #[test]
    fn given_subcategory_match_when_filtering_then_keeps_all_its_parts() {
        // A matching subcategory keeps only parts that themselves match; with
        // none matching, the subcategory survives with an empty part list.
        let catalog = sample_catalog();
        let result = filter(&catalog, "gaskets");

        let subs = &result[0].models[0].categories[0].sub_categories;
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].id, "s2");
        assert!(subs[0].parts.is_empty());
    }

    #[test]
    fn given_description_match_when_filtering_then_node_is_retained() {
        let mut catalog = sample_catalog();
        catalog[1].description = Some("Finnish marine engine manufacturer".to_string());

        let result = filter(&catalog, "finnish");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "b2");
    }

    #[test]
    fn given_matches_in_both_brands_when_filtering_then_sibling_order_is_preserved() {
        // "a" occurs in both brand names and in several descendants.
        let catalog = sample_catalog();
        let result = filter(&catalog, "a");

        let input_order: Vec<&str> = catalog
            .iter()
            .filter(|b| result.iter().any(|r| r.id == b.id))
            .map(|b| b.id.as_str())
            .collect();
        let output_order: Vec<&str> = result.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(input_order, output_order);
    }

    #[test]
    fn given_query_with_surrounding_whitespace_when_filtering_then_matches_literally() {
        // Only the identity short-circuit trims; the match itself is literal.
        let catalog = sample_catalog();
        assert!(filter(&catalog, " piston").is_empty());
        assert_eq!(filter(&catalog, "piston ring").len(), 1);
    }

    #[test]
    fn given_brand_with_no_children_when_filtering_then_no_panic() {
        let catalog = vec![brand("b1", "Sole", vec![])];
        assert!(filter(&catalog, "nothing").is_empty());
        assert_eq!(filter(&catalog, "sole").len(), 1);
    }

    #[test]
    fn given_filtered_output_when_checking_retention_then_every_node_justifies_itself() {
        // Every retained node either matches or has retained children.
        let catalog = sample_catalog();
        let result = filter(&catalog, "ring");
        let needle = "ring";

        for b in &result {
            let self_match = matches_text(&b.name, b.description.as_deref(), needle);
            assert!(self_match || !b.models.is_empty());
            for m in &b.models {
                let self_match = matches_text(&m.name, m.description.as_deref(), needle);
                assert!(self_match || !m.categories.is_empty());
                for c in &m.categories {
                    let self_match = matches_text(&c.name, c.description.as_deref(), needle);
                    assert!(self_match || !c.sub_categories.is_empty());
                    for s in &c.sub_categories {
                        let self_match = matches_text(&s.name, s.description.as_deref(), needle);
                        assert!(self_match || !s.parts.is_empty());
                        for p in &s.parts {
                            assert!(matches_part(p, needle));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn given_filter_call_when_done_then_input_is_unchanged() {
        let catalog = sample_catalog();
        let snapshot = catalog.clone();
        let _ = filter(&catalog, "piston");
        assert_eq!(catalog, snapshot);
    }
}
