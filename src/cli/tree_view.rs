//! Tree rendering for the terminal
//!
//! Pure conversion of the (possibly filtered) brand tree into termtree
//! structures. Which subtrees open is decided by the [`ExpansionState`];
//! a collapsed node renders its label with a `[+n]` child-count marker and
//! no children. The expansion state is only queried here, never mutated.

use termtree::Tree;

use crate::domain::catalog::{Brand, Category, Model, Part, SubCategory};
use crate::domain::ExpansionState;

/// Render the catalog as one tree per brand.
pub fn render(brands: &[Brand], expansion: &ExpansionState, expand_all: bool) -> Vec<Tree<String>> {
    brands
        .iter()
        .map(|brand| brand_tree(brand, expansion, expand_all))
        .collect()
}

fn open(id: &str, expansion: &ExpansionState, expand_all: bool) -> bool {
    expand_all || expansion.is_expanded(id)
}

fn brand_tree(brand: &Brand, expansion: &ExpansionState, expand_all: bool) -> Tree<String> {
    if !open(&brand.id, expansion, expand_all) {
        return Tree::new(collapsed_label(&brand.name, brand.models.len()));
    }
    let leaves: Vec<_> = brand
        .models
        .iter()
        .map(|m| model_tree(m, expansion, expand_all))
        .collect();
    Tree::new(brand.name.clone()).with_leaves(leaves)
}

fn model_tree(model: &Model, expansion: &ExpansionState, expand_all: bool) -> Tree<String> {
    if !open(&model.id, expansion, expand_all) {
        return Tree::new(collapsed_label(&model.name, model.categories.len()));
    }
    let leaves: Vec<_> = model
        .categories
        .iter()
        .map(|c| category_tree(c, expansion, expand_all))
        .collect();
    Tree::new(model.name.clone()).with_leaves(leaves)
}

fn category_tree(category: &Category, expansion: &ExpansionState, expand_all: bool) -> Tree<String> {
    if !open(&category.id, expansion, expand_all) {
        return Tree::new(collapsed_label(&category.name, category.sub_categories.len()));
    }
    let leaves: Vec<_> = category
        .sub_categories
        .iter()
        .map(|s| sub_category_tree(s, expansion, expand_all))
        .collect();
    Tree::new(category.name.clone()).with_leaves(leaves)
}

fn sub_category_tree(sub: &SubCategory, expansion: &ExpansionState, expand_all: bool) -> Tree<String> {
    if !open(&sub.id, expansion, expand_all) {
        return Tree::new(collapsed_label(&sub.name, sub.parts.len()));
    }
    let leaves: Vec<_> = sub.parts.iter().map(|p| Tree::new(part_label(p))).collect();
    Tree::new(sub.name.clone()).with_leaves(leaves)
}

fn collapsed_label(name: &str, child_count: usize) -> String {
    if child_count == 0 {
        name.to_string()
    } else {
        format!("{} [+{}]", name, child_count)
    }
}

/// One-line part summary: name, part number, price, stock.
pub fn part_label(part: &Part) -> String {
    format!(
        "{} ({}) ${:.2} [stock {}]",
        part.name, part.part_number, part.price_usd, part.stock_quantity
    )
}
