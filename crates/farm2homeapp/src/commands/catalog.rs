use crate::catalog::{self, ALL_CATEGORIES, CATEGORIES};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Farm2HomeError, Result};
use crate::model::ProductId;

/// Products in `category` (all products when `None`).
pub fn products(category: Option<&str>) -> Result<CmdResult> {
    let category = category.unwrap_or(ALL_CATEGORIES);
    let matching: Vec<_> = catalog::filter(category)?.into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if matching.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No products in {} right now.",
            catalog::resolve_category(category)?
        )));
    }
    Ok(result.with_products(matching))
}

/// One product's details.
pub fn product(id: ProductId) -> Result<CmdResult> {
    let product = catalog::find(id).ok_or(Farm2HomeError::ProductNotFound(id))?;
    let mut result = CmdResult::default().with_products(vec![product.clone()]);
    result.add_message(CmdMessage::info(format!(
        "Product details: {} - {}",
        product.name, product.price
    )));
    Ok(result)
}

pub fn deals() -> CmdResult {
    CmdResult::default().with_deals(catalog::deals().to_vec())
}

pub fn categories() -> CmdResult {
    CmdResult {
        categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
        ..Default::default()
    }
}
