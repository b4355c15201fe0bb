use crate::cart::Cart;
use crate::catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Farm2HomeError, Result};
use crate::model::ProductId;
use crate::store::backend::StorageBackend;

fn snapshot<B: StorageBackend>(cart: &Cart<B>) -> CmdResult {
    CmdResult::default().with_cart(cart.entries().to_vec(), cart.summarize())
}

pub fn add<B: StorageBackend>(cart: &mut Cart<B>, product_id: ProductId) -> Result<CmdResult> {
    let product = catalog::find(product_id).ok_or(Farm2HomeError::ProductNotFound(product_id))?;
    let quantity = cart.add_or_increment(product);

    let mut result = snapshot(cart);
    result.add_message(CmdMessage::success(format!(
        "Added {} to cart (x{})",
        product.name, quantity
    )));
    Ok(result)
}

pub fn view<B: StorageBackend>(cart: &Cart<B>) -> CmdResult {
    snapshot(cart)
}

pub fn remove<B: StorageBackend>(cart: &mut Cart<B>, product_id: ProductId) -> CmdResult {
    let removed = cart.remove(product_id);
    let mut result = snapshot(cart);
    match removed {
        Some(entry) => result.add_message(CmdMessage::success(format!(
            "Removed {} from cart",
            entry.product.name
        ))),
        None => result.add_message(CmdMessage::warning(format!(
            "Product {} is not in the cart",
            product_id
        ))),
    }
    result
}

pub fn set_quantity<B: StorageBackend>(
    cart: &mut Cart<B>,
    product_id: ProductId,
    quantity: u32,
) -> CmdResult {
    let previous = cart.set_quantity(product_id, quantity);
    let mut result = snapshot(cart);
    match previous {
        Some(entry) if quantity == 0 => result.add_message(CmdMessage::success(format!(
            "Removed {} from cart",
            entry.product.name
        ))),
        Some(entry) => result.add_message(CmdMessage::success(format!(
            "{}: x{} -> x{}",
            entry.product.name, entry.quantity, quantity
        ))),
        None => result.add_message(CmdMessage::warning(format!(
            "Product {} is not in the cart",
            product_id
        ))),
    }
    result
}
