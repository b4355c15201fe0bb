use crate::cart::Cart;
use crate::commands::{CmdMessage, CmdResult};
use crate::registry::FarmerRegistry;
use crate::store::backend::StorageBackend;

/// Empties the cart and the farmer registry.
pub fn run<B: StorageBackend>(cart: &mut Cart<B>, registry: &mut FarmerRegistry<B>) -> CmdResult {
    let items = cart.total_item_count();
    let farmers = registry.count();
    cart.clear();
    registry.clear();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Cleared {} cart item(s) and {} farmer record(s)",
        items, farmers
    )));
    result
}
