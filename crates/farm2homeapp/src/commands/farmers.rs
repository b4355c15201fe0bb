use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Farm2HomeError, Result};
use crate::model::{FarmerId, FarmerInput, FarmerRecord};
use crate::registry::FarmerRegistry;
use crate::store::backend::StorageBackend;

/// Registers a farmer. Invalid input returns [`Farm2HomeError::Validation`]
/// carrying every field error; the registry is left unchanged.
pub fn register<B: StorageBackend>(
    registry: &mut FarmerRegistry<B>,
    input: &FarmerInput,
) -> Result<CmdResult> {
    let record = registry
        .register(input)
        .map_err(Farm2HomeError::Validation)?;

    let mut result = CmdResult::default().with_farmers(vec![record]);
    result.add_message(CmdMessage::success("Farmer registered successfully!"));
    Ok(result)
}

pub fn list<B: StorageBackend>(registry: &FarmerRegistry<B>) -> CmdResult {
    let mut result = CmdResult::default().with_farmers(registry.list().to_vec());
    if registry.count() == 0 {
        result.add_message(CmdMessage::info(
            "No farmers registered yet. Register one to add the first record.",
        ));
    }
    result
}

/// The record a removal would delete, so the UI can ask for confirmation.
pub fn preview<B: StorageBackend>(
    registry: &FarmerRegistry<B>,
    id: FarmerId,
) -> Option<FarmerRecord> {
    registry.get(id).cloned()
}

/// Removes a farmer. Does NOT prompt: callers confirm via [`preview`] first.
pub fn remove<B: StorageBackend>(registry: &mut FarmerRegistry<B>, id: FarmerId) -> CmdResult {
    let mut result = CmdResult::default();
    match registry.remove(id) {
        Some(record) => {
            result.add_message(CmdMessage::success(format!(
                "Removed farmer: {} ({})",
                record.name, record.location
            )));
            result.farmers.push(record);
        }
        None => result.add_message(CmdMessage::warning(format!("No farmer with id {}", id))),
    }
    result
}
