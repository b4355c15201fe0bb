//! Command handlers for the farm2home CLI.
//!
//! Each handler calls one API operation and returns the rendered output.
//! Handlers that delete data take the confirmation input and prompt output as
//! parameters so they can be driven without a terminal.

use super::render;
use anyhow::{bail, Result};
use chrono::Utc;
use farm2homeapp::api::Farm2HomeApi;
use farm2homeapp::error::Farm2HomeError;
use farm2homeapp::model::{FarmerId, FarmerInput, ProductId};
use farm2homeapp::store::backend::StorageBackend;
use std::io::{BufRead, Write};

const CANCELLED: &str = "Cancelled\n";

pub fn products<B: StorageBackend>(
    api: &Farm2HomeApi<B>,
    category: Option<&str>,
) -> Result<String> {
    Ok(render::result(&api.list_products(category)?, Utc::now()))
}

pub fn product_show<B: StorageBackend>(api: &Farm2HomeApi<B>, id: ProductId) -> Result<String> {
    Ok(render::result(&api.view_product(id)?, Utc::now()))
}

pub fn categories<B: StorageBackend>(api: &Farm2HomeApi<B>) -> Result<String> {
    Ok(render::result(&api.list_categories()?, Utc::now()))
}

pub fn deals<B: StorageBackend>(api: &Farm2HomeApi<B>) -> Result<String> {
    Ok(render::result(&api.list_deals()?, Utc::now()))
}

pub fn cart_add<B: StorageBackend>(api: &mut Farm2HomeApi<B>, id: ProductId) -> Result<String> {
    Ok(render::result(&api.add_to_cart(id)?, Utc::now()))
}

pub fn cart_show<B: StorageBackend>(api: &Farm2HomeApi<B>) -> Result<String> {
    Ok(render::result(&api.view_cart()?, Utc::now()))
}

pub fn cart_remove<B: StorageBackend>(api: &mut Farm2HomeApi<B>, id: ProductId) -> Result<String> {
    Ok(render::result(&api.remove_from_cart(id)?, Utc::now()))
}

pub fn cart_set<B: StorageBackend>(
    api: &mut Farm2HomeApi<B>,
    id: ProductId,
    quantity: u32,
) -> Result<String> {
    Ok(render::result(&api.set_cart_quantity(id, quantity)?, Utc::now()))
}

pub fn farmer_register<B: StorageBackend>(
    api: &mut Farm2HomeApi<B>,
    input: &FarmerInput,
) -> Result<String> {
    match api.register_farmer(input) {
        Ok(result) => Ok(render::result(&result, Utc::now())),
        Err(Farm2HomeError::Validation(errors)) => bail!("{}", render::field_errors(&errors)),
        Err(e) => Err(e.into()),
    }
}

pub fn farmer_list<B: StorageBackend>(api: &Farm2HomeApi<B>) -> Result<String> {
    Ok(render::result(&api.list_farmers()?, Utc::now()))
}

/// Shows the record, asks before deleting it. Unknown ids skip the prompt.
pub fn farmer_remove<B, R, W>(
    api: &mut Farm2HomeApi<B>,
    id: FarmerId,
    yes: bool,
    input: &mut R,
    prompt: &mut W,
) -> Result<String>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    if let Some(record) = api.farmer(id) {
        if !yes {
            write!(prompt, "{}", render::farmer(&record, Utc::now()))?;
            if !confirm("Remove this farmer from the list?", input, prompt)? {
                return Ok(CANCELLED.to_string());
            }
        }
    }
    Ok(render::result(&api.remove_farmer(id)?, Utc::now()))
}

pub fn reset<B, R, W>(
    api: &mut Farm2HomeApi<B>,
    yes: bool,
    input: &mut R,
    prompt: &mut W,
) -> Result<String>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    if !yes && !confirm("Clear the cart and all farmer records?", input, prompt)? {
        return Ok(CANCELLED.to_string());
    }
    Ok(render::result(&api.reset()?, Utc::now()))
}

/// Anything other than `y`/`yes` (including EOF) declines.
fn confirm<R: BufRead, W: Write>(question: &str, input: &mut R, prompt: &mut W) -> Result<bool> {
    write!(prompt, "{} [y/N] ", question)?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
