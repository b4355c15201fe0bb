//! # API Facade
//!
//! The single entry point for every storefront operation, whatever UI drives
//! it. The facade owns one [`Cart`] and one [`FarmerRegistry`] for the session
//! and dispatches to the command layer.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs` and the stores
//! - **I/O**: no stdout, stderr or prompts
//! - **Presentation**: returns [`CmdResult`] values, not strings
//!
//! ## Generic Over StorageBackend
//!
//! `Farm2HomeApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `Farm2HomeApi<FsBackend>`
//! - Testing: `Farm2HomeApi<MemBackend>`
//!
//! Both stores get a clone of the same backend, the way two pages share one
//! browser origin. Each store still owns its own key.

use crate::cart::Cart;
use crate::commands;
use crate::error::Result;
use crate::events::StoreEvent;
use crate::model::{FarmerId, FarmerInput, FarmerRecord, ProductId};
use crate::registry::FarmerRegistry;
use crate::store::backend::StorageBackend;

pub struct Farm2HomeApi<B: StorageBackend> {
    cart: Cart<B>,
    farmers: FarmerRegistry<B>,
}

impl<B: StorageBackend + Clone> Farm2HomeApi<B> {
    /// Hydrates both stores from `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            cart: Cart::load(backend.clone()),
            farmers: FarmerRegistry::load(backend),
        }
    }
}

impl<B: StorageBackend> Farm2HomeApi<B> {
    /// Subscribe to change notifications from both stores.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StoreEvent) + Clone + 'static,
    {
        self.cart.subscribe(listener.clone());
        self.farmers.subscribe(listener);
    }

    pub fn cart(&self) -> &Cart<B> {
        &self.cart
    }

    pub fn farmers(&self) -> &FarmerRegistry<B> {
        &self.farmers
    }

    pub fn list_products(&self, category: Option<&str>) -> Result<commands::CmdResult> {
        commands::catalog::products(category)
    }

    pub fn view_product(&self, product_id: ProductId) -> Result<commands::CmdResult> {
        commands::catalog::product(product_id)
    }

    pub fn list_deals(&self) -> Result<commands::CmdResult> {
        Ok(commands::catalog::deals())
    }

    pub fn list_categories(&self) -> Result<commands::CmdResult> {
        Ok(commands::catalog::categories())
    }

    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<commands::CmdResult> {
        commands::cart::add(&mut self.cart, product_id)
    }

    pub fn view_cart(&self) -> Result<commands::CmdResult> {
        Ok(commands::cart::view(&self.cart))
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Result<commands::CmdResult> {
        Ok(commands::cart::remove(&mut self.cart, product_id))
    }

    pub fn set_cart_quantity(
        &mut self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<commands::CmdResult> {
        Ok(commands::cart::set_quantity(
            &mut self.cart,
            product_id,
            quantity,
        ))
    }

    pub fn register_farmer(&mut self, input: &FarmerInput) -> Result<commands::CmdResult> {
        commands::farmers::register(&mut self.farmers, input)
    }

    pub fn list_farmers(&self) -> Result<commands::CmdResult> {
        Ok(commands::farmers::list(&self.farmers))
    }

    /// Preview the record a removal would delete.
    pub fn farmer(&self, id: FarmerId) -> Option<FarmerRecord> {
        commands::farmers::preview(&self.farmers, id)
    }

    pub fn remove_farmer(&mut self, id: FarmerId) -> Result<commands::CmdResult> {
        Ok(commands::farmers::remove(&mut self.farmers, id))
    }

    pub fn reset(&mut self) -> Result<commands::CmdResult> {
        Ok(commands::reset::run(&mut self.cart, &mut self.farmers))
    }
}

pub use crate::cart::{CartSummary, SummaryLine};
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::validation::{Field, FieldError, FieldErrors};
