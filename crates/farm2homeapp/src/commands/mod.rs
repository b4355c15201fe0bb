//! # Command Layer
//!
//! The business operations behind each user intent. Commands operate on the
//! stores and return a structured [`CmdResult`]; they never print, prompt or
//! exit. The presentation layer decides how to render the result and when to
//! ask for confirmation.
//!
//! ## Command Modules
//!
//! - [`catalog`]: Browse products, deals and categories
//! - [`cart`]: Add, view, remove and re-quantify cart entries
//! - [`farmers`]: Register, list and remove farmers
//! - [`reset`]: Clear both stores

use crate::cart::CartSummary;
use crate::model::{CartEntry, Deal, FarmerRecord, Product};

pub mod cart;
pub mod catalog;
pub mod farmers;
pub mod reset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub products: Vec<Product>,
    pub deals: Vec<Deal>,
    pub categories: Vec<String>,
    pub cart_entries: Vec<CartEntry>,
    pub cart_summary: Option<CartSummary>,
    pub farmers: Vec<FarmerRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_deals(mut self, deals: Vec<Deal>) -> Self {
        self.deals = deals;
        self
    }

    pub fn with_cart(mut self, entries: Vec<CartEntry>, summary: CartSummary) -> Self {
        self.cart_entries = entries;
        self.cart_summary = Some(summary);
        self
    }

    pub fn with_farmers(mut self, farmers: Vec<FarmerRecord>) -> Self {
        self.farmers = farmers;
        self
    }
}
