//! # Cart Store
//!
//! The cart is an ordered list of [`CartEntry`] values, unique by product id.
//! Adding a product that is already present bumps its quantity in place;
//! adding a new one appends it with quantity 1. Every mutation rewrites the
//! whole list to the [`CART_KEY`] storage key and emits
//! [`StoreEvent::CartChanged`].

use crate::events::{Notifier, StoreEvent};
use crate::model::{CartEntry, Product, ProductId};
use crate::store::backend::StorageBackend;
use crate::store::collection::PersistedCollection;
use crate::store::CART_KEY;
use std::fmt;

/// Returns the cart that results from adding `product` to `entries`.
///
/// Existing entries keep their order; only the matching entry's quantity
/// changes.
pub fn add_or_increment(entries: &[CartEntry], product: &Product) -> Vec<CartEntry> {
    if entries.iter().any(|e| e.id() == product.id) {
        entries
            .iter()
            .map(|e| {
                if e.id() == product.id {
                    CartEntry {
                        quantity: e.quantity.saturating_add(1),
                        ..e.clone()
                    }
                } else {
                    e.clone()
                }
            })
            .collect()
    } else {
        let mut next = entries.to_vec();
        next.push(CartEntry::new(product.clone()));
        next
    }
}

/// Sum of quantities across all entries.
pub fn total_item_count(entries: &[CartEntry]) -> u32 {
    entries
        .iter()
        .fold(0u32, |sum, e| sum.saturating_add(e.quantity))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub name: String,
    pub quantity: u32,
    pub price: String,
}

/// Human-readable cart listing. An empty cart is its own case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartSummary {
    Empty,
    Items {
        total_items: u32,
        lines: Vec<SummaryLine>,
    },
}

impl CartSummary {
    pub fn from_entries(entries: &[CartEntry]) -> Self {
        if entries.is_empty() {
            return CartSummary::Empty;
        }
        CartSummary::Items {
            total_items: total_item_count(entries),
            lines: entries
                .iter()
                .map(|e| SummaryLine {
                    name: e.product.name.clone(),
                    quantity: e.quantity,
                    price: e.product.price.clone(),
                })
                .collect(),
        }
    }
}

impl fmt::Display for CartSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartSummary::Empty => write!(f, "Your cart is empty!"),
            CartSummary::Items { total_items, lines } => {
                write!(f, "Cart ({} items):", total_items)?;
                for line in lines {
                    write!(f, "\n{} x{} - {}", line.name, line.quantity, line.price)?;
                }
                Ok(())
            }
        }
    }
}

pub struct Cart<B: StorageBackend> {
    entries: PersistedCollection<CartEntry, B>,
    notifier: Notifier,
}

impl<B: StorageBackend> Cart<B> {
    /// Hydrate the cart from storage (empty if nothing usable is stored).
    pub fn load(backend: B) -> Self {
        Self {
            entries: PersistedCollection::load(backend, CART_KEY),
            notifier: Notifier::new(),
        }
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.notifier.subscribe(listener);
    }

    pub fn entries(&self) -> &[CartEntry] {
        self.entries.items()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries().iter().find(|e| e.id() == id)
    }

    /// Adds one unit of `product`, returning its new quantity.
    pub fn add_or_increment(&mut self, product: &Product) -> u32 {
        let next = add_or_increment(self.entries(), product);
        let quantity = next
            .iter()
            .find(|e| e.id() == product.id)
            .map(|e| e.quantity)
            .unwrap_or(1);
        self.commit(next);
        tracing::debug!(product = product.id, quantity, "added to cart");
        quantity
    }

    /// Removes the entry for `id`, if any.
    pub fn remove(&mut self, id: ProductId) -> Option<CartEntry> {
        let removed = self.get(id).cloned()?;
        let next = self
            .entries()
            .iter()
            .filter(|e| e.id() != id)
            .cloned()
            .collect();
        self.commit(next);
        Some(removed)
    }

    /// Sets the quantity for `id`. Zero removes the entry. Returns the previous
    /// entry, or `None` when `id` is not in the cart (nothing changes).
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) -> Option<CartEntry> {
        if quantity == 0 {
            return self.remove(id);
        }
        let previous = self.get(id).cloned()?;
        let next = self
            .entries()
            .iter()
            .map(|e| {
                if e.id() == id {
                    CartEntry {
                        quantity,
                        ..e.clone()
                    }
                } else {
                    e.clone()
                }
            })
            .collect();
        self.commit(next);
        Some(previous)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.notifier.emit(StoreEvent::CartChanged { total_items: 0 });
    }

    pub fn total_item_count(&self) -> u32 {
        total_item_count(self.entries())
    }

    pub fn summarize(&self) -> CartSummary {
        CartSummary::from_entries(self.entries())
    }

    fn commit(&mut self, next: Vec<CartEntry>) {
        self.entries.replace(next);
        let total_items = self.total_item_count();
        self.notifier.emit(StoreEvent::CartChanged { total_items });
    }
}
