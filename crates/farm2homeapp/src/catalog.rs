//! Static storefront catalog: products, deals and the category bar.
//!
//! The catalog is built once and never mutated. Stores treat products as
//! opaque input.

use crate::error::{Farm2HomeError, Result};
use crate::model::{Deal, Product, ProductId};
use once_cell::sync::Lazy;

/// Category labels in display order. `All` matches every product.
pub const CATEGORIES: [&str; 8] = [
    "All",
    "Grocery",
    "Vegetables",
    "Fruits",
    "Dairy",
    "Grains",
    "Organic",
    "Offers",
];

pub const ALL_CATEGORIES: &str = "All";

static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::new(1, "Tomatoes", "₹40 /kg", "/images/Tomato.jpeg", "Vegetables"),
        Product::new(2, "Potatoes", "₹30 /kg", "/images/Potato.jpg", "Vegetables"),
        Product::new(3, "Mangoes", "₹99 /kg", "/images/Mango.jpeg", "Fruits"),
        Product::new(4, "Milk", "₹55 /L", "/images/Milk.jpeg", "Dairy"),
        Product::new(
            5,
            "Organic Rice",
            "₹120 /kg",
            "https://via.placeholder.com/300x200?text=Organic+Rice",
            "Grains",
        ),
        Product::new(
            6,
            "Paneer",
            "₹320 /kg",
            "https://via.placeholder.com/300x200?text=Paneer",
            "Dairy",
        ),
        Product::new(
            7,
            "Leafy Greens",
            "₹25 /bunch",
            "https://via.placeholder.com/300x200?text=Leafy+Greens",
            "Organic",
        ),
    ]
});

static DEALS: Lazy<Vec<Deal>> = Lazy::new(|| {
    let deal = |name: &str, offer: &str, price: &str, image: &str| Deal {
        name: name.to_string(),
        offer: offer.to_string(),
        price: price.to_string(),
        image: image.to_string(),
    };
    vec![
        deal(
            "Onions",
            "Up to 30% off",
            "From ₹29",
            "https://via.placeholder.com/260x160?text=Onions",
        ),
        deal("Potatoes", "Up to 40% off", "From ₹25", "/images/Potato.jpg"),
        deal("Mangoes", "Season Special", "From ₹99", "/images/Mango.jpeg"),
        deal("Milk", "Daily essentials", "From ₹55", "/images/Milk.jpeg"),
        deal(
            "Wheat",
            "Bulk offers",
            "From ₹39",
            "https://via.placeholder.com/260x160?text=Wheat",
        ),
        deal(
            "Sugar",
            "Combo packs",
            "From ₹45",
            "https://via.placeholder.com/260x160?text=Sugar",
        ),
    ]
});

pub fn products() -> &'static [Product] {
    &PRODUCTS
}

pub fn deals() -> &'static [Deal] {
    &DEALS
}

pub fn find(id: ProductId) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// Resolves a user-supplied category to its canonical label.
pub fn resolve_category(category: &str) -> Result<&'static str> {
    let wanted = category.trim();
    CATEGORIES
        .iter()
        .find(|c| c.eq_ignore_ascii_case(wanted))
        .copied()
        .ok_or_else(|| Farm2HomeError::UnknownCategory(wanted.to_string()))
}

/// Products in `category`, in catalog order. `All` returns everything.
pub fn filter(category: &str) -> Result<Vec<&'static Product>> {
    let label = resolve_category(category)?;
    Ok(PRODUCTS
        .iter()
        .filter(|p| label == ALL_CATEGORIES || p.category.eq_ignore_ascii_case(label))
        .collect())
}
