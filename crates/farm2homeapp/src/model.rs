use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type ProductId = u32;

/// A read-only catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Currency-formatted label, e.g. `₹40 /kg`.
    pub price: String,
    #[serde(rename = "img")]
    pub image: String,
    pub category: String,
}

impl Product {
    pub fn new(id: ProductId, name: &str, price: &str, image: &str, category: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            price: price.to_string(),
            image: image.to_string(),
            category: category.to_string(),
        }
    }
}

/// A promotional "deal" tile. Display only, never added to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub name: String,
    pub offer: String,
    pub price: String,
    #[serde(rename = "img")]
    pub image: String,
}

/// A product in the cart together with how many were added.
///
/// Product fields are flattened so the persisted shape is the product object
/// with an extra `quantity` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }
}

/// Millisecond-timestamp identifier for a registered farmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FarmerId(pub u64);

impl fmt::Display for FarmerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for FarmerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(FarmerId)
    }
}

/// Raw registration form fields, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FarmerInput {
    pub name: String,
    pub mobile: String,
    pub location: String,
    pub crops: String,
}

impl FarmerInput {
    pub fn new(
        name: impl Into<String>,
        mobile: impl Into<String>,
        location: impl Into<String>,
        crops: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mobile: mobile.into(),
            location: location.into(),
            crops: crops.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredFarmerRecord")]
pub struct FarmerRecord {
    pub id: FarmerId,
    pub name: String,
    pub mobile: String,
    pub location: String,
    pub crops: String,
    pub created_at: DateTime<Utc>,
}

/// On-disk form of [`FarmerRecord`]. Older records were written without
/// `createdAt`; their id is the registration time in milliseconds.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredFarmerRecord {
    id: FarmerId,
    name: String,
    mobile: String,
    location: String,
    crops: String,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<StoredFarmerRecord> for FarmerRecord {
    fn from(stored: StoredFarmerRecord) -> Self {
        let created_at = stored.created_at.unwrap_or_else(|| {
            i64::try_from(stored.id.0)
                .ok()
                .and_then(DateTime::from_timestamp_millis)
                .unwrap_or_default()
        });
        Self {
            id: stored.id,
            name: stored.name,
            mobile: stored.mobile,
            location: stored.location,
            crops: stored.crops,
            created_at,
        }
    }
}

impl FarmerRecord {
    /// Builds a record from already-validated input. Field values are trimmed.
    pub fn from_input(id: FarmerId, input: &FarmerInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name.trim().to_string(),
            mobile: input.mobile.trim().to_string(),
            location: input.location.trim().to_string(),
            crops: input.crops.trim().to_string(),
            created_at,
        }
    }
}
