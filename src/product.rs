use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CatalogError;

/// A catalog item as stored under `product-<id>`.
///
/// Wire names follow the storefront's JSON (`imageUrl`). Quantity is signed:
/// stock updates never floor it at zero. Missing and `null` fields both read
/// as their defaults, so records written with `"tags":null` still decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Product {
            id,
            name: name.into(),
            category: String::new(),
            price: 0.0,
            description: String::new(),
            image_url: String::new(),
            quantity: 0,
            tags: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Remove `purchase_qty` units from stock and return what is left.
    ///
    /// The result may be negative. Fails without touching the product when it
    /// would fall below `i64::MIN`.
    pub fn take_stock(&mut self, purchase_qty: u64) -> Result<i64, CatalogError> {
        let remaining = i64::try_from(purchase_qty)
            .ok()
            .and_then(|qty| self.quantity.checked_sub(qty))
            .ok_or(CatalogError::QuantityOverflow {
                id: self.id,
                purchase_qty,
            })?;
        self.quantity = remaining;
        Ok(remaining)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One line of a stock-update batch: remove `purchase_qty` units from `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdate {
    pub id: i64,
    pub purchase_qty: u64,
}

impl StockUpdate {
    pub fn new(id: i64, purchase_qty: u64) -> Self {
        StockUpdate { id, purchase_qty }
    }
}
