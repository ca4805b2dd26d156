use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: String,
    /// Never filled by the remote API; kept for consumers that expect it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub product: String,
    pub price: f64,
    pub brand: Option<String>,
}

/// Item object as returned by `get_items` and `filter`. Fields other than
/// these four are ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct RemoteItem {
    pub id: String,
    pub product: String,
    pub price: f64,
    #[serde(default)]
    pub brand: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u32,
    pub items_per_page: u32,
}

impl PageRequest {
    pub fn new(page_number: u32, items_per_page: u32) -> Result<Self> {
        if page_number == 0 {
            return Err(CatalogError::InvalidPage(
                "page number must start at 1".to_string(),
            ));
        }
        if items_per_page == 0 {
            return Err(CatalogError::InvalidPage(
                "items per page must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            page_number,
            items_per_page,
        })
    }

    pub fn offset(&self) -> u64 {
        (u64::from(self.page_number) - 1) * u64::from(self.items_per_page)
    }

    pub fn limit(&self) -> u32 {
        self.items_per_page
    }
}

/// Constraints for the `filter` action. Absent keys are left out of the
/// request body entirely.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl FilterCriteria {
    pub fn by_product(product: impl Into<String>) -> Self {
        Self {
            product: Some(product.into()),
            ..Self::default()
        }
    }

    pub fn by_price(price: f64) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn by_brand(brand: impl Into<String>) -> Self {
        Self {
            brand: Some(brand.into()),
            ..Self::default()
        }
    }

    /// Coerces a raw price input. Anything that does not parse becomes NaN,
    /// which serializes as JSON `null`.
    pub fn price_from_input(input: &str) -> f64 {
        input.trim().parse::<f64>().unwrap_or(f64::NAN)
    }

    pub fn is_empty(&self) -> bool {
        self.product.is_none() && self.price.is_none() && self.brand.is_none()
    }
}

#[derive(Serialize, Debug)]
pub struct GetIdsParams {
    pub offset: u64,
    pub limit: u32,
}

#[derive(Serialize, Debug)]
pub struct GetItemsParams<'a> {
    pub ids: &'a [String],
}

/// Body of every remote call: `{"action": ..., "params": {...}}`.
#[derive(Serialize, Debug)]
pub struct ActionRequest<'a, P: Serialize> {
    pub action: &'a str,
    pub params: &'a P,
}

#[derive(Deserialize, Debug)]
pub struct ActionResponse<T> {
    pub result: T,
}

/// One page of the catalog as seen by a viewer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub page: u32,
    pub products: Vec<ProductRecord>,
    pub has_previous: bool,
    pub has_next: bool,
}
