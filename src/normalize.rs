use std::collections::HashSet;

use crate::models::{ProductRecord, RemoteItem};

pub fn project_item(item: RemoteItem) -> ProductRecord {
    ProductRecord {
        id: item.id,
        name: None,
        product: item.product,
        price: item.price,
        brand: item.brand,
    }
}

pub fn project_items(items: Vec<RemoteItem>) -> Vec<ProductRecord> {
    items.into_iter().map(project_item).collect()
}

/// Keeps the first record for every id, in response order.
pub fn dedupe_by_id(records: Vec<ProductRecord>) -> Vec<ProductRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.id.clone()))
        .collect()
}
