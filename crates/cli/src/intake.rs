//! Snapshot intake: external product JSON to catalog records.
//!
//! The upstream catalog API has drifted over time: ids arrive as `id` or
//! `_id`, unit cost as `purchasePrice` or `importPrice`, and `stock` may be
//! missing entirely (treated as 0). This module absorbs that variance so
//! the domain crates never see it.

use anyhow::Context;
use serde::Deserialize;

use shelfwise_catalog::ProductStock;
use shelfwise_core::{DomainResult, ProductId};

/// Raw product object as served by the catalog endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Missing stock means the record predates stock tracking.
    #[serde(default)]
    pub stock: u32,
    #[serde(rename = "purchasePrice", alias = "importPrice", default)]
    pub purchase_price: f64,
    #[serde(default)]
    pub unit: String,
}

impl RawProduct {
    pub fn into_product(self) -> DomainResult<ProductStock> {
        let id = ProductId::new(self.id)?;
        ProductStock::new(
            id,
            self.name,
            self.category,
            self.stock,
            self.purchase_price,
            self.unit,
        )
    }
}

/// Parse a JSON array of raw products into validated stock records.
pub fn parse_snapshot(json: &str) -> anyhow::Result<Vec<ProductStock>> {
    let raw: Vec<RawProduct> =
        serde_json::from_str(json).context("snapshot is not a JSON array of products")?;

    raw.into_iter()
        .map(|record| {
            let id = record.id.clone();
            record
                .into_product()
                .with_context(|| format!("invalid product record '{id}'"))
        })
        .collect()
}
