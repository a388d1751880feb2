use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shelfwise_core::{ProductId, ValueObject};

/// Urgency classification of a product's stock state.
///
/// Derived purely from the current stock relative to the policy thresholds;
/// exactly one level applies at a time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Low,
    Critical,
    OutOfStock,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Low => "low",
            AlertLevel::Critical => "critical",
            AlertLevel::OutOfStock => "out_of_stock",
        }
    }
}

impl core::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reorder alert for one product, recomputed on every request.
///
/// Alerts have no identity or persistence of their own: recomputing on an
/// unchanged snapshot (with the same timestamp) yields an identical alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryAlert {
    pub product_id: ProductId,
    pub product_name: String,
    pub current_stock: u32,
    /// The low-stock threshold the alert was generated against.
    pub threshold: u32,
    pub alert_level: AlertLevel,
    pub suggested_reorder_quantity: u32,
    /// When the computation ran. Informational only.
    pub created_at: DateTime<Utc>,
}

impl ValueObject for InventoryAlert {}
