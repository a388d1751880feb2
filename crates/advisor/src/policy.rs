//! Reorder policy configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use shelfwise_core::{DomainError, DomainResult};

/// Tunable thresholds and demand assumptions for the reorder advisor.
///
/// Nothing here is global: call sites construct a policy (usually from
/// `Default`), override what they need, and hand it to the advisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderPolicy {
    /// Stock at or below this level produces an alert.
    pub low_stock_threshold: u32,
    /// Stock at or below this level (but above zero) is classified critical.
    pub critical_stock_threshold: u32,
    /// Assumed days between placing a reorder and receiving stock.
    pub lead_time_days: u32,
    /// Fixed buffer added to every reorder suggestion.
    pub safety_stock_units: u32,
    /// Average units sold per day, by category.
    ///
    /// Placeholder data maintained by hand until order history backs it
    /// (see `SalesRateProvider`).
    pub category_average_sales: HashMap<String, f64>,
    /// Fallback daily sales rate for categories missing from the table.
    pub default_average_sales: f64,
}

impl Default for ReorderPolicy {
    fn default() -> Self {
        Self {
            low_stock_threshold: 10,
            critical_stock_threshold: 5,
            lead_time_days: 7,
            safety_stock_units: 10,
            category_average_sales: default_category_table(),
            default_average_sales: 5.0,
        }
    }
}

impl ReorderPolicy {
    pub fn with_low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn with_critical_stock_threshold(mut self, threshold: u32) -> Self {
        self.critical_stock_threshold = threshold;
        self
    }

    pub fn with_lead_time_days(mut self, days: u32) -> Self {
        self.lead_time_days = days;
        self
    }

    pub fn with_safety_stock_units(mut self, units: u32) -> Self {
        self.safety_stock_units = units;
        self
    }

    pub fn with_category_average_sales(mut self, table: HashMap<String, f64>) -> Self {
        self.category_average_sales = table;
        self
    }

    pub fn with_default_average_sales(mut self, rate: f64) -> Self {
        self.default_average_sales = rate;
        self
    }

    /// Check the policy is internally consistent.
    pub fn validate(&self) -> DomainResult<()> {
        if self.critical_stock_threshold > self.low_stock_threshold {
            return Err(DomainError::invariant(
                "critical_stock_threshold cannot exceed low_stock_threshold",
            ));
        }
        if !(self.default_average_sales.is_finite() && self.default_average_sales >= 0.0) {
            return Err(DomainError::validation(
                "default_average_sales must be finite and non-negative",
            ));
        }
        for (category, rate) in &self.category_average_sales {
            if !(rate.is_finite() && *rate >= 0.0) {
                return Err(DomainError::validation(format!(
                    "average sales rate for category '{category}' must be finite and non-negative"
                )));
            }
        }
        Ok(())
    }
}

fn default_category_table() -> HashMap<String, f64> {
    HashMap::from([
        ("Đồ uống".to_string(), 8.0),
        ("Thực phẩm khô".to_string(), 6.0),
        ("Rau củ".to_string(), 12.0),
        ("Trái cây".to_string(), 10.0),
        ("Sữa".to_string(), 7.0),
        ("Bánh kẹo".to_string(), 4.0),
        ("Gia vị".to_string(), 3.0),
    ])
}
