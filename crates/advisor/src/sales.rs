//! Sales-rate providers.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use shelfwise_core::ProductId;

use crate::policy::ReorderPolicy;

/// Capability: how fast does a category sell, in units per day?
///
/// The advisor only ever asks this question; where the answer comes from (a
/// hand-maintained table, aggregated order history, a forecasting service)
/// is the provider's business.
pub trait SalesRateProvider {
    fn average_daily_sales(&self, category: &str) -> f64;

    /// Units of a specific product sold inside the provider's window, when
    /// the provider tracks per-product history. Table-backed providers
    /// return `None` and callers fall back to an estimate.
    fn total_sold(&self, product_id: &ProductId) -> Option<u32> {
        let _ = product_id;
        None
    }
}

/// Static category table with a default fallback rate.
///
/// This is the placeholder provider: the rates are assumptions, not
/// measurements. Swap in [`OrderHistoryRates`] once real sales history is
/// available.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    rates: HashMap<String, f64>,
    default_rate: f64,
}

impl CategoryTable {
    pub fn new(rates: HashMap<String, f64>, default_rate: f64) -> Self {
        Self {
            rates,
            default_rate,
        }
    }

    /// Build the table the policy carries.
    pub fn from_policy(policy: &ReorderPolicy) -> Self {
        Self::new(
            policy.category_average_sales.clone(),
            policy.default_average_sales,
        )
    }
}

impl SalesRateProvider for CategoryTable {
    fn average_daily_sales(&self, category: &str) -> f64 {
        self.rates
            .get(category)
            .copied()
            .unwrap_or(self.default_rate)
    }
}

/// One sold line from order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub product_id: ProductId,
    pub category: String,
    pub quantity: u32,
    pub sold_at: DateTime<Utc>,
}

/// Sales rates aggregated from a trailing window of order history.
///
/// Rate per category is total units sold in the window divided by the window
/// length in days; categories with no sales in the window fall back to the
/// default rate.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderHistoryRates {
    window_days: u32,
    default_rate: f64,
    category_totals: HashMap<String, u32>,
    product_totals: HashMap<ProductId, u32>,
}

impl OrderHistoryRates {
    pub const DEFAULT_WINDOW_DAYS: u32 = 30;

    /// Aggregate the records that fall inside `(window_end - window_days,
    /// window_end]`. A zero-length window is widened to one day.
    pub fn from_records(
        records: &[SaleRecord],
        window_end: DateTime<Utc>,
        window_days: u32,
        default_rate: f64,
    ) -> Self {
        let window_days = window_days.max(1);
        let window_start = window_end - Duration::days(i64::from(window_days));

        let mut category_totals: HashMap<String, u32> = HashMap::new();
        let mut product_totals: HashMap<ProductId, u32> = HashMap::new();

        for record in records {
            if record.sold_at <= window_start || record.sold_at > window_end {
                continue;
            }
            *category_totals.entry(record.category.clone()).or_default() += record.quantity;
            *product_totals.entry(record.product_id.clone()).or_default() += record.quantity;
        }

        Self {
            window_days,
            default_rate,
            category_totals,
            product_totals,
        }
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }
}

impl SalesRateProvider for OrderHistoryRates {
    fn average_daily_sales(&self, category: &str) -> f64 {
        match self.category_totals.get(category) {
            Some(total) => f64::from(*total) / f64::from(self.window_days),
            None => self.default_rate,
        }
    }

    fn total_sold(&self, product_id: &ProductId) -> Option<u32> {
        self.product_totals.get(product_id).copied()
    }
}
