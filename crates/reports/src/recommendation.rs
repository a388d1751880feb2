use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shelfwise_advisor::{AlertLevel, ReorderAdvisor, SalesRateProvider};
use shelfwise_catalog::ProductStock;
use shelfwise_core::{ProductId, ValueObject};

/// Purchasing urgency bucket.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Business policy mapping alert levels to purchasing priority buckets.
///
/// The mapping is policy, not a fixed rule: different consumers of the same
/// alert data bucket differently, so each supplies its own mapping (or takes
/// the default).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityPolicy {
    pub out_of_stock: Priority,
    pub critical: Priority,
    pub low: Priority,
}

impl Default for PriorityPolicy {
    fn default() -> Self {
        Self {
            out_of_stock: Priority::High,
            critical: Priority::High,
            low: Priority::Medium,
        }
    }
}

impl PriorityPolicy {
    pub fn bucket_for(&self, level: AlertLevel) -> Priority {
        match level {
            AlertLevel::OutOfStock => self.out_of_stock,
            AlertLevel::Critical => self.critical,
            AlertLevel::Low => self.low,
        }
    }
}

/// One line of the purchase recommendation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecommendation {
    pub product_id: ProductId,
    pub product_name: String,
    pub current_stock: u32,
    /// The low-stock threshold the recommendation was generated against.
    pub min_stock_level: u32,
    pub average_daily_sales: f64,
    /// Measured when the sales provider tracks per-product history,
    /// otherwise estimated from the daily rate.
    pub total_sold_last_30_days: u32,
    pub recommended_quantity: u32,
    pub priority: Priority,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_purchase_price: Option<f64>,
}

impl ValueObject for PurchaseRecommendation {}

/// The purchase recommendation report: recommendations partitioned into
/// ordered priority buckets.
///
/// Bucket order is insertion order from the source snapshot; there is no
/// secondary sort key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseReport {
    pub generated_at: DateTime<Utc>,
    pub high_priority: Vec<PurchaseRecommendation>,
    pub medium_priority: Vec<PurchaseRecommendation>,
    pub low_priority: Vec<PurchaseRecommendation>,
}

impl PurchaseReport {
    pub fn len(&self) -> usize {
        self.high_priority.len() + self.medium_priority.len() + self.low_priority.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the purchase recommendation report for a product snapshot.
///
/// One recommendation per product at or below the advisor's low-stock
/// threshold, routed into a bucket by `priorities`.
pub fn purchase_report<P: SalesRateProvider>(
    advisor: &ReorderAdvisor<P>,
    products: &[ProductStock],
    priorities: &PriorityPolicy,
    generated_at: DateTime<Utc>,
) -> PurchaseReport {
    let mut report = PurchaseReport {
        generated_at,
        high_priority: Vec::new(),
        medium_priority: Vec::new(),
        low_priority: Vec::new(),
    };

    for product in products.iter().filter(|p| advisor.needs_reorder(p)) {
        let level = advisor.classify_alert_level(product.stock);
        let recommendation = recommend(advisor, product, level, priorities);
        match recommendation.priority {
            Priority::High => report.high_priority.push(recommendation),
            Priority::Medium => report.medium_priority.push(recommendation),
            Priority::Low => report.low_priority.push(recommendation),
        }
    }

    tracing::debug!(
        high = report.high_priority.len(),
        medium = report.medium_priority.len(),
        low = report.low_priority.len(),
        "purchase report generated"
    );

    report
}

fn recommend<P: SalesRateProvider>(
    advisor: &ReorderAdvisor<P>,
    product: &ProductStock,
    level: AlertLevel,
    priorities: &PriorityPolicy,
) -> PurchaseRecommendation {
    let rate = advisor.sales().average_daily_sales(&product.category);
    let quantity = advisor.suggested_reorder_quantity(product);
    let total_sold = advisor
        .sales()
        .total_sold(&product.id)
        .unwrap_or_else(|| (rate * 30.0).round() as u32);

    PurchaseRecommendation {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        current_stock: product.stock,
        min_stock_level: advisor.policy().low_stock_threshold,
        average_daily_sales: rate,
        total_sold_last_30_days: total_sold,
        recommended_quantity: quantity,
        priority: priorities.bucket_for(level),
        reason: reason_for(advisor, level, product.stock),
        suggested_purchase_price: (product.unit_cost > 0.0)
            .then(|| f64::from(quantity) * product.unit_cost),
    }
}

fn reason_for<P: SalesRateProvider>(
    advisor: &ReorderAdvisor<P>,
    level: AlertLevel,
    stock: u32,
) -> String {
    match level {
        AlertLevel::OutOfStock => "out of stock".to_string(),
        AlertLevel::Critical => format!(
            "stock {stock} at or below critical threshold {}",
            advisor.policy().critical_stock_threshold
        ),
        AlertLevel::Low => format!(
            "stock {stock} at or below low-stock threshold {}",
            advisor.policy().low_stock_threshold
        ),
    }
}
