use serde::{Deserialize, Serialize};

use shelfwise_advisor::{AlertLevel, ReorderAdvisor, SalesRateProvider};
use shelfwise_catalog::ProductStock;

/// Dashboard aggregate over one product snapshot.
///
/// Counts mirror the stock queries, so they nest: every out-of-stock product
/// is also counted as critical and low.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub total_products: usize,
    pub total_inventory_value: f64,
    pub low_stock_count: usize,
    pub critical_stock_count: usize,
    pub out_of_stock_count: usize,
}

/// Compute the dashboard summary in one pass over the snapshot.
pub fn inventory_summary<P: SalesRateProvider>(
    advisor: &ReorderAdvisor<P>,
    products: &[ProductStock],
) -> InventorySummary {
    let mut summary = InventorySummary {
        total_products: products.len(),
        total_inventory_value: 0.0,
        low_stock_count: 0,
        critical_stock_count: 0,
        out_of_stock_count: 0,
    };

    for product in products {
        summary.total_inventory_value += product.stock_value();
        if !advisor.needs_reorder(product) {
            continue;
        }
        summary.low_stock_count += 1;
        match advisor.classify_alert_level(product.stock) {
            AlertLevel::OutOfStock => {
                summary.critical_stock_count += 1;
                summary.out_of_stock_count += 1;
            }
            AlertLevel::Critical => summary.critical_stock_count += 1,
            AlertLevel::Low => {}
        }
    }

    summary
}
