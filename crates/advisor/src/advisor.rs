use chrono::{DateTime, Utc};

use shelfwise_catalog::ProductStock;

use crate::alert::{AlertLevel, InventoryAlert};
use crate::policy::ReorderPolicy;
use crate::sales::{CategoryTable, SalesRateProvider};

/// Computes alert levels, reorder suggestions and stock queries from a
/// point-in-time product snapshot.
///
/// Every operation is a total, deterministic function of its inputs: no IO,
/// no clock reads, no mutation. Callers pass the computation timestamp in,
/// so recomputing on an unchanged snapshot yields identical output.
#[derive(Debug, Clone)]
pub struct ReorderAdvisor<P = CategoryTable> {
    policy: ReorderPolicy,
    sales: P,
}

impl ReorderAdvisor<CategoryTable> {
    /// Advisor backed by the policy's own category table.
    pub fn new(policy: ReorderPolicy) -> Self {
        let sales = CategoryTable::from_policy(&policy);
        Self { policy, sales }
    }
}

impl<P: SalesRateProvider> ReorderAdvisor<P> {
    /// Advisor backed by an injected sales-rate provider (e.g. aggregated
    /// order history).
    pub fn with_provider(policy: ReorderPolicy, sales: P) -> Self {
        Self { policy, sales }
    }

    pub fn policy(&self) -> &ReorderPolicy {
        &self.policy
    }

    pub fn sales(&self) -> &P {
        &self.sales
    }

    /// Whether the product's stock is low enough to warrant an alert.
    pub fn needs_reorder(&self, product: &ProductStock) -> bool {
        product.stock <= self.policy.low_stock_threshold
    }

    /// Classify a stock level.
    ///
    /// `Low` is the residual class: callers only care about it for stock at
    /// or below the low threshold, but the function is total over all of
    /// `u32`.
    pub fn classify_alert_level(&self, current_stock: u32) -> AlertLevel {
        if current_stock == 0 {
            AlertLevel::OutOfStock
        } else if current_stock <= self.policy.critical_stock_threshold {
            AlertLevel::Critical
        } else {
            AlertLevel::Low
        }
    }

    /// Suggested purchase quantity: expected demand over the lead time plus
    /// the safety buffer, rounded up. Never zero.
    pub fn suggested_reorder_quantity(&self, product: &ProductStock) -> u32 {
        let rate = self.sales.average_daily_sales(&product.category);
        let demand = rate * f64::from(self.policy.lead_time_days)
            + f64::from(self.policy.safety_stock_units);
        (demand.ceil() as u32).max(1)
    }

    /// One alert per product at or below the low-stock threshold, in input
    /// order (stable filter, no re-sorting).
    pub fn generate_alerts(
        &self,
        products: &[ProductStock],
        generated_at: DateTime<Utc>,
    ) -> Vec<InventoryAlert> {
        products
            .iter()
            .filter(|p| self.needs_reorder(p))
            .map(|p| InventoryAlert {
                product_id: p.id.clone(),
                product_name: p.name.clone(),
                current_stock: p.stock,
                threshold: self.policy.low_stock_threshold,
                alert_level: self.classify_alert_level(p.stock),
                suggested_reorder_quantity: self.suggested_reorder_quantity(p),
                created_at: generated_at,
            })
            .collect()
    }

    /// Products at or below the low-stock threshold, in input order.
    pub fn low_stock_products<'a>(&self, products: &'a [ProductStock]) -> Vec<&'a ProductStock> {
        products.iter().filter(|p| self.needs_reorder(p)).collect()
    }

    /// Products at or below the critical threshold (includes out-of-stock),
    /// in input order.
    pub fn critical_stock_products<'a>(
        &self,
        products: &'a [ProductStock],
    ) -> Vec<&'a ProductStock> {
        products
            .iter()
            .filter(|p| p.stock <= self.policy.critical_stock_threshold)
            .collect()
    }

    /// Products with no stock on hand, in input order.
    pub fn out_of_stock_products<'a>(
        &self,
        products: &'a [ProductStock],
    ) -> Vec<&'a ProductStock> {
        products.iter().filter(|p| p.stock == 0).collect()
    }

    /// Total value of the snapshot: sum of `unit_cost` times `stock`.
    pub fn total_inventory_value(&self, products: &[ProductStock]) -> f64 {
        products.iter().map(ProductStock::stock_value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfwise_core::ProductId;

    fn product(id: &str, category: &str, stock: u32) -> ProductStock {
        ProductStock::new(
            ProductId::new(id).unwrap(),
            format!("Product {id}"),
            category,
            stock,
            2.5,
            "unit",
        )
        .unwrap()
    }

    fn advisor() -> ReorderAdvisor {
        ReorderAdvisor::new(ReorderPolicy::default())
    }

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn classifies_stock_levels_against_default_thresholds() {
        let advisor = advisor();
        assert_eq!(advisor.classify_alert_level(0), AlertLevel::OutOfStock);
        assert_eq!(advisor.classify_alert_level(1), AlertLevel::Critical);
        assert_eq!(advisor.classify_alert_level(5), AlertLevel::Critical);
        assert_eq!(advisor.classify_alert_level(6), AlertLevel::Low);
        assert_eq!(advisor.classify_alert_level(10), AlertLevel::Low);
    }

    #[test]
    fn no_alert_above_the_low_stock_threshold() {
        let advisor = advisor();
        let products = vec![product("a", "Đồ uống", 11)];
        assert!(advisor.generate_alerts(&products, test_time()).is_empty());
    }

    #[test]
    fn alerts_only_for_products_at_or_below_threshold() {
        let advisor = advisor();
        let products = vec![
            product("a", "Đồ uống", 0),
            product("b", "unknown", 20),
        ];
        let alerts = advisor.generate_alerts(&products, test_time());

        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(alert.product_id.as_str(), "a");
        assert_eq!(alert.alert_level, AlertLevel::OutOfStock);
        // ceil(8 * 7 + 10) for the drinks category table rate.
        assert_eq!(alert.suggested_reorder_quantity, 66);
        assert_eq!(alert.threshold, 10);
    }

    #[test]
    fn unknown_category_uses_the_default_rate() {
        let advisor = advisor();
        let p = product("c", "unknown", 4);
        // ceil(5 * 7 + 10) with the default rate.
        assert_eq!(advisor.suggested_reorder_quantity(&p), 45);
        assert_eq!(advisor.classify_alert_level(p.stock), AlertLevel::Critical);
    }

    #[test]
    fn suggestion_is_never_zero() {
        let policy = ReorderPolicy::default()
            .with_lead_time_days(0)
            .with_safety_stock_units(0);
        let advisor = ReorderAdvisor::new(policy);
        let p = product("a", "unknown", 1);
        assert_eq!(advisor.suggested_reorder_quantity(&p), 1);
    }

    #[test]
    fn alerts_preserve_input_order() {
        let advisor = advisor();
        let products = vec![
            product("a", "Đồ uống", 3),
            product("b", "Sữa", 9),
            product("c", "Gia vị", 0),
        ];
        let alerts = advisor.generate_alerts(&products, test_time());
        let ids: Vec<&str> = alerts.iter().map(|a| a.product_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn generate_alerts_is_idempotent() {
        let advisor = advisor();
        let products = vec![
            product("a", "Đồ uống", 3),
            product("b", "unknown", 7),
        ];
        let at = test_time();
        assert_eq!(
            advisor.generate_alerts(&products, at),
            advisor.generate_alerts(&products, at)
        );
    }

    #[test]
    fn stock_queries_are_nested_filters() {
        let advisor = advisor();
        let products = vec![
            product("a", "Đồ uống", 0),
            product("b", "Sữa", 5),
            product("c", "Gia vị", 10),
            product("d", "Rau củ", 25),
        ];

        let low: Vec<&str> = advisor
            .low_stock_products(&products)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(low, vec!["a", "b", "c"]);

        let critical: Vec<&str> = advisor
            .critical_stock_products(&products)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(critical, vec!["a", "b"]);

        let out: Vec<&str> = advisor
            .out_of_stock_products(&products)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(out, vec!["a"]);
    }

    #[test]
    fn total_inventory_value_sums_cost_times_stock() {
        let advisor = advisor();
        assert_eq!(advisor.total_inventory_value(&[]), 0.0);

        let p = ProductStock::new(
            ProductId::new("a").unwrap(),
            "Rice",
            "Thực phẩm khô",
            3,
            10.0,
            "kg",
        )
        .unwrap();
        assert_eq!(advisor.total_inventory_value(&[p]), 30.0);
    }

    #[test]
    fn history_backed_advisor_uses_measured_rates() {
        use crate::sales::{OrderHistoryRates, SaleRecord};

        let now = test_time();
        let records = vec![SaleRecord {
            product_id: ProductId::new("a").unwrap(),
            category: "Đồ uống".to_string(),
            quantity: 60,
            sold_at: now - chrono::Duration::days(2),
        }];
        let rates = OrderHistoryRates::from_records(&records, now, 30, 5.0);
        let advisor = ReorderAdvisor::with_provider(ReorderPolicy::default(), rates);

        let p = product("a", "Đồ uống", 2);
        // ceil(60/30 * 7 + 10) = 24 from measured history, not the table.
        assert_eq!(advisor.suggested_reorder_quantity(&p), 24);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_products() -> impl Strategy<Value = Vec<ProductStock>> {
            proptest::collection::vec((0u32..40, 0.0f64..50.0), 0..32).prop_map(|specs| {
                specs
                    .into_iter()
                    .enumerate()
                    .map(|(i, (stock, cost))| {
                        ProductStock::new(
                            ProductId::new(format!("p{i}")).unwrap(),
                            format!("Product {i}"),
                            if i % 3 == 0 { "Đồ uống" } else { "misc" },
                            stock,
                            cost,
                            "unit",
                        )
                        .unwrap()
                    })
                    .collect()
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: classification agrees with the threshold definition
            /// for any stock level and any consistent policy.
            #[test]
            fn classification_matches_thresholds(
                stock in 0u32..10_000,
                critical in 0u32..100,
                spread in 0u32..100,
            ) {
                let policy = ReorderPolicy::default()
                    .with_critical_stock_threshold(critical)
                    .with_low_stock_threshold(critical + spread);
                let advisor = ReorderAdvisor::new(policy);

                let level = advisor.classify_alert_level(stock);
                if stock == 0 {
                    prop_assert_eq!(level, AlertLevel::OutOfStock);
                } else if stock <= critical {
                    prop_assert_eq!(level, AlertLevel::Critical);
                } else {
                    prop_assert_eq!(level, AlertLevel::Low);
                }
            }

            /// Property: an alert exists iff stock is at or below the low
            /// threshold, and output order follows input order.
            #[test]
            fn alerts_are_a_stable_filter(products in arb_products()) {
                let advisor = ReorderAdvisor::new(ReorderPolicy::default());
                let at = Utc::now();
                let alerts = advisor.generate_alerts(&products, at);

                let expected: Vec<&ProductStock> = products
                    .iter()
                    .filter(|p| p.stock <= advisor.policy().low_stock_threshold)
                    .collect();

                prop_assert_eq!(alerts.len(), expected.len());
                for (alert, product) in alerts.iter().zip(expected) {
                    prop_assert_eq!(&alert.product_id, &product.id);
                    prop_assert_eq!(alert.current_stock, product.stock);
                }
            }

            /// Property: same snapshot, same timestamp, same output.
            #[test]
            fn generation_is_deterministic(products in arb_products()) {
                let advisor = ReorderAdvisor::new(ReorderPolicy::default());
                let at = Utc::now();
                prop_assert_eq!(
                    advisor.generate_alerts(&products, at),
                    advisor.generate_alerts(&products, at)
                );
            }
        }
    }
}
