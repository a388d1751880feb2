//! Command-line front-end: product snapshot in, purchase report out.
//!
//! Stands in for the surrounding application: it loads a product snapshot
//! from a JSON file, runs the reorder advisor with the default policy, and
//! writes the purchase recommendation report to stdout as JSON.

use std::fs;
use std::io::{self, Write};

use anyhow::Context;
use chrono::Utc;

use shelfwise_advisor::{ReorderAdvisor, ReorderPolicy};
use shelfwise_reports::{inventory_summary, purchase_report, PriorityPolicy};

mod intake;

fn main() -> anyhow::Result<()> {
    shelfwise_observability::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: shelfwise <products.json>")?;
    let raw = fs::read_to_string(&path).with_context(|| format!("reading snapshot {path}"))?;
    let products = intake::parse_snapshot(&raw)?;

    let policy = ReorderPolicy::default();
    policy.validate()?;
    let advisor = ReorderAdvisor::new(policy);

    let summary = inventory_summary(&advisor, &products);
    tracing::info!(
        products = summary.total_products,
        low_stock = summary.low_stock_count,
        out_of_stock = summary.out_of_stock_count,
        total_value = summary.total_inventory_value,
        "loaded product snapshot"
    );

    let report = purchase_report(&advisor, &products, &PriorityPolicy::default(), Utc::now());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &report)?;
    writeln!(out)?;

    Ok(())
}
