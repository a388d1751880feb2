use serde::{Deserialize, Serialize};

use shelfwise_core::{DomainError, DomainResult, Entity, ProductId};

/// A point-in-time stock record for one catalog product.
///
/// Snapshots are supplied by the surrounding application (catalog and stock
/// lookups); this crate validates shape at construction, it never loads
/// anything itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductStock {
    pub id: ProductId,
    pub name: String,
    /// Category key used for sales-rate lookups (free-form).
    pub category: String,
    /// On-hand quantity.
    pub stock: u32,
    /// Cost per unit. Fractional values are legal.
    pub unit_cost: f64,
    /// Display label for the unit of measure (e.g. "kg", "bottle").
    pub unit: String,
}

impl ProductStock {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        stock: u32,
        unit_cost: f64,
        unit: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !unit_cost.is_finite() || unit_cost < 0.0 {
            return Err(DomainError::validation(
                "unit_cost must be finite and non-negative",
            ));
        }
        Ok(Self {
            id,
            name,
            category: category.into(),
            stock,
            unit_cost,
            unit: unit.into(),
        })
    }

    /// Value of the on-hand stock (`unit_cost` times `stock`).
    pub fn stock_value(&self) -> f64 {
        self.unit_cost * f64::from(self.stock)
    }
}

impl Entity for ProductStock {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
