//! Budget filter — pure selection of the catalog entries a buyer can afford.

use crate::models::laptop::Laptop;

/// Returns the entries with `price <= budget`, preserving catalog order.
///
/// Deterministic and side-effect free. An empty result means nothing in the
/// catalog fits the budget; callers short-circuit instead of asking the
/// model to rank an empty candidate set.
pub fn within_budget(catalog: &[Laptop], budget: f64) -> Vec<Laptop> {
    catalog
        .iter()
        .filter(|laptop| laptop.price <= budget)
        .cloned()
        .collect()
}
