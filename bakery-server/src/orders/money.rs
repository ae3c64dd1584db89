//! Money calculation utilities using rust_decimal for precision
//!
//! All arithmetic is done in `Decimal`, then converted back to `f64`
//! (rounded to 2 places) for storage and serialization.

use rust_decimal::prelude::*;
use shared::models::{Addon, CakeSize};

use crate::orders::traits::OrderError;
use crate::utils::validation::MAX_PRICE;

/// Rounding precision for monetary values
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Resolve selected add-on ids against the catalog
///
/// Duplicates collapse and ids missing from the catalog are skipped, both
/// silently. The result keeps the order of first selection.
pub fn select_addons(selected: &[i64], catalog: &[Addon]) -> Vec<Addon> {
    let mut picked: Vec<Addon> = Vec::with_capacity(selected.len());
    for id in selected {
        if picked.iter().any(|a| a.id == *id) {
            continue;
        }
        match catalog.iter().find(|a| a.id == *id) {
            Some(addon) => picked.push(addon.clone()),
            None => tracing::debug!(addon_id = id, "Skipping unknown add-on"),
        }
    }
    picked
}

/// Size price plus every selected add-on found in the catalog
pub fn compute_total(size: &CakeSize, selected: &[i64], catalog: &[Addon]) -> f64 {
    let addons = select_addons(selected, catalog);
    to_f64(
        addons
            .iter()
            .fold(to_decimal(size.price), |acc, a| acc + to_decimal(a.price)),
    )
}

/// Extra charges must be finite, positive and bounded
pub fn validate_charge(amount: f64) -> Result<(), OrderError> {
    if !amount.is_finite() {
        return Err(OrderError::InvalidExtraCharge(format!(
            "amount must be a finite number, got {amount}"
        )));
    }
    if amount <= 0.0 {
        return Err(OrderError::InvalidExtraCharge(format!(
            "amount must be greater than 0, got {amount}"
        )));
    }
    if amount > MAX_PRICE {
        return Err(OrderError::InvalidExtraCharge(format!(
            "amount exceeds maximum allowed ({MAX_PRICE}), got {amount}"
        )));
    }
    Ok(())
}

/// `base + amount`, both rounded to cents
pub fn add_amount(base: f64, amount: f64) -> f64 {
    to_f64(to_decimal(base) + to_decimal(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addon(id: i64, price: f64) -> Addon {
        Addon {
            id,
            name: format!("addon-{id}"),
            price,
            description: None,
            kind: None,
            is_available: true,
        }
    }

    #[test]
    fn test_compute_total_scenario() {
        let size = CakeSize::new("0.5kg", 500.0);
        let catalog = vec![addon(1, 100.0), addon(2, 150.0)];
        assert_eq!(compute_total(&size, &[1, 2], &catalog), 750.0);
    }

    #[test]
    fn test_unknown_and_duplicate_ids() {
        let size = CakeSize::new("1kg", 1200.0);
        let catalog = vec![addon(1, 200.0), addon(2, 100.0)];
        assert_eq!(compute_total(&size, &[], &catalog), 1200.0);
        assert_eq!(compute_total(&size, &[99], &catalog), 1200.0);
        assert_eq!(compute_total(&size, &[1, 1, 1], &catalog), 1400.0);
        assert_eq!(compute_total(&size, &[2, 99, 1], &catalog), 1500.0);

        let picked = select_addons(&[2, 99, 1, 2], &catalog);
        let ids: Vec<i64> = picked.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_decimal_precision() {
        let size = CakeSize::new("0.5kg", 0.1);
        let catalog = vec![addon(1, 0.2)];
        assert_eq!(compute_total(&size, &[1], &catalog), 0.3);
        assert_eq!(add_amount(1000.0, 99.99), 1099.99);
        assert_eq!(add_amount(0.1, 0.2), 0.3);
    }

    #[test]
    fn test_validate_charge() {
        assert!(validate_charge(50.0).is_ok());
        for bad in [0.0, -10.0, f64::NAN, f64::INFINITY, MAX_PRICE * 2.0] {
            assert!(matches!(
                validate_charge(bad),
                Err(OrderError::InvalidExtraCharge(_))
            ));
        }
    }
}
