//! Amenities emissions: spend-based ratios for site services.

use crate::event::AmenitiesInput;
use crate::factors::EmissionFactorTable;

/// Computes amenities emissions in kg CO2e from euro expenses.
pub fn emissions(input: &AmenitiesInput, factors: &EmissionFactorTable) -> f64 {
    let a = &factors.amenities;
    input.site_rental_expenses * a.site_rental_euro_ratio
        + input.reception_expenses * a.reception_euro_ratio
        + input.construction_expenses * a.construction_euro_ratio
        + input.it_expenses * a.it_euro_ratio
}
