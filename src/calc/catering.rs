//! Catering emissions: meals split by diet mix, beverages, and tableware.

use crate::event::{CateringInput, Tableware};
use crate::factors::EmissionFactorTable;

/// Computes catering emissions in kg CO2e.
///
/// Breakfasts and snacks use flat per-serving factors. Lunches and
/// dinners are each split across the three diet-mix percentages
/// (nominally summing to 100, not enforced) and weighted by the
/// corresponding per-meal factor. Beverages use flat per-unit factors.
/// The tableware surcharge depends on the disposable/reusable choice:
/// disposable applies separate meal and snack rates, reusable one
/// aggregate rate over meals and snacks together.
pub fn emissions(input: &CateringInput, factors: &EmissionFactorTable) -> f64 {
    let c = &factors.catering;
    let mut total = 0.0;

    total += input.breakfasts_count as f64 * c.breakfast;
    total += input.snacks_count as f64 * c.snack;

    // Diet-weighted per-meal factor, applied to lunches and dinners alike.
    let diet_weighted = c.meal_meat_heavy * input.meals_meat_heavy_pct / 100.0
        + c.meal_balanced * input.meals_balanced_pct / 100.0
        + c.meal_vegetarian * input.meals_vegetarian_pct / 100.0;
    total += input.lunches_count as f64 * diet_weighted;
    total += input.dinners_count as f64 * diet_weighted;

    total += input.water_liters * c.water_liter;
    total += input.coffee_units as f64 * c.coffee_unit;
    total += input.soft_drinks_units as f64 * c.soft_drink_unit;
    total += input.alcohol_units as f64 * c.alcohol_unit;

    let meals = (input.breakfasts_count + input.lunches_count + input.dinners_count) as f64;
    match input.tableware {
        Tableware::Disposable => {
            total += meals * c.tableware_disposable_meal;
            total += input.snacks_count as f64 * c.tableware_disposable_snack;
        }
        Tableware::Reusable => {
            total += (meals + input.snacks_count as f64) * c.tableware_reusable;
        }
    }

    total
}
