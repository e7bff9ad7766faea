//! Purchases emissions: goodies by spend, badges by headcount and
//! material.

use crate::event::{EventProfile, PurchasesInput};
use crate::factors::EmissionFactorTable;
use crate::population::ResolvedPopulation;

/// Computes purchases emissions in kg CO2e.
///
/// Goodies are priced per attendee from the declared visitor count
/// plus resolved exhibitor headcount. Badges are counted explicitly
/// per audience.
pub fn emissions(
    event: &EventProfile,
    population: &ResolvedPopulation,
    input: &PurchasesInput,
    factors: &EmissionFactorTable,
) -> f64 {
    let p = &factors.purchases;
    let attendees = (event.total_visitors + population.total_exhibitors) as f64;
    let goodies = attendees * input.goodies_expenses_per_person * p.goodies_ratio();

    let badges = (input.badges_visitors + input.badges_exhibitors + input.badges_organizers) as f64
        * p.badge_factor(input.badge_material.key());

    goodies + badges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::BadgeMaterial;

    fn population(total_exhibitors: i64) -> ResolvedPopulation {
        ResolvedPopulation {
            total_exhibitors,
            ..ResolvedPopulation::default()
        }
    }

    #[test]
    fn goodies_scale_with_attendees_and_spend() {
        let mut factors = EmissionFactorTable::builtin();
        factors.purchases.goodies.clear();
        factors
            .purchases
            .goodies
            .insert("light_office_supplies".into(), 2.0);
        factors.purchases.goodies_default_category = "light_office_supplies".into();
        let event = EventProfile {
            total_visitors: 80,
            ..EventProfile::default()
        };
        let input = PurchasesInput {
            goodies_expenses_per_person: 3.0,
            ..PurchasesInput::default()
        };
        // (80 + 20) * 3.0 * 2.0
        let got = emissions(&event, &population(20), &input, &factors);
        assert!((got - 600.0).abs() < 1e-9);
    }

    #[test]
    fn badges_use_material_factor() {
        let mut factors = EmissionFactorTable::builtin();
        factors.purchases.badges.insert("paper".into(), 0.02);
        let input = PurchasesInput {
            badges_visitors: 100,
            badges_exhibitors: 40,
            badges_organizers: 10,
            badge_material: BadgeMaterial::Paper,
            ..PurchasesInput::default()
        };
        let got = emissions(&EventProfile::default(), &population(0), &input, &factors);
        assert!((got - 3.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_badge_material_degrades_to_zero() {
        let mut factors = EmissionFactorTable::builtin();
        factors.purchases.badges.clear();
        let input = PurchasesInput {
            badges_visitors: 50,
            ..PurchasesInput::default()
        };
        let got = emissions(&EventProfile::default(), &population(0), &input, &factors);
        assert_eq!(got, 0.0);
    }
}
