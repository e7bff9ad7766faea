//! Energy emissions: metered consumption or per-surface estimation.

use crate::event::{EnergyApproach, EnergyInput};
use crate::factors::EmissionFactorTable;

/// Days per year used to scale annual building factors to the event.
const DAYS_PER_YEAR: f64 = 365.0;

/// Computes energy emissions in kg CO2e.
///
/// The two approaches are mutually exclusive. `real` sums metered
/// consumption against fixed per-unit factors. `estimated` scales the
/// building type's annual heating/electricity/cooling triple by surface
/// and the event's share of the year; both the building type and the
/// surface must be supplied for the estimate to contribute anything.
/// Generator fuel is added on top of either approach when the flag is
/// set.
pub fn emissions(duration_days: i64, input: &EnergyInput, factors: &EmissionFactorTable) -> f64 {
    let e = &factors.energy;

    let mut total = match input.approach {
        EnergyApproach::Real => {
            input.gas_kwh * e.gas_kwh
                + input.fuel_liters * e.fuel_liter
                + input.electricity_kwh * e.electricity_kwh
                + input.coal_kg * e.coal_kg
        }
        EnergyApproach::Estimated => match (input.building_type.as_deref(), input.surface_m2) {
            (Some(building_type), Some(surface)) => {
                let b = e.building(building_type);
                let event_fraction = duration_days as f64 / DAYS_PER_YEAR;
                surface * event_fraction * (b.heating + b.electricity + b.cooling)
            }
            _ => 0.0,
        },
    };

    if input.has_generators {
        total += input.generators_fuel_liters * e.fuel_liter;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_approach_sums_metered_consumption() {
        let mut factors = EmissionFactorTable::builtin();
        factors.energy.gas_kwh = 0.2;
        factors.energy.electricity_kwh = 0.05;
        let input = EnergyInput {
            approach: EnergyApproach::Real,
            gas_kwh: 1000.0,
            electricity_kwh: 200.0,
            ..EnergyInput::default()
        };
        let total = emissions(3, &input, &factors);
        assert!((total - (1000.0 * 0.2 + 200.0 * 0.05)).abs() < 1e-9);
    }

    #[test]
    fn estimated_approach_scales_with_duration() {
        let factors = EmissionFactorTable::builtin();
        let input = EnergyInput {
            approach: EnergyApproach::Estimated,
            building_type: Some("offices".to_string()),
            surface_m2: Some(730.0),
            ..EnergyInput::default()
        };
        let b = factors.energy.building("offices");
        let annual = b.heating + b.electricity + b.cooling;
        let total = emissions(2, &input, &factors);
        assert!((total - 730.0 * (2.0 / 365.0) * annual).abs() < 1e-9);
    }

    #[test]
    fn estimated_without_surface_contributes_nothing() {
        let factors = EmissionFactorTable::builtin();
        let input = EnergyInput {
            approach: EnergyApproach::Estimated,
            building_type: Some("offices".to_string()),
            surface_m2: None,
            ..EnergyInput::default()
        };
        assert_eq!(emissions(2, &input, &factors), 0.0);
    }

    #[test]
    fn unknown_building_type_uses_offices_factors() {
        let factors = EmissionFactorTable::builtin();
        let known = EnergyInput {
            approach: EnergyApproach::Estimated,
            building_type: Some("offices".to_string()),
            surface_m2: Some(100.0),
            ..EnergyInput::default()
        };
        let unknown = EnergyInput {
            building_type: Some("igloo".to_string()),
            ..known.clone()
        };
        assert_eq!(emissions(3, &known, &factors), emissions(3, &unknown, &factors));
    }

    #[test]
    fn generator_fuel_added_on_either_approach() {
        let factors = EmissionFactorTable::builtin();
        let fuel_factor = factors.energy.fuel_liter;
        let input = EnergyInput {
            approach: EnergyApproach::Real,
            has_generators: true,
            generators_fuel_liters: 50.0,
            ..EnergyInput::default()
        };
        assert!((emissions(1, &input, &factors) - 50.0 * fuel_factor).abs() < 1e-9);

        let estimated = EnergyInput {
            approach: EnergyApproach::Estimated,
            ..input
        };
        assert!((emissions(1, &estimated, &factors) - 50.0 * fuel_factor).abs() < 1e-9);
    }

    #[test]
    fn generators_flag_off_ignores_generator_fuel() {
        let factors = EmissionFactorTable::builtin();
        let input = EnergyInput {
            approach: EnergyApproach::Real,
            has_generators: false,
            generators_fuel_liters: 50.0,
            ..EnergyInput::default()
        };
        assert_eq!(emissions(1, &input, &factors), 0.0);
    }
}
