//! Freight emissions: road haulage in tonne-kilometres.

use crate::event::FreightInput;
use crate::factors::EmissionFactorTable;

/// Computes freight emissions in kg CO2e.
///
/// Each leg contributes only when its weight is positive.
pub fn emissions(input: &FreightInput, factors: &EmissionFactorTable) -> f64 {
    let truck = factors.freight.truck_tkm;
    let mut total = 0.0;
    for (weight_kg, distance_km) in [
        (input.decor_weight_kg, input.decor_distance_km),
        (input.equipment_weight_kg, input.equipment_distance_km),
        (input.food_weight_kg, input.food_distance_km),
    ] {
        if weight_kg > 0.0 {
            total += weight_kg / 1000.0 * distance_km * truck;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tonne_kilometres_per_leg() {
        let mut factors = EmissionFactorTable::builtin();
        factors.freight.truck_tkm = 0.1;
        let input = FreightInput {
            decor_weight_kg: 2000.0,
            decor_distance_km: 100.0,
            equipment_weight_kg: 500.0,
            equipment_distance_km: 40.0,
            ..FreightInput::default()
        };
        // 2 t * 100 km * 0.1 + 0.5 t * 40 km * 0.1
        assert!((emissions(&input, &factors) - 22.0).abs() < 1e-9);
    }

    #[test]
    fn zero_weight_leg_ignores_distance() {
        let factors = EmissionFactorTable::builtin();
        let input = FreightInput {
            food_distance_km: 500.0,
            ..FreightInput::default()
        };
        assert_eq!(emissions(&input, &factors), 0.0);
    }
}
