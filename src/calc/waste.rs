//! Waste emissions: flat per-kg factors by material, no conditionals.

use crate::event::WasteInput;
use crate::factors::EmissionFactorTable;

/// Computes waste emissions in kg CO2e.
pub fn emissions(input: &WasteInput, factors: &EmissionFactorTable) -> f64 {
    let w = &factors.waste;
    input.plastic_kg * w.plastic_kg
        + input.cardboard_kg * w.cardboard_kg
        + input.paper_kg * w.paper_kg
        + input.aluminum_kg * w.aluminum_kg
        + input.textile_kg * w.textile_kg
        + input.furniture_kg * w.furniture_kg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_materials_against_their_factors() {
        let mut factors = EmissionFactorTable::builtin();
        factors.waste.plastic_kg = 2.0;
        factors.waste.paper_kg = 1.0;
        let input = WasteInput {
            plastic_kg: 10.0,
            paper_kg: 5.0,
            ..WasteInput::default()
        };
        assert!((emissions(&input, &factors) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_is_zero() {
        let factors = EmissionFactorTable::builtin();
        assert_eq!(emissions(&WasteInput::default(), &factors), 0.0);
    }
}
