//! Assessment pipeline: resolve population, run calculators, aggregate.

use tracing::debug;

use crate::calc::CategoryEmissions;
use crate::event::{CategoryInputs, EventProfile};
use crate::factors::EmissionFactorTable;
use crate::population;
use crate::report::EmissionReport;

/// Stateless assessment engine bound to one factor table.
#[derive(Debug, Clone)]
pub struct Engine {
    factors: EmissionFactorTable,
}

impl Engine {
    pub fn new(factors: EmissionFactorTable) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &EmissionFactorTable {
        &self.factors
    }

    /// Runs the full assessment for one event.
    pub fn assess(&self, event: &EventProfile, inputs: &CategoryInputs) -> EmissionReport {
        let resolved = population::resolve(event, &self.factors);
        debug!(
            event = %event.event_name,
            duration_days = resolved.duration_days,
            total_exhibitors = resolved.total_exhibitors,
            "population resolved"
        );
        let categories = CategoryEmissions::compute(event, &resolved, inputs, &self.factors);
        let report = EmissionReport::from_emissions(event, &resolved, categories);
        debug!(
            total_kg = report.total_kg,
            class = %report.class,
            "assessment complete"
        );
        report
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EmissionFactorTable::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EnergyApproach, EnergyInput};

    #[test]
    fn assess_wires_population_through_calculators() {
        let mut factors = EmissionFactorTable::builtin();
        factors.energy.gas_kwh = 0.2;
        let engine = Engine::new(factors);
        let event = EventProfile {
            event_name: "expo".into(),
            total_visitors: 100,
            ..EventProfile::default()
        };
        let inputs = CategoryInputs {
            energy: Some(EnergyInput {
                approach: EnergyApproach::Real,
                gas_kwh: 1000.0,
                ..EnergyInput::default()
            }),
            ..CategoryInputs::default()
        };
        let report = engine.assess(&event, &inputs);
        assert!((report.categories.energy - 200.0).abs() < 1e-9);
        assert!((report.total_kg - 200.0).abs() < 1e-9);
        assert!((report.kg_per_participant - 2.0).abs() < 1e-9);
    }

    #[test]
    fn default_engine_uses_builtin_factors() {
        let engine = Engine::default();
        assert!(engine.factors().validate().is_empty());
    }
}
