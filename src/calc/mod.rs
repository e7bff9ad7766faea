//! Per-category emission calculators.
//!
//! Nine independent pure functions, one per module. None of them reads
//! shared state or depends on another; each maps one category's raw
//! inputs, the resolved population, and the factor table to a single
//! kg CO2e figure. A missing input record is handled here by the
//! dispatcher, which scores the category as 0.

pub mod accommodation;
pub mod amenities;
pub mod catering;
pub mod communication;
pub mod energy;
pub mod freight;
pub mod purchases;
pub mod transport;
pub mod waste;

use std::fmt;

use serde::Serialize;

use crate::event::{CategoryInputs, EventProfile};
use crate::factors::EmissionFactorTable;
use crate::population::ResolvedPopulation;

/// The nine emission categories, in the fixed insertion order used for
/// reporting and top-emitter tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Energy,
    Transport,
    Catering,
    Accommodation,
    Waste,
    Communication,
    Freight,
    Amenities,
    Purchases,
}

impl Category {
    /// All categories in insertion order.
    pub const ALL: [Category; 9] = [
        Category::Energy,
        Category::Transport,
        Category::Catering,
        Category::Accommodation,
        Category::Waste,
        Category::Communication,
        Category::Freight,
        Category::Amenities,
        Category::Purchases,
    ];

    /// Stable snake_case label, matching the serialized report keys.
    pub fn label(self) -> &'static str {
        match self {
            Category::Energy => "energy",
            Category::Transport => "transport",
            Category::Catering => "catering",
            Category::Accommodation => "accommodation",
            Category::Waste => "waste",
            Category::Communication => "communication",
            Category::Freight => "freight",
            Category::Amenities => "amenities",
            Category::Purchases => "purchases",
        }
    }

    /// Human-readable name for report output.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Energy => "Energy",
            Category::Transport => "Transport",
            Category::Catering => "Catering",
            Category::Accommodation => "Accommodation",
            Category::Waste => "Waste",
            Category::Communication => "Communication",
            Category::Freight => "Freight",
            Category::Amenities => "Amenities",
            Category::Purchases => "Purchases",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Per-category emissions in kg CO2e. All nine categories are always
/// present; a category without an input record scores 0.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryEmissions {
    pub energy: f64,
    pub transport: f64,
    pub catering: f64,
    pub accommodation: f64,
    pub waste: f64,
    pub communication: f64,
    pub freight: f64,
    pub amenities: f64,
    pub purchases: f64,
}

impl CategoryEmissions {
    /// Runs all nine calculators over whichever input records are present.
    pub fn compute(
        event: &EventProfile,
        population: &ResolvedPopulation,
        inputs: &CategoryInputs,
        factors: &EmissionFactorTable,
    ) -> Self {
        Self {
            energy: inputs
                .energy
                .as_ref()
                .map_or(0.0, |i| energy::emissions(population.duration_days, i, factors)),
            transport: inputs
                .transport
                .as_ref()
                .map_or(0.0, |i| transport::emissions(event, population, i, factors)),
            catering: inputs
                .catering
                .as_ref()
                .map_or(0.0, |i| catering::emissions(i, factors)),
            accommodation: inputs
                .accommodation
                .as_ref()
                .map_or(0.0, |i| accommodation::emissions(population, i, factors)),
            waste: inputs
                .waste
                .as_ref()
                .map_or(0.0, |i| waste::emissions(i, factors)),
            communication: inputs
                .communication
                .as_ref()
                .map_or(0.0, |i| communication::emissions(i, factors)),
            freight: inputs
                .freight
                .as_ref()
                .map_or(0.0, |i| freight::emissions(i, factors)),
            amenities: inputs
                .amenities
                .as_ref()
                .map_or(0.0, |i| amenities::emissions(i, factors)),
            purchases: inputs
                .purchases
                .as_ref()
                .map_or(0.0, |i| purchases::emissions(event, population, i, factors)),
        }
    }

    /// Emissions for one category.
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Energy => self.energy,
            Category::Transport => self.transport,
            Category::Catering => self.catering,
            Category::Accommodation => self.accommodation,
            Category::Waste => self.waste,
            Category::Communication => self.communication,
            Category::Freight => self.freight,
            Category::Amenities => self.amenities,
            Category::Purchases => self.purchases,
        }
    }

    /// Iterates all nine categories in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Sum across all nine categories.
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }
}
