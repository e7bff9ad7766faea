//! Aggregation and classification of per-category emissions.

use std::fmt;

use serde::Serialize;

use crate::calc::{Category, CategoryEmissions};
use crate::event::EventProfile;
use crate::population::ResolvedPopulation;

/// Letter grade assigned from per-participant intensity (kg CO2e per
/// participant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmissionClass {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl EmissionClass {
    /// Classifies a per-participant intensity in kg CO2e.
    ///
    /// Band upper bounds are exclusive: an intensity exactly on a
    /// boundary falls into the next class up.
    pub fn from_intensity(kg_per_participant: f64) -> Self {
        if kg_per_participant < 30.0 {
            EmissionClass::A
        } else if kg_per_participant < 50.0 {
            EmissionClass::B
        } else if kg_per_participant < 100.0 {
            EmissionClass::C
        } else if kg_per_participant < 200.0 {
            EmissionClass::D
        } else if kg_per_participant < 400.0 {
            EmissionClass::E
        } else if kg_per_participant < 600.0 {
            EmissionClass::F
        } else {
            EmissionClass::G
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            EmissionClass::A => "A",
            EmissionClass::B => "B",
            EmissionClass::C => "C",
            EmissionClass::D => "D",
            EmissionClass::E => "E",
            EmissionClass::F => "F",
            EmissionClass::G => "G",
        }
    }
}

impl fmt::Display for EmissionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// One entry of the top-emitter ranking.
#[derive(Debug, Clone, Serialize)]
pub struct TopEmitter {
    pub category: Category,
    #[serde(rename = "emissions")]
    pub emissions_kg: f64,
}

/// Complete assessment for one event.
///
/// Serialized field names follow the wire contract of the service this
/// report feeds (`total_emissions_kg`, `emission_class`, ...); the
/// struct keeps shorter internal names.
#[derive(Debug, Clone, Serialize)]
pub struct EmissionReport {
    /// Store id of the assessed event, when it came from the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    pub event_name: String,
    /// Declared visitors plus resolved exhibitor and organizer headcount.
    pub total_participants: i64,
    pub duration_days: i64,
    #[serde(rename = "emissions_by_category")]
    pub categories: CategoryEmissions,
    /// Sum across all nine categories, kg CO2e.
    #[serde(rename = "total_emissions_kg")]
    pub total_kg: f64,
    /// kg CO2e per participant; 0 when there are no participants.
    #[serde(rename = "emissions_per_participant")]
    pub kg_per_participant: f64,
    #[serde(rename = "emission_class")]
    pub class: EmissionClass,
    /// Up to three largest categories, descending. Ties keep the fixed
    /// category order.
    #[serde(rename = "top_3_emitters")]
    pub top_emitters: Vec<TopEmitter>,
}

impl EmissionReport {
    /// Aggregates per-category figures into the final report.
    pub fn from_emissions(
        event: &EventProfile,
        population: &ResolvedPopulation,
        categories: CategoryEmissions,
    ) -> Self {
        let total_kg = categories.total();
        let total_participants = population.total_participants(event);
        let kg_per_participant = if total_participants > 0 {
            total_kg / total_participants as f64
        } else {
            0.0
        };

        let mut ranked: Vec<TopEmitter> = categories
            .iter()
            .map(|(category, emissions_kg)| TopEmitter {
                category,
                emissions_kg,
            })
            .collect();
        // Stable sort keeps insertion order among equal emitters.
        ranked.sort_by(|a, b| {
            b.emissions_kg
                .partial_cmp(&a.emissions_kg)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(3);

        Self {
            event_id: None,
            event_name: event.event_name.clone(),
            total_participants,
            duration_days: population.duration_days,
            categories,
            total_kg,
            kg_per_participant,
            class: EmissionClass::from_intensity(kg_per_participant),
            top_emitters: ranked,
        }
    }

    /// Tags the report with the store id it was assessed from.
    pub fn with_event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = Some(event_id.into());
        self
    }
}

impl fmt::Display for EmissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Emission Report: {} ---", self.event_name)?;
        writeln!(f, "Participants:        {}", self.total_participants)?;
        writeln!(f, "Duration:            {} days", self.duration_days)?;
        for (category, value) in self.categories.iter() {
            writeln!(f, "  {:<18} {:.2} kg CO2e", category.display_name(), value)?;
        }
        writeln!(f, "Total:               {:.2} kg CO2e", self.total_kg)?;
        writeln!(
            f,
            "Per participant:     {:.2} kg CO2e (class {})",
            self.kg_per_participant, self.class
        )?;
        write!(f, "Top emitters:        ")?;
        let mut first = true;
        for entry in &self.top_emitters {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{} ({:.1} kg)", entry.category, entry.emissions_kg)?;
            first = false;
        }
        Ok(())
    }
}
