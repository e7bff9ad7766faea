//! TOML-based event scenario definitions and preset events.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::event::{
    AccommodationInput, AmenitiesInput, CateringInput, CategoryInputs, CommunicationInput,
    EnergyApproach, EnergyInput, EventProfile, EventType, FreightInput, PurchasesInput,
    TransportInput, WasteInput,
};
use crate::factors::ConfigError;

/// A complete scenario: the event profile plus whichever category
/// input sections the file declares. Missing sections leave their
/// category unassessed.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub event: EventProfile,
    pub energy: Option<EnergyInput>,
    pub transport: Option<TransportInput>,
    pub catering: Option<CateringInput>,
    pub accommodation: Option<AccommodationInput>,
    pub waste: Option<WasteInput>,
    pub communication: Option<CommunicationInput>,
    pub freight: Option<FreightInput>,
    pub amenities: Option<AmenitiesInput>,
    pub purchases: Option<PurchasesInput>,
}

impl Scenario {
    /// Returns the trade-show preset: a three-day professional fair
    /// with metered energy and substantial freight.
    pub fn trade_show() -> Self {
        Self {
            event: EventProfile {
                event_name: "Trade Show".into(),
                event_type: EventType::Professional,
                event_subtype: Some("trade_fair".into()),
                start_date: Some("2026-03-10".into()),
                end_date: Some("2026-03-12".into()),
                total_visitors: 12_000,
                exhibiting_organizations: 300,
                organizers_count: 40,
                unknown_foreign_rate: true,
                unknown_local_rate: true,
                unknown_organizations_foreign_rate: true,
                unknown_organizations_local_rate: true,
                ..EventProfile::default()
            },
            energy: Some(EnergyInput {
                approach: EnergyApproach::Real,
                gas_kwh: 8_000.0,
                electricity_kwh: 45_000.0,
                ..EnergyInput::default()
            }),
            transport: Some(TransportInput {
                visitors_avg_distance_foreign_km: 1_400.0,
                visitors_avg_distance_national_km: 250.0,
                exhibitors_avg_distance_foreign_km: 1_600.0,
                exhibitors_avg_distance_national_km: 300.0,
                organizers_avg_distance_km: 25.0,
                organizers_round_trips: 3,
                ..TransportInput::default()
            }),
            catering: Some(CateringInput {
                lunches_count: 9_000,
                snacks_count: 15_000,
                coffee_units: 20_000,
                ..CateringInput::default()
            }),
            accommodation: Some(AccommodationInput {
                foreign_hotel_3_star_pct: 70.0,
                foreign_other_paid_pct: 20.0,
                foreign_family_pct: 10.0,
                foreign_avg_nights: 2.0,
                national_hotel_3_star_pct: 40.0,
                national_family_pct: 30.0,
                national_avg_nights: 1.0,
                ..AccommodationInput::default()
            }),
            waste: Some(WasteInput {
                plastic_kg: 900.0,
                cardboard_kg: 2_400.0,
                paper_kg: 600.0,
                ..WasteInput::default()
            }),
            communication: Some(CommunicationInput {
                posters_count: 120,
                flyers_count: 30_000,
                banners_count: 18,
                communication_expenses: 25_000.0,
                ..CommunicationInput::default()
            }),
            freight: Some(FreightInput {
                decor_weight_kg: 18_000.0,
                decor_distance_km: 350.0,
                equipment_weight_kg: 40_000.0,
                equipment_distance_km: 420.0,
                food_weight_kg: 3_000.0,
                food_distance_km: 120.0,
            }),
            amenities: Some(AmenitiesInput {
                site_rental_expenses: 180_000.0,
                reception_expenses: 20_000.0,
                construction_expenses: 60_000.0,
                it_expenses: 15_000.0,
            }),
            purchases: Some(PurchasesInput {
                goodies_expenses_per_person: 1.5,
                badges_visitors: 12_000,
                badges_exhibitors: 720,
                badges_organizers: 40,
                ..PurchasesInput::default()
            }),
        }
    }

    /// Returns the festival preset: a two-day cultural event with
    /// estimated energy and streamed performances.
    pub fn festival() -> Self {
        Self {
            event: EventProfile {
                event_name: "Festival".into(),
                event_type: EventType::Cultural,
                start_date: Some("2026-07-18".into()),
                end_date: Some("2026-07-19".into()),
                total_visitors: 25_000,
                athletes_artists_count: 150,
                organizers_count: 80,
                visitors_foreign_pct: 5.0,
                visitors_local_pct: 60.0,
                athletes_artists_foreign_pct: 20.0,
                athletes_artists_local_pct: 30.0,
                ..EventProfile::default()
            },
            energy: Some(EnergyInput {
                approach: EnergyApproach::Estimated,
                building_type: Some("sports_facilities".into()),
                surface_m2: Some(20_000.0),
                has_generators: true,
                generators_fuel_liters: 1_200.0,
                ..EnergyInput::default()
            }),
            transport: Some(TransportInput {
                visitors_avg_distance_foreign_km: 900.0,
                visitors_avg_distance_national_km: 180.0,
                visitors_local_transport_expenses: 40_000.0,
                exhibitors_avg_distance_foreign_km: 1_200.0,
                exhibitors_avg_distance_national_km: 400.0,
                organizers_avg_distance_km: 15.0,
                organizers_round_trips: 2,
                ..TransportInput::default()
            }),
            catering: Some(CateringInput {
                lunches_count: 18_000,
                dinners_count: 22_000,
                snacks_count: 30_000,
                meals_meat_heavy_pct: 40.0,
                meals_balanced_pct: 35.0,
                meals_vegetarian_pct: 25.0,
                soft_drinks_units: 40_000,
                alcohol_units: 28_000,
                ..CateringInput::default()
            }),
            waste: Some(WasteInput {
                plastic_kg: 3_500.0,
                cardboard_kg: 1_200.0,
                aluminum_kg: 400.0,
                ..WasteInput::default()
            }),
            communication: Some(CommunicationInput {
                posters_count: 400,
                banners_count: 60,
                streaming_hours: 16.0,
                streaming_audience: 50_000,
                communication_expenses: 45_000.0,
                ..CommunicationInput::default()
            }),
            amenities: Some(AmenitiesInput {
                site_rental_expenses: 90_000.0,
                reception_expenses: 12_000.0,
                construction_expenses: 150_000.0,
                it_expenses: 8_000.0,
            }),
            ..Scenario::default()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["trade_show", "festival"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "trade_show" => Ok(Self::trade_show()),
            "festival" => Ok(Self::festival()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Splits the scenario into the engine's two arguments.
    pub fn into_parts(self) -> (EventProfile, CategoryInputs) {
        let event = self.event;
        let inputs = CategoryInputs {
            energy: self.energy,
            transport: self.transport,
            catering: self.catering,
            accommodation: self.accommodation,
            waste: self.waste,
            communication: self.communication,
            freight: self.freight,
            amenities: self.amenities,
            purchases: self.purchases,
        };
        (event, inputs)
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the scenario is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let e = &self.event;

        for (field, value) in [
            ("event.total_visitors", e.total_visitors),
            (
                "event.exhibiting_organizations",
                e.exhibiting_organizations,
            ),
            ("event.athletes_artists_count", e.athletes_artists_count),
            ("event.organizers_count", e.organizers_count),
        ] {
            if value < 0 {
                errors.push(ConfigError {
                    field: field.into(),
                    message: "must be >= 0".into(),
                });
            }
        }

        for (field, value) in [
            ("event.visitors_foreign_pct", e.visitors_foreign_pct),
            ("event.visitors_local_pct", e.visitors_local_pct),
            (
                "event.organizations_foreign_pct",
                e.organizations_foreign_pct,
            ),
            ("event.organizations_local_pct", e.organizations_local_pct),
            (
                "event.athletes_artists_foreign_pct",
                e.athletes_artists_foreign_pct,
            ),
            (
                "event.athletes_artists_local_pct",
                e.athletes_artists_local_pct,
            ),
        ] {
            if !(0.0..=100.0).contains(&value) {
                errors.push(ConfigError {
                    field: field.into(),
                    message: "must be in [0.0, 100.0]".into(),
                });
            }
        }

        if let Some(catering) = &self.catering {
            let diet = catering.meals_meat_heavy_pct
                + catering.meals_balanced_pct
                + catering.meals_vegetarian_pct;
            if catering.lunches_count + catering.dinners_count > 0 && (diet - 100.0).abs() > 0.5 {
                errors.push(ConfigError {
                    field: "catering.meals_meat_heavy_pct".into(),
                    message: format!("diet split must sum to 100, got {diet}"),
                });
            }
        }

        errors
    }
}
