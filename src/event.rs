//! Event profile and per-category activity input records.
//!
//! One [`EventProfile`] describes the event itself; zero or one of each
//! category input record carries the raw activity data for that category.
//! Absence of a record means the category contributes nothing.

use serde::{Deserialize, Serialize};

/// Event type. Only professional events use the subtype-profile lookup
/// table and the per-organization headcount conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Professional,
    Cultural,
    Sporting,
    /// Any other free-form event type; splits are applied as given.
    #[default]
    #[serde(other)]
    Other,
}

impl EventType {
    /// Whether this type counts performers (athletes/artists) rather than
    /// exhibiting organizations.
    pub fn counts_performers(self) -> bool {
        matches!(self, EventType::Cultural | EventType::Sporting)
    }
}

/// Immutable description of one event: identity, dates, raw head counts,
/// and percentage splits.
///
/// Percentages are on the 0-100 scale. Each split carries an "unknown"
/// flag; when set (and a subtype is given, for professional events), the
/// resolver substitutes the subtype-profile share for the given value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EventProfile {
    /// Display name, carried through to the report.
    pub event_name: String,
    pub event_type: EventType,
    /// Subtype key into the subtype-profile table (professional only).
    pub event_subtype: Option<String>,
    /// ISO-8601 date; `/` separators are accepted.
    pub start_date: Option<String>,
    /// ISO-8601 date; `/` separators are accepted.
    pub end_date: Option<String>,
    pub total_visitors: i64,
    /// Exhibiting organizations (professional events).
    pub exhibiting_organizations: i64,
    /// Athletes or artists (cultural/sporting events).
    pub athletes_artists_count: i64,
    pub organizers_count: i64,

    pub visitors_foreign_pct: f64,
    pub unknown_foreign_rate: bool,
    pub visitors_local_pct: f64,
    pub unknown_local_rate: bool,

    pub organizations_foreign_pct: f64,
    pub unknown_organizations_foreign_rate: bool,
    pub organizations_local_pct: f64,
    pub unknown_organizations_local_rate: bool,

    pub athletes_artists_foreign_pct: f64,
    pub athletes_artists_local_pct: f64,
}

impl Default for EventProfile {
    fn default() -> Self {
        Self {
            event_name: String::new(),
            event_type: EventType::Other,
            event_subtype: None,
            start_date: None,
            end_date: None,
            total_visitors: 0,
            exhibiting_organizations: 0,
            athletes_artists_count: 0,
            organizers_count: 0,
            visitors_foreign_pct: 0.0,
            unknown_foreign_rate: false,
            visitors_local_pct: 0.0,
            unknown_local_rate: false,
            organizations_foreign_pct: 0.0,
            unknown_organizations_foreign_rate: false,
            organizations_local_pct: 0.0,
            unknown_organizations_local_rate: false,
            athletes_artists_foreign_pct: 0.0,
            athletes_artists_local_pct: 0.0,
        }
    }
}

/// Energy accounting approach: metered consumption or per-surface
/// estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyApproach {
    #[default]
    Real,
    Estimated,
}

/// Raw energy inputs for one event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnergyInput {
    pub approach: EnergyApproach,
    // Metered consumption (real approach)
    pub gas_kwh: f64,
    pub fuel_liters: f64,
    pub electricity_kwh: f64,
    pub coal_kg: f64,
    // Surface estimation (estimated approach)
    pub building_type: Option<String>,
    pub surface_m2: Option<f64>,
    // Generators, added on top of either approach
    pub has_generators: bool,
    pub generators_fuel_liters: f64,
}

/// Raw transport inputs for one event. Distances are one-way averages;
/// the calculator doubles them for round trips.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransportInput {
    pub visitors_avg_distance_foreign_km: f64,
    pub visitors_avg_distance_national_km: f64,
    pub visitors_local_transport_expenses: f64,
    pub exhibitors_avg_distance_foreign_km: f64,
    pub exhibitors_avg_distance_national_km: f64,
    pub exhibitors_local_transport_expenses: f64,
    pub organizers_avg_distance_km: f64,
    pub organizers_round_trips: i64,
}

/// Tableware choice for served meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tableware {
    #[default]
    Disposable,
    Reusable,
}

/// Raw catering inputs for one event. The three diet percentages
/// nominally sum to 100; this is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CateringInput {
    pub breakfasts_count: i64,
    pub lunches_count: i64,
    pub dinners_count: i64,
    pub snacks_count: i64,
    pub meals_meat_heavy_pct: f64,
    pub meals_balanced_pct: f64,
    pub meals_vegetarian_pct: f64,
    pub tableware: Tableware,
    pub water_liters: f64,
    pub coffee_units: i64,
    pub soft_drinks_units: i64,
    pub alcohol_units: i64,
}

impl Default for CateringInput {
    fn default() -> Self {
        Self {
            breakfasts_count: 0,
            lunches_count: 0,
            dinners_count: 0,
            snacks_count: 0,
            meals_meat_heavy_pct: 50.0,
            meals_balanced_pct: 30.0,
            meals_vegetarian_pct: 20.0,
            tableware: Tableware::Disposable,
            water_liters: 0.0,
            coffee_units: 0,
            soft_drinks_units: 0,
            alcohol_units: 0,
        }
    }
}

/// Raw accommodation inputs: lodging-category percentages and average
/// nights, separately for foreign and national-other visitors.
///
/// The family percentages are accepted for completeness but carry no
/// emission factor and never contribute to the total.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccommodationInput {
    pub foreign_hotel_5_star_pct: f64,
    pub foreign_hotel_3_star_pct: f64,
    pub foreign_hotel_1_star_pct: f64,
    pub foreign_other_paid_pct: f64,
    pub foreign_family_pct: f64,
    pub foreign_avg_nights: f64,

    pub national_hotel_5_star_pct: f64,
    pub national_hotel_3_star_pct: f64,
    pub national_hotel_1_star_pct: f64,
    pub national_other_paid_pct: f64,
    pub national_family_pct: f64,
    pub national_avg_nights: f64,
}

/// Raw waste inputs (kg by material).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WasteInput {
    pub plastic_kg: f64,
    pub cardboard_kg: f64,
    pub paper_kg: f64,
    pub aluminum_kg: f64,
    pub textile_kg: f64,
    pub furniture_kg: f64,
}

/// Raw communication inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommunicationInput {
    pub posters_count: i64,
    pub flyers_count: i64,
    pub banners_count: i64,
    pub streaming_hours: f64,
    pub streaming_audience: i64,
    pub communication_expenses: f64,
}

/// Raw freight inputs: three legs, all assumed trucked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FreightInput {
    pub decor_weight_kg: f64,
    pub decor_distance_km: f64,
    pub equipment_weight_kg: f64,
    pub equipment_distance_km: f64,
    pub food_weight_kg: f64,
    pub food_distance_km: f64,
}

/// Raw amenity spend inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AmenitiesInput {
    pub site_rental_expenses: f64,
    pub reception_expenses: f64,
    pub construction_expenses: f64,
    pub it_expenses: f64,
}

/// Badge material, mapped to the badge factor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeMaterial {
    #[default]
    PlasticSoft,
    PlasticHard,
    Textile,
    Paper,
}

impl BadgeMaterial {
    /// Key into the badge factor table.
    pub fn key(self) -> &'static str {
        match self {
            BadgeMaterial::PlasticSoft => "plastic_soft",
            BadgeMaterial::PlasticHard => "plastic_hard",
            BadgeMaterial::Textile => "textile",
            BadgeMaterial::Paper => "paper",
        }
    }
}

/// Raw purchases inputs: goodies spend and badge counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PurchasesInput {
    pub goodies_expenses_per_person: f64,
    pub badges_visitors: i64,
    pub badges_exhibitors: i64,
    pub badges_organizers: i64,
    pub badge_material: BadgeMaterial,
}

/// Zero-or-one input record per category for one event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CategoryInputs {
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
