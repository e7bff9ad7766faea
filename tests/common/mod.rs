//! Shared test fixtures for integration tests.

use eco_calc::event::{EnergyApproach, EnergyInput, EventProfile, EventType, TransportInput};

/// Installs the verbose test log subscriber; repeated calls are no-ops.
pub fn init_logging() {
    eco_calc::logging::init_test();
}

/// Professional three-day event with a trade-fair subtype and all
/// splits left unknown.
pub fn professional_event(total_visitors: i64) -> EventProfile {
    EventProfile {
        event_name: "Test Fair".into(),
        event_type: EventType::Professional,
        event_subtype: Some("trade_fair".into()),
        start_date: Some("2026-06-01".into()),
        end_date: Some("2026-06-03".into()),
        total_visitors,
        exhibiting_organizations: 50,
        organizers_count: 10,
        unknown_foreign_rate: true,
        unknown_local_rate: true,
        unknown_organizations_foreign_rate: true,
        unknown_organizations_local_rate: true,
        ..EventProfile::default()
    }
}

/// Cultural one-day event with explicit splits.
pub fn cultural_event(total_visitors: i64) -> EventProfile {
    EventProfile {
        event_name: "Test Festival".into(),
        event_type: EventType::Cultural,
        start_date: Some("2026-07-04".into()),
        end_date: Some("2026-07-04".into()),
        total_visitors,
        athletes_artists_count: 40,
        organizers_count: 8,
        visitors_foreign_pct: 10.0,
        visitors_local_pct: 50.0,
        athletes_artists_foreign_pct: 25.0,
        athletes_artists_local_pct: 25.0,
        ..EventProfile::default()
    }
}

/// Metered energy input with only gas consumption.
pub fn gas_only_energy(gas_kwh: f64) -> EnergyInput {
    EnergyInput {
        approach: EnergyApproach::Real,
        gas_kwh,
        ..EnergyInput::default()
    }
}

/// Transport input with foreign and national visitor legs.
pub fn visitor_transport(foreign_km: f64, national_km: f64) -> TransportInput {
    TransportInput {
        visitors_avg_distance_foreign_km: foreign_km,
        visitors_avg_distance_national_km: national_km,
        ..TransportInput::default()
    }
}
