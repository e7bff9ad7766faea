//! Passenger transport emissions for visitors, exhibitors, and
//! organizers, plus local ground transport.

use crate::event::{EventProfile, TransportInput};
use crate::factors::{EmissionFactorTable, TransportFactors};
use crate::population::ResolvedPopulation;

/// Car share of the national car/train modal blend.
const CAR_SHARE: f64 = 0.7;
/// Train share of the national car/train modal blend.
const TRAIN_SHARE: f64 = 0.3;

/// Long-haul flight threshold (km, one-way).
const LONG_HAUL_KM: f64 = 3000.0;
/// Medium-haul flight threshold (km, one-way).
const MEDIUM_HAUL_KM: f64 = 1000.0;

/// Air transport factor selected by one-way distance.
fn air_factor(distance_km: f64, t: &TransportFactors) -> f64 {
    if distance_km > LONG_HAUL_KM {
        t.plane_long_haul_km
    } else if distance_km > MEDIUM_HAUL_KM {
        t.plane_medium_haul_km
    } else {
        t.plane_short_haul_km
    }
}

/// Blended per-km factor for national legs (70% car, 30% train).
fn national_blend(t: &TransportFactors) -> f64 {
    t.car_km * CAR_SHARE + t.train_km * TRAIN_SHARE
}

/// Computes transport emissions in kg CO2e.
///
/// Foreign legs fly, with the factor picked by distance band; national
/// legs use the car/train blend. Both are doubled for the round trip.
/// Organizer travel is car at the stated number of round trips, not
/// doubled again. Local-transport spend converts through a flat currency
/// ratio and is added unconditionally.
pub fn emissions(
    event: &EventProfile,
    population: &ResolvedPopulation,
    input: &TransportInput,
    factors: &EmissionFactorTable,
) -> f64 {
    let t = &factors.transport;
    let mut total = 0.0;

    let d = input.visitors_avg_distance_foreign_km;
    if d > 0.0 {
        total += population.visitors_foreign as f64 * d * 2.0 * air_factor(d, t);
    }

    let d = input.visitors_avg_distance_national_km;
    if d > 0.0 {
        total += population.visitors_national as f64 * d * 2.0 * national_blend(t);
    }

    let d = input.exhibitors_avg_distance_foreign_km;
    if d > 0.0 {
        total += population.exhibitors_foreign as f64 * d * 2.0 * air_factor(d, t);
    }

    let d = input.exhibitors_avg_distance_national_km;
    if d > 0.0 {
        total += population.exhibitors_national as f64 * d * 2.0 * national_blend(t);
    }

    if input.organizers_avg_distance_km > 0.0 && event.organizers_count > 0 {
        total += event.organizers_count as f64
            * input.organizers_avg_distance_km
            * input.organizers_round_trips as f64
            * t.car_km;
    }

    total += input.visitors_local_transport_expenses * t.local_transport_euro_ratio;
    total += input.exhibitors_local_transport_expenses * t.local_transport_euro_ratio;

    total
}
