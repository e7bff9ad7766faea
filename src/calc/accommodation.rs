//! Accommodation emissions for foreign and national-other visitors.

use crate::event::AccommodationInput;
use crate::factors::{AccommodationFactors, EmissionFactorTable};
use crate::population::ResolvedPopulation;

/// One population's contribution: person-nights weighted across the paid
/// lodging categories. A zero percentage never touches its factor.
/// Staying with family or friends has no emission factor and is excluded
/// from the sum by design.
fn population_emissions(
    count: i64,
    avg_nights: f64,
    hotel_5_star_pct: f64,
    hotel_3_star_pct: f64,
    hotel_1_star_pct: f64,
    other_paid_pct: f64,
    a: &AccommodationFactors,
) -> f64 {
    if count <= 0 || avg_nights <= 0.0 {
        return 0.0;
    }
    let person_nights = count as f64 * avg_nights;
    let mut total = 0.0;
    if hotel_5_star_pct > 0.0 {
        total += person_nights * (hotel_5_star_pct / 100.0) * a.hotel_5_star;
    }
    if hotel_3_star_pct > 0.0 {
        total += person_nights * (hotel_3_star_pct / 100.0) * a.hotel_3_star;
    }
    if hotel_1_star_pct > 0.0 {
        total += person_nights * (hotel_1_star_pct / 100.0) * a.hotel_1_star;
    }
    if other_paid_pct > 0.0 {
        total += person_nights * (other_paid_pct / 100.0) * a.other_paid;
    }
    total
}

/// Computes accommodation emissions in kg CO2e, independently for the
/// foreign and national-other visitor populations.
pub fn emissions(
    population: &ResolvedPopulation,
    input: &AccommodationInput,
    factors: &EmissionFactorTable,
) -> f64 {
    let a = &factors.accommodation;
    population_emissions(
        population.visitors_foreign,
        input.foreign_avg_nights,
        input.foreign_hotel_5_star_pct,
        input.foreign_hotel_3_star_pct,
        input.foreign_hotel_1_star_pct,
        input.foreign_other_paid_pct,
        a,
    ) + population_emissions(
        population.visitors_national,
        input.national_avg_nights,
        input.national_hotel_5_star_pct,
        input.national_hotel_3_star_pct,
        input.national_hotel_1_star_pct,
        input.national_other_paid_pct,
        a,
    )
}
