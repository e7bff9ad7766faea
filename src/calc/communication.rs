//! Communication emissions: printed material, streaming, and a
//! spend-based ratio for everything else.

use crate::event::CommunicationInput;
use crate::factors::EmissionFactorTable;

/// Computes communication emissions in kg CO2e.
///
/// Streaming only contributes when both hours and audience are
/// positive; the expense ratio always applies.
pub fn emissions(input: &CommunicationInput, factors: &EmissionFactorTable) -> f64 {
    let c = &factors.communication;
    let mut total = input.posters_count as f64 * c.poster
        + input.flyers_count as f64 * c.flyer
        + input.banners_count as f64 * c.banner;

    if input.streaming_hours > 0.0 && input.streaming_audience > 0 {
        let viewer_hours = input.streaming_hours * input.streaming_audience as f64;
        total += viewer_hours / 1000.0 * c.streaming_per_1000_viewer_hours;
    }

    total += input.communication_expenses * c.euro_ratio;
    total
}
