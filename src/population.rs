//! Population resolution: visitor/exhibitor counts by geographic origin.
//!
//! Each figure replicates one spreadsheet formula from the source workbook
//! as a named function, keeping every conditional branch traceable. The
//! failure policy throughout is degrade-to-zero: a missing subtype falls
//! back to the documented default share, malformed dates yield a zero
//! duration, and nothing here ever returns an error.

use chrono::NaiveDate;

use crate::event::{EventProfile, EventType};
use crate::factors::EmissionFactorTable;

/// Derived population counts by origin. Never persisted.
///
/// For visitors, `national` is computed as the residual
/// `total - foreign - local`, so `foreign + local + national == total`
/// holds by construction; inconsistent input percentages surface as a
/// negative national bucket rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPopulation {
    pub visitors_foreign: i64,
    pub visitors_local: i64,
    pub visitors_national: i64,
    pub exhibitors_foreign: i64,
    pub exhibitors_local: i64,
    pub exhibitors_national: i64,
    /// Visitor + exhibitor foreign counts.
    pub total_foreign: i64,
    /// Visitor + exhibitor local counts.
    pub total_local: i64,
    /// Visitor + exhibitor national-other counts.
    pub total_national: i64,
    /// Sum of the three exhibitor buckets.
    pub total_exhibitors: i64,
    /// Event duration in days (inclusive), 0 when dates are missing or
    /// malformed.
    pub duration_days: i64,
}

impl ResolvedPopulation {
    /// Total participant head count: visitors + exhibitors + organizers.
    pub fn total_participants(&self, event: &EventProfile) -> i64 {
        event.total_visitors + self.total_exhibitors + event.organizers_count
    }
}

/// Truncates toward zero, mirroring the source workbook's float-to-int
/// conversion. NaN maps to 0 (degrade-to-zero policy).
fn trunc(v: f64) -> i64 {
    v as i64
}

/// Event duration in days, inclusive of both end dates.
///
/// Either date missing yields 0; equal dates yield 1; malformed dates
/// yield 0 rather than an error. `/` separators are accepted.
pub fn duration_days(start_date: Option<&str>, end_date: Option<&str>) -> i64 {
    let (Some(start), Some(end)) = (start_date, end_date) else {
        return 0;
    };
    if start.is_empty() || end.is_empty() {
        return 0;
    }

    let parse = |s: &str| NaiveDate::parse_from_str(&s.replace('/', "-"), "%Y-%m-%d").ok();
    match (parse(start), parse(end)) {
        (Some(s), Some(e)) if s == e => 1,
        (Some(s), Some(e)) => (e - s).num_days() + 1,
        _ => 0,
    }
}

/// Foreign visitors: subtype-profile share for professional events with
/// an unknown foreign rate, given percentage otherwise.
fn visitors_foreign(event: &EventProfile, factors: &EmissionFactorTable) -> i64 {
    let total = event.total_visitors as f64;
    if event.event_type == EventType::Professional && event.unknown_foreign_rate {
        if let Some(subtype) = event.event_subtype.as_deref() {
            let share = factors.general.profile(subtype).visitors_foreign_share;
            return trunc(total * share);
        }
    }
    trunc(total * event.visitors_foreign_pct / 100.0)
}

/// Local-region visitors: subtype-profile share for professional events
/// with an unknown local rate; the given percentage applies to every
/// other combination, professional or not.
fn visitors_local(event: &EventProfile, factors: &EmissionFactorTable) -> i64 {
    let total = event.total_visitors as f64;
    if event.event_type == EventType::Professional && event.unknown_local_rate {
        if let Some(subtype) = event.event_subtype.as_deref() {
            let share = factors.general.profile(subtype).visitors_local_share;
            return trunc(total * share);
        }
    }
    trunc(total * event.visitors_local_pct / 100.0)
}

/// Organization foreign share as a fraction, resolving the unknown flag
/// through the subtype-profile table.
fn org_foreign_share(event: &EventProfile, factors: &EmissionFactorTable) -> f64 {
    if event.unknown_organizations_foreign_rate {
        if let Some(subtype) = event.event_subtype.as_deref() {
            return factors.general.profile(subtype).organizations_foreign_share;
        }
    }
    event.organizations_foreign_pct / 100.0
}

/// Organization local share as a fraction, resolving the unknown flag
/// through the subtype-profile table.
fn org_local_share(event: &EventProfile, factors: &EmissionFactorTable) -> f64 {
    if event.unknown_organizations_local_rate {
        if let Some(subtype) = event.event_subtype.as_deref() {
            return factors.general.profile(subtype).organizations_local_share;
        }
    }
    event.organizations_local_pct / 100.0
}

/// Foreign exhibitors/performers. Professional events convert
/// organization counts to person counts via the per-organization
/// headcount constant; cultural/sporting events use performer counts
/// directly; any other type yields 0.
fn exhibitors_foreign(event: &EventProfile, factors: &EmissionFactorTable) -> i64 {
    if event.event_type == EventType::Professional {
        let share = org_foreign_share(event, factors);
        let persons = factors.general.persons_per_exhibiting_org;
        trunc(event.exhibiting_organizations as f64 * share * persons)
    } else if event.event_type.counts_performers() {
        trunc(event.athletes_artists_count as f64 * event.athletes_artists_foreign_pct / 100.0)
    } else {
        0
    }
}

/// Local exhibitors/performers. Same shape as the foreign figure, with
/// the national-bucket headcount constant.
fn exhibitors_local(event: &EventProfile, factors: &EmissionFactorTable) -> i64 {
    if event.event_type == EventType::Professional {
        let share = org_local_share(event, factors);
        let persons = factors.general.persons_per_exhibiting_org_national;
        trunc(event.exhibiting_organizations as f64 * share * persons)
    } else if event.event_type.counts_performers() {
        trunc(event.athletes_artists_count as f64 * event.athletes_artists_local_pct / 100.0)
    } else {
        0
    }
}

/// National-other exhibitors/performers, from the residual percentage
/// `100% - foreign% - local%`. Unclamped: percentages summing above 100
/// propagate a negative count.
fn exhibitors_national(event: &EventProfile, factors: &EmissionFactorTable) -> i64 {
    if event.event_type == EventType::Professional {
        let national_share =
            1.0 - org_foreign_share(event, factors) - org_local_share(event, factors);
        let persons = factors.general.persons_per_exhibiting_org_national;
        trunc(event.exhibiting_organizations as f64 * national_share * persons)
    } else if event.event_type.counts_performers() {
        let national_pct =
            100.0 - event.athletes_artists_foreign_pct - event.athletes_artists_local_pct;
        trunc(event.athletes_artists_count as f64 * national_pct / 100.0)
    } else {
        0
    }
}

/// Resolves all population figures for one event.
pub fn resolve(event: &EventProfile, factors: &EmissionFactorTable) -> ResolvedPopulation {
    let visitors_foreign = visitors_foreign(event, factors);
    let visitors_local = visitors_local(event, factors);
    // Residual bucket; keeps foreign + local + national == total exactly.
    let visitors_national = event.total_visitors - visitors_foreign - visitors_local;

    let exhibitors_foreign = exhibitors_foreign(event, factors);
    let exhibitors_local = exhibitors_local(event, factors);
    let exhibitors_national = exhibitors_national(event, factors);

    ResolvedPopulation {
        visitors_foreign,
        visitors_local,
        visitors_national,
        exhibitors_foreign,
        exhibitors_local,
        exhibitors_national,
        total_foreign: visitors_foreign + exhibitors_foreign,
        total_local: visitors_local + exhibitors_local,
        total_national: visitors_national + exhibitors_national,
        total_exhibitors: exhibitors_foreign + exhibitors_local + exhibitors_national,
        duration_days: duration_days(event.start_date.as_deref(), event.end_date.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;

    fn professional_event() -> EventProfile {
        EventProfile {
            event_name: "Spring Expo".to_string(),
            event_type: EventType::Professional,
            event_subtype: Some("trade_fair".to_string()),
            total_visitors: 1000,
            exhibiting_organizations: 50,
            visitors_foreign_pct: 20.0,
            visitors_local_pct: 40.0,
            organizations_foreign_pct: 30.0,
            organizations_local_pct: 25.0,
            ..EventProfile::default()
        }
    }

    #[test]
    fn duration_same_day_is_one() {
        assert_eq!(duration_days(Some("2025-06-01"), Some("2025-06-01")), 1);
    }

    #[test]
    fn duration_missing_date_is_zero() {
        assert_eq!(duration_days(None, Some("2025-06-01")), 0);
        assert_eq!(duration_days(Some("2025-06-01"), None), 0);
        assert_eq!(duration_days(None, None), 0);
    }

    #[test]
    fn duration_is_inclusive_day_count() {
        assert_eq!(duration_days(Some("2025-06-01"), Some("2025-06-03")), 3);
    }

    #[test]
    fn duration_accepts_slash_separators() {
        assert_eq!(duration_days(Some("2025/06/01"), Some("2025/06/02")), 2);
    }

    #[test]
    fn duration_malformed_date_is_zero() {
        assert_eq!(duration_days(Some("not-a-date"), Some("2025-06-01")), 0);
        assert_eq!(duration_days(Some(""), Some("2025-06-01")), 0);
    }

    #[test]
    fn visitor_residual_invariant_holds() {
        let factors = EmissionFactorTable::builtin();
        let event = professional_event();
        let pop = resolve(&event, &factors);
        assert_eq!(
            pop.visitors_foreign + pop.visitors_local + pop.visitors_national,
            event.total_visitors
        );
    }

    #[test]
    fn given_percentages_are_truncated_toward_zero() {
        let factors = EmissionFactorTable::builtin();
        let event = EventProfile {
            total_visitors: 333,
            visitors_foreign_pct: 10.0, // 33.3 -> 33
            visitors_local_pct: 50.0,   // 166.5 -> 166
            ..EventProfile::default()
        };
        let pop = resolve(&event, &factors);
        assert_eq!(pop.visitors_foreign, 33);
        assert_eq!(pop.visitors_local, 166);
        assert_eq!(pop.visitors_national, 333 - 33 - 166);
    }

    #[test]
    fn unknown_flag_uses_subtype_profile() {
        let factors = EmissionFactorTable::builtin();
        let event = EventProfile {
            unknown_foreign_rate: true,
            visitors_foreign_pct: 99.0, // ignored when the flag is set
            ..professional_event()
        };
        let pop = resolve(&event, &factors);
        // trade_fair profile: 0.32 foreign
        assert_eq!(pop.visitors_foreign, 320);
    }

    #[test]
    fn unknown_flag_with_absent_subtype_falls_back_to_default_share() {
        let factors = EmissionFactorTable::builtin();
        let event = EventProfile {
            unknown_foreign_rate: true,
            event_subtype: Some("unlisted_subtype".to_string()),
            ..professional_event()
        };
        let pop = resolve(&event, &factors);
        // documented default foreign share: 0.5
        assert_eq!(pop.visitors_foreign, 500);
    }

    #[test]
    fn unknown_flag_without_subtype_uses_given_percentage() {
        let factors = EmissionFactorTable::builtin();
        let event = EventProfile {
            unknown_foreign_rate: true,
            event_subtype: None,
            ..professional_event()
        };
        let pop = resolve(&event, &factors);
        assert_eq!(pop.visitors_foreign, 200);
    }

    #[test]
    fn professional_exhibitors_apply_headcount_conversion() {
        let factors = EmissionFactorTable::builtin();
        let event = professional_event();
        let pop = resolve(&event, &factors);
        // 50 orgs * 0.30 foreign * 2.4 persons = 36
        assert_eq!(pop.exhibitors_foreign, 36);
        // 50 * 0.25 * 2.4 = 30
        assert_eq!(pop.exhibitors_local, 30);
        // 50 * 0.45 * 2.4 = 54
        assert_eq!(pop.exhibitors_national, 54);
        assert_eq!(pop.total_exhibitors, 120);
    }

    #[test]
    fn cultural_event_uses_performer_counts_directly() {
        let factors = EmissionFactorTable::builtin();
        let event = EventProfile {
            event_type: EventType::Cultural,
            athletes_artists_count: 200,
            athletes_artists_foreign_pct: 25.0,
            athletes_artists_local_pct: 50.0,
            // organization fields must be ignored for cultural events
            exhibiting_organizations: 999,
            ..EventProfile::default()
        };
        let pop = resolve(&event, &factors);
        assert_eq!(pop.exhibitors_foreign, 50);
        assert_eq!(pop.exhibitors_local, 100);
        assert_eq!(pop.exhibitors_national, 50);
        assert_eq!(pop.total_exhibitors, 200);
    }

    #[test]
    fn sporting_event_counts_performers_like_cultural() {
        let factors = EmissionFactorTable::builtin();
        let event = EventProfile {
            event_type: EventType::Sporting,
            athletes_artists_count: 80,
            athletes_artists_foreign_pct: 50.0,
            athletes_artists_local_pct: 25.0,
            ..EventProfile::default()
        };
        let pop = resolve(&event, &factors);
        assert_eq!(pop.exhibitors_foreign, 40);
        assert_eq!(pop.exhibitors_local, 20);
        assert_eq!(pop.exhibitors_national, 20);
    }

    #[test]
    fn other_event_type_has_no_exhibitors() {
        let factors = EmissionFactorTable::builtin();
        let event = EventProfile {
            event_type: EventType::Other,
            exhibiting_organizations: 40,
            athletes_artists_count: 40,
            ..EventProfile::default()
        };
        let pop = resolve(&event, &factors);
        assert_eq!(pop.total_exhibitors, 0);
    }

    #[test]
    fn oversubscribed_percentages_go_negative_unclamped() {
        let factors = EmissionFactorTable::builtin();
        let event = EventProfile {
            total_visitors: 100,
            visitors_foreign_pct: 70.0,
            visitors_local_pct: 50.0,
            ..EventProfile::default()
        };
        let pop = resolve(&event, &factors);
        assert_eq!(pop.visitors_national, -20);
        // the invariant still holds by construction
        assert_eq!(
            pop.visitors_foreign + pop.visitors_local + pop.visitors_national,
            100
        );
    }

    #[test]
    fn totals_sum_visitor_and_exhibitor_buckets() {
        let factors = EmissionFactorTable::builtin();
        let event = professional_event();
        let pop = resolve(&event, &factors);
        assert_eq!(pop.total_foreign, pop.visitors_foreign + pop.exhibitors_foreign);
        assert_eq!(pop.total_local, pop.visitors_local + pop.exhibitors_local);
        assert_eq!(
            pop.total_national,
            pop.visitors_national + pop.exhibitors_national
        );
    }

    #[test]
    fn total_participants_includes_organizers() {
        let factors = EmissionFactorTable::builtin();
        let event = EventProfile {
            organizers_count: 25,
            ..professional_event()
        };
        let pop = resolve(&event, &factors);
        assert_eq!(
            pop.total_participants(&event),
            event.total_visitors + pop.total_exhibitors + 25
        );
    }
}
