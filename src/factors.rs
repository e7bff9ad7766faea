//! Emission-factor reference data: built-in defaults, TOML overrides, and
//! validation.
//!
//! The table is loaded once at startup and passed by reference into every
//! calculator — never held as global state. All coefficients convert a
//! physical or monetary quantity into kg CO2-equivalent.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Fallback foreign share when an event subtype is absent from the
/// subtype-profile table.
pub const DEFAULT_FOREIGN_SHARE: f64 = 0.5;
/// Fallback local-region share when an event subtype is absent from the
/// subtype-profile table.
pub const DEFAULT_LOCAL_SHARE: f64 = 0.12;

/// Complete emission-factor table, grouped by domain area.
///
/// All fields have built-in defaults; load overrides from TOML with
/// [`EmissionFactorTable::from_toml_file`] or use
/// [`EmissionFactorTable::builtin`] for the shipped values.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmissionFactorTable {
    /// Population-split constants and per-subtype profiles.
    pub general: GeneralFactors,
    /// Energy consumption factors.
    pub energy: EnergyFactors,
    /// Passenger transport factors.
    pub transport: TransportFactors,
    /// Meal and beverage factors.
    pub catering: CateringFactors,
    /// Per-night lodging factors.
    pub accommodation: AccommodationFactors,
    /// Per-kg waste factors.
    pub waste: WasteFactors,
    /// Print, streaming, and spend-based communication factors.
    pub communication: CommunicationFactors,
    /// Goods transport factors.
    pub freight: FreightFactors,
    /// Spend-based amenity factors.
    pub amenities: AmenitiesFactors,
    /// Goodies and badge factors.
    pub purchases: PurchaseFactors,
}

impl Default for EmissionFactorTable {
    fn default() -> Self {
        Self {
            general: GeneralFactors::default(),
            energy: EnergyFactors::default(),
            transport: TransportFactors::default(),
            catering: CateringFactors::default(),
            accommodation: AccommodationFactors::default(),
            waste: WasteFactors::default(),
            communication: CommunicationFactors::default(),
            freight: FreightFactors::default(),
            amenities: AmenitiesFactors::default(),
            purchases: PurchaseFactors::default(),
        }
    }
}

/// Default percentage splits for one professional-event subtype.
///
/// Used when the organizer flags a split as unknown; shares are fractions
/// in `[0, 1]`, not percentages.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubtypeProfile {
    /// Share of visitors coming from abroad.
    pub visitors_foreign_share: f64,
    /// Share of visitors from the host region.
    pub visitors_local_share: f64,
    /// Share of exhibiting organizations based abroad.
    pub organizations_foreign_share: f64,
    /// Share of exhibiting organizations based in the host region.
    pub organizations_local_share: f64,
}

impl Default for SubtypeProfile {
    fn default() -> Self {
        Self {
            visitors_foreign_share: DEFAULT_FOREIGN_SHARE,
            visitors_local_share: DEFAULT_LOCAL_SHARE,
            organizations_foreign_share: DEFAULT_FOREIGN_SHARE,
            organizations_local_share: DEFAULT_LOCAL_SHARE,
        }
    }
}

/// Population-split constants and the per-subtype profile table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralFactors {
    /// Persons per exhibiting organization, foreign bucket.
    pub persons_per_exhibiting_org: f64,
    /// Persons per exhibiting organization, national and local buckets.
    pub persons_per_exhibiting_org_national: f64,
    /// Default splits keyed by professional-event subtype.
    pub subtype_profiles: BTreeMap<String, SubtypeProfile>,
}

impl Default for GeneralFactors {
    fn default() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(
            "trade_fair".to_string(),
            SubtypeProfile {
                visitors_foreign_share: 0.32,
                visitors_local_share: 0.35,
                organizations_foreign_share: 0.41,
                organizations_local_share: 0.22,
            },
        );
        profiles.insert(
            "congress".to_string(),
            SubtypeProfile {
                visitors_foreign_share: 0.47,
                visitors_local_share: 0.18,
                organizations_foreign_share: 0.52,
                organizations_local_share: 0.15,
            },
        );
        profiles.insert(
            "consumer_fair".to_string(),
            SubtypeProfile {
                visitors_foreign_share: 0.06,
                visitors_local_share: 0.68,
                organizations_foreign_share: 0.12,
                organizations_local_share: 0.44,
            },
        );
        profiles.insert(
            "corporate_seminar".to_string(),
            SubtypeProfile {
                visitors_foreign_share: 0.21,
                visitors_local_share: 0.40,
                organizations_foreign_share: 0.25,
                organizations_local_share: 0.33,
            },
        );
        Self {
            persons_per_exhibiting_org: 2.4,
            persons_per_exhibiting_org_national: 2.4,
            subtype_profiles: profiles,
        }
    }
}

impl GeneralFactors {
    /// Looks up a subtype profile, falling back to the documented default
    /// shares when the subtype is absent from the table.
    pub fn profile(&self, subtype: &str) -> SubtypeProfile {
        self.subtype_profiles
            .get(subtype)
            .copied()
            .unwrap_or_default()
    }
}

/// Per-unit energy factors plus per-building-type estimation triples.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnergyFactors {
    /// kg CO2e per kWh of natural gas.
    pub gas_kwh: f64,
    /// kg CO2e per liter of heating fuel (also used for generator fuel).
    pub fuel_liter: f64,
    /// kg CO2e per kWh of grid electricity.
    pub electricity_kwh: f64,
    /// kg CO2e per kg of coal.
    pub coal_kg: f64,
    /// Annual per-m2 factors keyed by building type.
    pub buildings: BTreeMap<String, BuildingFactors>,
}

/// Annual heating/electricity/cooling factors (kg CO2e per m2 per year).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildingFactors {
    pub heating: f64,
    pub electricity: f64,
    pub cooling: f64,
}

impl Default for EnergyFactors {
    fn default() -> Self {
        let mut buildings = BTreeMap::new();
        buildings.insert(
            "offices".to_string(),
            BuildingFactors {
                heating: 14.8,
                electricity: 21.4,
                cooling: 3.5,
            },
        );
        buildings.insert(
            "exhibition_halls".to_string(),
            BuildingFactors {
                heating: 24.6,
                electricity: 29.8,
                cooling: 6.1,
            },
        );
        buildings.insert(
            "conference_centers".to_string(),
            BuildingFactors {
                heating: 18.2,
                electricity: 25.3,
                cooling: 4.9,
            },
        );
        buildings.insert(
            "sports_facilities".to_string(),
            BuildingFactors {
                heating: 21.7,
                electricity: 19.6,
                cooling: 2.8,
            },
        );
        Self {
            gas_kwh: 0.227,
            fuel_liter: 3.25,
            electricity_kwh: 0.0569,
            coal_kg: 3.17,
            buildings,
        }
    }
}

impl EnergyFactors {
    /// Looks up the estimation triple for a building type, falling back to
    /// the `"offices"` entry when the type is unknown. An empty table
    /// yields a zeroed triple.
    pub fn building(&self, building_type: &str) -> BuildingFactors {
        self.buildings
            .get(building_type)
            .or_else(|| self.buildings.get("offices"))
            .copied()
            .unwrap_or_default()
    }
}

/// Passenger transport factors (kg CO2e per passenger-km, plus one
/// currency ratio for local ground transport).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransportFactors {
    /// Average private car, per km.
    pub car_km: f64,
    /// Average long-distance train, per km.
    pub train_km: f64,
    /// Short-haul flight (under 1000 km), per km.
    pub plane_short_haul_km: f64,
    /// Medium-haul flight (1000-3000 km), per km.
    pub plane_medium_haul_km: f64,
    /// Long-haul flight (over 3000 km), per km.
    pub plane_long_haul_km: f64,
    /// kg CO2e per currency unit of local-transport spend.
    pub local_transport_euro_ratio: f64,
}

impl Default for TransportFactors {
    fn default() -> Self {
        Self {
            car_km: 0.193,
            train_km: 0.0296,
            plane_short_haul_km: 0.258,
            plane_medium_haul_km: 0.187,
            plane_long_haul_km: 0.152,
            local_transport_euro_ratio: 0.25,
        }
    }
}

/// Meal, beverage, and tableware factors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CateringFactors {
    /// Standard breakfast, per serving.
    pub breakfast: f64,
    /// Standard snack, per serving.
    pub snack: f64,
    /// Meat-heavy meal (beef-dominant), per serving.
    pub meal_meat_heavy: f64,
    /// Balanced meal, per serving.
    pub meal_balanced: f64,
    /// Vegetarian meal, per serving.
    pub meal_vegetarian: f64,
    /// Tap water, per liter.
    pub water_liter: f64,
    /// Coffee, per cup.
    pub coffee_unit: f64,
    /// Soft drink, per unit.
    pub soft_drink_unit: f64,
    /// Alcoholic beverage, per unit.
    pub alcohol_unit: f64,
    /// Disposable tableware surcharge, per meal.
    pub tableware_disposable_meal: f64,
    /// Disposable tableware surcharge, per snack.
    pub tableware_disposable_snack: f64,
    /// Reusable tableware surcharge, per meal or snack.
    pub tableware_reusable: f64,
}

impl Default for CateringFactors {
    fn default() -> Self {
        Self {
            breakfast: 0.5139,
            snack: 0.3,
            meal_meat_heavy: 7.26,
            meal_balanced: 3.49,
            meal_vegetarian: 1.5,
            water_liter: 0.0003,
            coffee_unit: 0.0077,
            soft_drink_unit: 0.0033,
            alcohol_unit: 1.59,
            tableware_disposable_meal: 0.0004049,
            tableware_disposable_snack: 0.000485,
            tableware_reusable: 0.00005,
        }
    }
}

/// Per-person-night lodging factors.
///
/// Staying with family or friends carries no factor: those nights are
/// excluded from the accommodation total.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccommodationFactors {
    /// 5-star hotel, per person-night.
    pub hotel_5_star: f64,
    /// 3-star hotel, per person-night.
    pub hotel_3_star: f64,
    /// 1-star or unclassified hotel, per person-night.
    pub hotel_1_star: f64,
    /// Other paid lodging (rentals, hostels), per person-night.
    pub other_paid: f64,
}

impl Default for AccommodationFactors {
    fn default() -> Self {
        Self {
            hotel_5_star: 17.11,
            hotel_3_star: 8.47,
            hotel_1_star: 4.73,
            other_paid: 10.04,
        }
    }
}

/// End-of-life waste factors (kg CO2e per kg of material).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WasteFactors {
    pub plastic_kg: f64,
    pub cardboard_kg: f64,
    pub paper_kg: f64,
    pub aluminum_kg: f64,
    pub textile_kg: f64,
    pub furniture_kg: f64,
}

impl Default for WasteFactors {
    fn default() -> Self {
        Self {
            plastic_kg: 2.38,
            cardboard_kg: 1.06,
            paper_kg: 1.33,
            aluminum_kg: 9.83,
            textile_kg: 22.2,
            furniture_kg: 1.65,
        }
    }
}

/// Print, streaming, and spend-based communication factors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommunicationFactors {
    /// Large-format poster (4 m2), per unit.
    pub poster: f64,
    /// Flyer, per unit.
    pub flyer: f64,
    /// Banner, per unit.
    pub banner: f64,
    /// Streaming, per 1000 viewer-hours.
    pub streaming_per_1000_viewer_hours: f64,
    /// kg CO2e per currency unit of miscellaneous communication spend.
    pub euro_ratio: f64,
}

impl Default for CommunicationFactors {
    fn default() -> Self {
        Self {
            poster: 7.9,
            flyer: 0.0143,
            banner: 9.7,
            streaming_per_1000_viewer_hours: 64.0,
            euro_ratio: 0.17,
        }
    }
}

/// Goods transport factors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FreightFactors {
    /// Average truck, per tonne-km.
    pub truck_tkm: f64,
}

impl Default for FreightFactors {
    fn default() -> Self {
        Self { truck_tkm: 0.11 }
    }
}

/// Spend-based amenity factors (kg CO2e per currency unit).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AmenitiesFactors {
    pub site_rental_euro_ratio: f64,
    pub reception_euro_ratio: f64,
    pub construction_euro_ratio: f64,
    pub it_euro_ratio: f64,
}

impl Default for AmenitiesFactors {
    fn default() -> Self {
        Self {
            site_rental_euro_ratio: 0.048,
            reception_euro_ratio: 0.24,
            construction_euro_ratio: 0.51,
            it_euro_ratio: 0.38,
        }
    }
}

/// Goodies and badge factors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PurchaseFactors {
    /// kg CO2e per currency unit of goodies spend, keyed by goods category.
    pub goodies: BTreeMap<String, f64>,
    /// Goods category applied to goodies spend when none is specified.
    pub goodies_default_category: String,
    /// kg CO2e per badge, keyed by badge material.
    pub badges: BTreeMap<String, f64>,
}

impl Default for PurchaseFactors {
    fn default() -> Self {
        let mut goodies = BTreeMap::new();
        goodies.insert("light_office_supplies".to_string(), 5.92);
        goodies.insert("textile_goods".to_string(), 9.2);
        goodies.insert("small_electronics".to_string(), 18.5);

        let mut badges = BTreeMap::new();
        badges.insert("plastic_soft".to_string(), 0.130419);
        badges.insert("plastic_hard".to_string(), 0.197);
        badges.insert("textile".to_string(), 0.35);
        badges.insert("paper".to_string(), 0.024);

        Self {
            goodies,
            goodies_default_category: "light_office_supplies".to_string(),
            badges,
        }
    }
}

impl PurchaseFactors {
    /// Currency-to-emissions ratio for goodies spend, using the default
    /// goods category. Fallback: 5.92 (light office supplies).
    pub fn goodies_ratio(&self) -> f64 {
        self.goodies
            .get(&self.goodies_default_category)
            .copied()
            .unwrap_or(5.92)
    }

    /// Per-badge factor for a material key. Unknown materials fall back to
    /// soft plastic (0.130419).
    pub fn badge_factor(&self, material: &str) -> f64 {
        self.badges
            .get(material)
            .or_else(|| self.badges.get("plastic_soft"))
            .copied()
            .unwrap_or(0.130419)
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"energy.gas_kwh"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn non_negative(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: "must be >= 0".to_string(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl EmissionFactorTable {
    /// Returns the built-in factor table (the shipped defaults).
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Parses a factor table from a TOML file. Unspecified fields keep
    /// their built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "factors".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a factor table from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all coefficients and returns a list of errors.
    ///
    /// Every factor must be non-negative; subtype shares must lie in
    /// `[0, 1]`. Returns an empty vector if the table is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let mut check = |field: &str, value: f64| {
            if value < 0.0 {
                errors.push(ConfigError::non_negative(field));
            }
        };

        let g = &self.general;
        check("general.persons_per_exhibiting_org", g.persons_per_exhibiting_org);
        check(
            "general.persons_per_exhibiting_org_national",
            g.persons_per_exhibiting_org_national,
        );

        let e = &self.energy;
        check("energy.gas_kwh", e.gas_kwh);
        check("energy.fuel_liter", e.fuel_liter);
        check("energy.electricity_kwh", e.electricity_kwh);
        check("energy.coal_kg", e.coal_kg);
        for (name, b) in &e.buildings {
            check(&format!("energy.buildings.{name}.heating"), b.heating);
            check(&format!("energy.buildings.{name}.electricity"), b.electricity);
            check(&format!("energy.buildings.{name}.cooling"), b.cooling);
        }

        let t = &self.transport;
        check("transport.car_km", t.car_km);
        check("transport.train_km", t.train_km);
        check("transport.plane_short_haul_km", t.plane_short_haul_km);
        check("transport.plane_medium_haul_km", t.plane_medium_haul_km);
        check("transport.plane_long_haul_km", t.plane_long_haul_km);
        check("transport.local_transport_euro_ratio", t.local_transport_euro_ratio);

        let c = &self.catering;
        check("catering.breakfast", c.breakfast);
        check("catering.snack", c.snack);
        check("catering.meal_meat_heavy", c.meal_meat_heavy);
        check("catering.meal_balanced", c.meal_balanced);
        check("catering.meal_vegetarian", c.meal_vegetarian);
        check("catering.water_liter", c.water_liter);
        check("catering.coffee_unit", c.coffee_unit);
        check("catering.soft_drink_unit", c.soft_drink_unit);
        check("catering.alcohol_unit", c.alcohol_unit);
        check("catering.tableware_disposable_meal", c.tableware_disposable_meal);
        check("catering.tableware_disposable_snack", c.tableware_disposable_snack);
        check("catering.tableware_reusable", c.tableware_reusable);

        let a = &self.accommodation;
        check("accommodation.hotel_5_star", a.hotel_5_star);
        check("accommodation.hotel_3_star", a.hotel_3_star);
        check("accommodation.hotel_1_star", a.hotel_1_star);
        check("accommodation.other_paid", a.other_paid);

        let w = &self.waste;
        check("waste.plastic_kg", w.plastic_kg);
        check("waste.cardboard_kg", w.cardboard_kg);
        check("waste.paper_kg", w.paper_kg);
        check("waste.aluminum_kg", w.aluminum_kg);
        check("waste.textile_kg", w.textile_kg);
        check("waste.furniture_kg", w.furniture_kg);

        let m = &self.communication;
        check("communication.poster", m.poster);
        check("communication.flyer", m.flyer);
        check("communication.banner", m.banner);
        check(
            "communication.streaming_per_1000_viewer_hours",
            m.streaming_per_1000_viewer_hours,
        );
        check("communication.euro_ratio", m.euro_ratio);

        check("freight.truck_tkm", self.freight.truck_tkm);

        let am = &self.amenities;
        check("amenities.site_rental_euro_ratio", am.site_rental_euro_ratio);
        check("amenities.reception_euro_ratio", am.reception_euro_ratio);
        check("amenities.construction_euro_ratio", am.construction_euro_ratio);
        check("amenities.it_euro_ratio", am.it_euro_ratio);

        let p = &self.purchases;
        for (name, v) in &p.goodies {
            check(&format!("purchases.goodies.{name}"), *v);
        }
        for (name, v) in &p.badges {
            check(&format!("purchases.badges.{name}"), *v);
        }

        for (name, prof) in &self.general.subtype_profiles {
            let shares = [
                ("visitors_foreign_share", prof.visitors_foreign_share),
                ("visitors_local_share", prof.visitors_local_share),
                ("organizations_foreign_share", prof.organizations_foreign_share),
                ("organizations_local_share", prof.organizations_local_share),
            ];
            for (field, value) in shares {
                if !(0.0..=1.0).contains(&value) {
                    errors.push(ConfigError {
                        field: format!("general.subtype_profiles.{name}.{field}"),
                        message: "must be in [0.0, 1.0]".to_string(),
                    });
                }
            }
        }

        errors
    }
}
