// Restaurant candidates for the wheel

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::errors::LunchwheelError;
use crate::wheel::WheelOption;

const METERS_PER_MILE: f64 = 1609.34;

/// Segments on the wheel; search results beyond this are left off.
pub const WHEEL_SLOTS: usize = 8;

/// The places API takes meters, user settings are miles.
pub fn miles_to_meters(miles: f64) -> u32 {
    (miles * METERS_PER_MILE).round() as u32
}

/// One place returned by the restaurant provider.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Price level on the provider's 1-4 scale, when known
    pub price_level: Option<u8>,
    /// Provider-assigned place id, used to build the detail page link
    pub external_id: String,
}

impl Restaurant {
    /// Detail page URL for the place.
    pub fn link(&self) -> String {
        format!("https://foursquare.com/v/{}", self.external_id)
    }

    /// Price badge: one `$` per level, `Unknown` when the provider has none.
    pub fn price_badge(&self) -> String {
        match self.price_level {
            Some(level) => "$".repeat(level as usize),
            None => "Unknown".to_string(),
        }
    }
}

/// Parameters for one candidate search.
#[derive(Clone, Debug)]
pub struct SearchQuery {
    pub lat: f64,
    pub lon: f64,
    pub radius_meters: u32,
    pub query: String,
    pub limit: usize,
    pub min_price: u8,
    pub max_price: u8,
}

/// Abstract places-search collaborator. Implementations fail with
/// `Network` when the search could not run and `NoResults` when it ran but
/// matched nothing; both are for the caller to catch and present.
pub trait RestaurantProvider {
    fn search(&self, query: &SearchQuery) -> Result<Vec<Restaurant>, LunchwheelError>;
}

/// Provider backed by a JSON file holding an array of restaurants. Stands in
/// for the network places API and applies the same price and limit filters
/// locally.
pub struct FixtureProvider {
    path: PathBuf,
}

impl FixtureProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RestaurantProvider for FixtureProvider {
    fn search(&self, query: &SearchQuery) -> Result<Vec<Restaurant>, LunchwheelError> {
        let content = fs::read_to_string(&self.path).map_err(|e| LunchwheelError::Network {
            reason: format!("could not read candidate file {:?}: {e}", self.path),
        })?;
        let all: Vec<Restaurant> =
            serde_json::from_str(&content).map_err(|e| LunchwheelError::Network {
                reason: format!("malformed candidate file {:?}: {e}", self.path),
            })?;

        // places with no price information pass the price filter
        let mut results: Vec<Restaurant> = all
            .into_iter()
            .filter(|r| {
                r.price_level
                    .is_none_or(|p| p >= query.min_price && p <= query.max_price)
            })
            .collect();
        results.truncate(query.limit);

        if results.is_empty() {
            return Err(LunchwheelError::NoResults);
        }
        debug!("candidate search matched {} places", results.len());
        Ok(results)
    }
}

/// Turns raw search results into wheel options: duplicate names are dropped
/// (first occurrence wins) and a random subset of up to 8 goes on the wheel.
pub fn pick_candidates(restaurants: &[Restaurant], rng: &mut impl Rng) -> Vec<WheelOption> {
    let mut seen = HashSet::new();
    let mut options: Vec<WheelOption> = restaurants
        .iter()
        .filter(|r| seen.insert(r.name.clone()))
        .map(|r| WheelOption::new(&r.name, r.link()))
        .collect();
    options.shuffle(rng);
    options.truncate(WHEEL_SLOTS);
    options
}

/// Placeholder wheel shown before any candidates arrive.
pub fn loading_options() -> Vec<WheelOption> {
    vec![WheelOption::new("", ""); WHEEL_SLOTS]
}
