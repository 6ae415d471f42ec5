// User search settings, persisted alongside the history

use log::warn;
use serde_json::Value;

use crate::errors::LunchwheelError;
use crate::provider::{SearchQuery, miles_to_meters};
use crate::storage::KeyValueStore;

pub const DISTANCE_KEY: &str = "distance";
pub const PRICE_KEY: &str = "price";

const DEFAULT_DISTANCE_MILES: f64 = 0.5;
const DEFAULT_PRICE_BAND: &str = "2,3";
const DEFAULT_QUERY: &str = "restaurant";
const DEFAULT_RESULT_LIMIT: usize = 20;

/// Search preferences the user can tune. Stored as individual keys in the
/// key-value store so each survives independently of the others.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Search radius in miles
    pub distance_miles: f64,
    /// "min,max" price band on the provider's 1-4 scale
    pub price_band: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            distance_miles: DEFAULT_DISTANCE_MILES,
            price_band: DEFAULT_PRICE_BAND.to_string(),
        }
    }
}

impl Settings {
    /// Loads saved settings, falling back to the defaults for anything
    /// missing or unreadable. Storage failures are logged, never fatal.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let mut settings = Self::default();
        match store.get(DISTANCE_KEY) {
            Ok(Some(value)) => {
                if let Some(distance) = value.as_f64() {
                    settings.distance_miles = distance;
                }
            }
            Ok(None) => {}
            Err(e) => warn!("could not read saved distance: {e}"),
        }
        match store.get(PRICE_KEY) {
            Ok(Some(value)) => {
                if let Some(band) = value.as_str() {
                    settings.price_band = band.to_string();
                }
            }
            Ok(None) => {}
            Err(e) => warn!("could not read saved price band: {e}"),
        }
        settings
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), LunchwheelError> {
        store.set(DISTANCE_KEY, Value::from(self.distance_miles))?;
        store.set(PRICE_KEY, Value::from(self.price_band.clone()))
    }

    pub fn set_distance(&mut self, miles: f64) -> Result<(), LunchwheelError> {
        if !miles.is_finite() || miles <= 0. {
            return Err(LunchwheelError::InvalidSetting {
                field: DISTANCE_KEY.to_string(),
                reason: "distance must be a positive number of miles".to_string(),
            });
        }
        self.distance_miles = miles;
        Ok(())
    }

    pub fn set_price_band(&mut self, band: &str) -> Result<(), LunchwheelError> {
        let candidate = Self {
            price_band: band.to_string(),
            ..self.clone()
        };
        candidate.price_bounds()?;
        self.price_band = band.to_string();
        Ok(())
    }

    /// Price band bounds parsed from the "min,max" form.
    pub fn price_bounds(&self) -> Result<(u8, u8), LunchwheelError> {
        let invalid = |reason: &str| LunchwheelError::InvalidSetting {
            field: PRICE_KEY.to_string(),
            reason: reason.to_string(),
        };
        let (min, max) = self
            .price_band
            .split_once(',')
            .ok_or_else(|| invalid("expected \"min,max\""))?;
        let min: u8 = min
            .trim()
            .parse()
            .map_err(|_| invalid("minimum is not a number"))?;
        let max: u8 = max
            .trim()
            .parse()
            .map_err(|_| invalid("maximum is not a number"))?;
        if !(1..=4).contains(&min) || !(1..=4).contains(&max) || min > max {
            return Err(invalid("price levels run from 1 to 4, min before max"));
        }
        Ok((min, max))
    }

    /// Search query for the restaurant provider at the given location.
    pub fn to_query(&self, lat: f64, lon: f64) -> Result<SearchQuery, LunchwheelError> {
        let (min_price, max_price) = self.price_bounds()?;
        Ok(SearchQuery {
            lat,
            lon,
            radius_meters: miles_to_meters(self.distance_miles),
            query: DEFAULT_QUERY.to_string(),
            limit: DEFAULT_RESULT_LIMIT,
            min_price,
            max_price,
        })
    }
}
