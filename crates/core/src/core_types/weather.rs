//! Weather snapshot for one operational period
//!
//! Weather is regenerated wholesale every time a period advances; it never drifts
//! incrementally. Units follow the incident reports the engine feeds: wind in mph,
//! temperature in °F, relative humidity in percent.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value ranges used when drawing random weather.
///
/// All ranges are inclusive on both ends.
pub mod weather_ranges {
    use std::ops::RangeInclusive;

    /// Wind speed in mph
    pub const WIND_SPEED: RangeInclusive<u32> = 5..=25;

    /// Air temperature in °F
    pub const TEMPERATURE: RangeInclusive<u32> = 75..=105;

    /// Relative humidity in %
    pub const HUMIDITY: RangeInclusive<u32> = 10..=60;
}

/// Eight-point compass direction the wind blows *towards*
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl WindDirection {
    /// All compass points, clockwise from north
    pub const ALL: [WindDirection; 8] = [
        WindDirection::North,
        WindDirection::NorthEast,
        WindDirection::East,
        WindDirection::SouthEast,
        WindDirection::South,
        WindDirection::SouthWest,
        WindDirection::West,
        WindDirection::NorthWest,
    ];

    /// Grid offset `(dx, dy)` of one step downwind. North is negative y.
    pub fn to_vector(&self) -> (i32, i32) {
        match self {
            WindDirection::North => (0, -1),
            WindDirection::NorthEast => (1, -1),
            WindDirection::East => (1, 0),
            WindDirection::SouthEast => (1, 1),
            WindDirection::South => (0, 1),
            WindDirection::SouthWest => (-1, 1),
            WindDirection::West => (-1, 0),
            WindDirection::NorthWest => (-1, -1),
        }
    }

    /// Compass abbreviation, e.g. `"NE"`
    pub fn as_str(&self) -> &'static str {
        match self {
            WindDirection::North => "N",
            WindDirection::NorthEast => "NE",
            WindDirection::East => "E",
            WindDirection::SouthEast => "SE",
            WindDirection::South => "S",
            WindDirection::SouthWest => "SW",
            WindDirection::West => "W",
            WindDirection::NorthWest => "NW",
        }
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence in the period's forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForecastReliability {
    High,
    Moderate,
    Low,
}

impl ForecastReliability {
    pub const ALL: [ForecastReliability; 3] = [
        ForecastReliability::High,
        ForecastReliability::Moderate,
        ForecastReliability::Low,
    ];
}

impl fmt::Display for ForecastReliability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ForecastReliability::High => "high",
            ForecastReliability::Moderate => "moderate",
            ForecastReliability::Low => "low",
        };
        f.write_str(name)
    }
}

/// Fire danger rating derived from wind, temperature and humidity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DangerRating {
    Low,
    Moderate,
    High,
    Extreme,
}

impl DangerRating {
    /// Map a combined 3-9 danger score onto a rating
    pub fn from_score(score: u32) -> Self {
        match score {
            8.. => DangerRating::Extreme,
            6..=7 => DangerRating::High,
            4..=5 => DangerRating::Moderate,
            _ => DangerRating::Low,
        }
    }
}

impl fmt::Display for DangerRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DangerRating::Low => "LOW",
            DangerRating::Moderate => "MODERATE",
            DangerRating::High => "HIGH",
            DangerRating::Extreme => "EXTREME",
        };
        f.write_str(name)
    }
}

/// Weather conditions for one operational period.
///
/// Fields are only reachable through [`WeatherState::new`], [`WeatherState::new_random`]
/// and deserialization, all of which keep every value inside [`weather_ranges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WeatherStateRepr")]
pub struct WeatherState {
    wind_direction: WindDirection,
    wind_speed: u32,
    temperature: u32,
    humidity: u32,
    forecast_reliability: ForecastReliability,
}

/// Unchecked wire form of [`WeatherState`], clamped on the way in
#[derive(Deserialize)]
struct WeatherStateRepr {
    wind_direction: WindDirection,
    wind_speed: u32,
    temperature: u32,
    humidity: u32,
    forecast_reliability: ForecastReliability,
}

impl From<WeatherStateRepr> for WeatherState {
    fn from(raw: WeatherStateRepr) -> Self {
        WeatherState::new(
            raw.wind_direction,
            raw.wind_speed,
            raw.temperature,
            raw.humidity,
            raw.forecast_reliability,
        )
    }
}

impl WeatherState {
    /// Create fixed weather, clamping each value into its valid range
    pub fn new(
        wind_direction: WindDirection,
        wind_speed: u32,
        temperature: u32,
        humidity: u32,
        forecast_reliability: ForecastReliability,
    ) -> Self {
        Self {
            wind_direction,
            wind_speed: clamp_to(wind_speed, &weather_ranges::WIND_SPEED),
            temperature: clamp_to(temperature, &weather_ranges::TEMPERATURE),
            humidity: clamp_to(humidity, &weather_ranges::HUMIDITY),
            forecast_reliability,
        }
    }

    /// Draw every field independently and uniformly from its range
    pub fn new_random(rng: &mut impl Rng) -> Self {
        Self {
            wind_direction: WindDirection::ALL[rng.random_range(0..WindDirection::ALL.len())],
            wind_speed: rng.random_range(weather_ranges::WIND_SPEED),
            temperature: rng.random_range(weather_ranges::TEMPERATURE),
            humidity: rng.random_range(weather_ranges::HUMIDITY),
            forecast_reliability: ForecastReliability::ALL
                [rng.random_range(0..ForecastReliability::ALL.len())],
        }
    }

    // Public accessor methods

    /// Direction the wind blows towards
    pub fn wind_direction(&self) -> WindDirection {
        self.wind_direction
    }

    /// Wind speed (mph), within [`weather_ranges::WIND_SPEED`]
    pub fn wind_speed(&self) -> u32 {
        self.wind_speed
    }

    /// Temperature (°F), within [`weather_ranges::TEMPERATURE`]
    pub fn temperature(&self) -> u32 {
        self.temperature
    }

    /// Relative humidity (%), within [`weather_ranges::HUMIDITY`]
    pub fn humidity(&self) -> u32 {
        self.humidity
    }

    pub fn forecast_reliability(&self) -> ForecastReliability {
        self.forecast_reliability
    }

    /// Wind contribution to the danger score (1-3)
    fn wind_score(&self) -> u32 {
        match self.wind_speed {
            s if s > 20 => 3,
            s if s > 15 => 2,
            _ => 1,
        }
    }

    /// Temperature contribution to the danger score (1-3)
    fn temperature_score(&self) -> u32 {
        match self.temperature {
            t if t > 95 => 3,
            t if t > 85 => 2,
            _ => 1,
        }
    }

    /// Humidity contribution to the danger score (1-3); drier is worse
    fn humidity_score(&self) -> u32 {
        match self.humidity {
            h if h < 20 => 3,
            h if h < 40 => 2,
            _ => 1,
        }
    }

    /// Combined danger score in `3..=9`
    pub fn danger_score(&self) -> u32 {
        self.wind_score() + self.temperature_score() + self.humidity_score()
    }

    /// Fire danger rating for these conditions
    pub fn danger_rating(&self) -> DangerRating {
        DangerRating::from_score(self.danger_score())
    }
}

fn clamp_to(value: u32, range: &std::ops::RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}
