//! Core value types shared by the grid and the engines

pub mod fire_state;
pub mod terrain;
pub mod weather;

pub use fire_state::FireState;
pub use terrain::{TerrainDistribution, TerrainType, STANDARD_TERRAIN_WEIGHTS};
pub use weather::{weather_ranges, DangerRating, ForecastReliability, WeatherState, WindDirection};
