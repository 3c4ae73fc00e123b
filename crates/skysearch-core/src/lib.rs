mod app_config;
mod config;
mod coords;
mod intent;
mod resolved;
mod timeband;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use coords::Coordinates;
pub use intent::{AircraftSize, Alliance, CabinClass, ParsedIntent, SortBy, StopsFilter, TimeOfDay};
pub use resolved::{DayPart, ResolvedParams};
pub use timeband::departure_hour_range;
