pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
pub use config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{etl::EtlEngine, lookup::DistanceMatrixClient, pipeline::RoutePipeline};
pub use domain::model::{LookupResult, RouteReport, RouteRow};
pub use utils::error::{EtlError, Result};
