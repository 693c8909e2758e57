pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::lookup::DEFAULT_ENDPOINT;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_credential, validate_path, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_INPUT_PATH: &str = "routes.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "output.csv";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "route-distance-etl")]
#[command(about = "Batch driving distance and duration lookups for CSV route lists")]
pub struct CliConfig {
    /// Input CSV with site and coordinate columns
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    pub input_path: String,

    /// Output CSV path
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Path to TOML configuration file; replaces the flags above, except that
    /// --api-key / GOOGLE_API_KEY is used when [source] api_key is absent
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }

    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_credential("api_key", self.api_key.as_deref())?;
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::error::EtlError;

    #[test]
    fn test_cli_defaults() {
        let config =
            CliConfig::try_parse_from(["route-distance-etl", "--api-key", "abc"]).unwrap();

        assert_eq!(config.input_path, "routes.csv");
        assert_eq!(config.output_path, "output.csv");
        assert_eq!(config.api_endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.api_key(), "abc");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let config = CliConfig::try_parse_from([
            "route-distance-etl",
            "--input-path",
            "data/in.csv",
            "--output-path",
            "data/out.csv",
            "--api-endpoint",
            "http://127.0.0.1:9000/json",
            "--api-key",
            "abc",
            "-v",
        ])
        .unwrap();

        assert_eq!(config.input_path(), "data/in.csv");
        assert_eq!(config.output_path(), "data/out.csv");
        assert_eq!(config.api_endpoint(), "http://127.0.0.1:9000/json");
        assert!(config.verbose);
    }

    #[test]
    fn test_missing_api_key_fails_validation() {
        let config = CliConfig {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            config: None,
            verbose: false,
        };

        match config.validate() {
            Err(EtlError::MissingConfigError { field }) => assert_eq!(field, "api_key"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
