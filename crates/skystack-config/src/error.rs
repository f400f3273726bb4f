use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required configuration is missing: set the {0} environment variable")]
    MissingVar(&'static str),

    #[error("configuration value for {0} must not be empty")]
    EmptyValue(&'static str),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
