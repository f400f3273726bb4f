//! Skystack configuration
//!
//! The two external inputs a stack needs: the apex domain name and the
//! container image repository. Held in an explicit [`StackConfig`]
//! struct that is handed to the composer, so tests can inject values
//! instead of relying on ambient process state. [`StackConfig::from_env`]
//! is the one place the environment is read.

pub mod error;

pub use error::*;

use serde::{Deserialize, Serialize};

/// Environment variable holding the apex domain name
pub const ENV_DOMAIN_NAME: &str = "SKYSTACK_DOMAIN_NAME";

/// Environment variable holding the image repository name
pub const ENV_IMAGE_REPOSITORY: &str = "SKYSTACK_IMAGE_REPOSITORY";

/// External inputs for one stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackConfig {
    /// Apex domain name the stack is exposed under (e.g. "example.com")
    pub domain_name: String,

    /// Repository name of the pre-built container image
    pub image_repository: String,
}

impl StackConfig {
    /// Create a config from explicit values. Empty values are rejected;
    /// there is no fallback.
    pub fn new(
        domain_name: impl Into<String>,
        image_repository: impl Into<String>,
    ) -> Result<Self> {
        let domain_name = domain_name.into();
        let image_repository = image_repository.into();

        if domain_name.trim().is_empty() {
            return Err(ConfigError::EmptyValue(ENV_DOMAIN_NAME));
        }
        if image_repository.trim().is_empty() {
            return Err(ConfigError::EmptyValue(ENV_IMAGE_REPOSITORY));
        }

        Ok(Self {
            domain_name,
            image_repository,
        })
    }

    /// Read the config from the environment.
    ///
    /// A missing variable fails the whole construction; there is no
    /// partial stack.
    pub fn from_env() -> Result<Self> {
        let domain_name = std::env::var(ENV_DOMAIN_NAME)
            .map_err(|_| ConfigError::MissingVar(ENV_DOMAIN_NAME))?;
        let image_repository = std::env::var(ENV_IMAGE_REPOSITORY)
            .map_err(|_| ConfigError::MissingVar(ENV_IMAGE_REPOSITORY))?;

        Self::new(domain_name, image_repository)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_new_with_valid_values() {
        let config = StackConfig::new("example.com", "acme/api").unwrap();
        assert_eq!(config.domain_name, "example.com");
        assert_eq!(config.image_repository, "acme/api");
    }

    #[test]
    fn test_new_rejects_empty_domain() {
        let result = StackConfig::new("", "acme/api");
        assert!(matches!(result, Err(ConfigError::EmptyValue(ENV_DOMAIN_NAME))));
    }

    #[test]
    fn test_new_rejects_blank_repository() {
        let result = StackConfig::new("example.com", "   ");
        assert!(matches!(
            result,
            Err(ConfigError::EmptyValue(ENV_IMAGE_REPOSITORY))
        ));
    }

    #[test]
    #[serial]
    fn test_from_env() {
        temp_env::with_vars(
            [
                (ENV_DOMAIN_NAME, Some("example.com")),
                (ENV_IMAGE_REPOSITORY, Some("acme/api")),
            ],
            || {
                let config = StackConfig::from_env().unwrap();
                assert_eq!(config.domain_name, "example.com");
                assert_eq!(config.image_repository, "acme/api");
            },
        );
    }

    #[test]
    #[serial]
    fn test_from_env_missing_repository() {
        temp_env::with_vars(
            [
                (ENV_DOMAIN_NAME, Some("example.com")),
                (ENV_IMAGE_REPOSITORY, None),
            ],
            || {
                let result = StackConfig::from_env();
                assert!(matches!(
                    result,
                    Err(ConfigError::MissingVar(ENV_IMAGE_REPOSITORY))
                ));
            },
        );
    }

    #[test]
    #[serial]
    fn test_from_env_missing_domain() {
        temp_env::with_vars(
            [
                (ENV_DOMAIN_NAME, None),
                (ENV_IMAGE_REPOSITORY, Some("acme/api")),
            ],
            || {
                let result = StackConfig::from_env();
                assert!(matches!(result, Err(ConfigError::MissingVar(ENV_DOMAIN_NAME))));
            },
        );
    }
}
