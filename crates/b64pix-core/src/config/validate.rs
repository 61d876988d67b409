//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_file_size_kib == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_file_size_kib must be > 0".into(),
            ));
        }
        if self.thumbnail.max_edge == 0 {
            return Err(ConfigError::ValidationError(
                "thumbnail.max_edge must be > 0".into(),
            ));
        }
        if self.thumbnail.format != "png" {
            return Err(ConfigError::ValidationError(format!(
                "thumbnail.format must be \"png\", got \"{}\"",
                self.thumbnail.format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_size_limit() {
        let mut config = Config::default();
        config.limits.max_file_size_kib = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_file_size_kib"));
    }

    #[test]
    fn test_validate_rejects_zero_max_edge() {
        let mut config = Config::default();
        config.thumbnail.max_edge = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_edge"));
    }

    #[test]
    fn test_validate_rejects_unknown_thumbnail_format() {
        let mut config = Config::default();
        config.thumbnail.format = "webp".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("thumbnail.format"));
    }
}
