//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{ChatWardenError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(ChatWardenError::Config("Bot token is required".to_string()));
    }

    if config.technical_admin_ids.is_empty() {
        return Err(ChatWardenError::Config(
            "At least one technical admin ID must be configured".to_string(),
        ));
    }

    Ok(())
}

/// Validate storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.admins_file.is_empty() {
        return Err(ChatWardenError::Config(
            "Admin list file path is required".to_string(),
        ));
    }

    if config.rules_file.is_empty() {
        return Err(ChatWardenError::Config(
            "Rules file path is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(ChatWardenError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(ChatWardenError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.bot.token = "123:token".to_string();
        settings.bot.technical_admin_ids = vec![42];
        settings
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_settings(&valid_settings()).is_ok());
    }

    #[test]
    fn test_missing_token_is_rejected() {
        let mut settings = valid_settings();
        settings.bot.token = String::new();

        assert_matches!(
            validate_settings(&settings),
            Err(ChatWardenError::Config(_))
        );
    }

    #[test]
    fn test_missing_technical_admins_are_rejected() {
        let mut settings = valid_settings();
        settings.bot.technical_admin_ids.clear();

        assert_matches!(
            validate_settings(&settings),
            Err(ChatWardenError::Config(_))
        );
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let mut settings = valid_settings();
        settings.logging.level = "verbose".to_string();

        assert_matches!(
            validate_settings(&settings),
            Err(ChatWardenError::Config(_))
        );
    }
}
