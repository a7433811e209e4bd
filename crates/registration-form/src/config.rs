// File: src/config.rs
// Purpose: Configuration parsing from registration.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Form configuration. Every default reproduces the stock registration form.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FormConfig {
    #[serde(default)]
    pub password: PasswordConfig,

    #[serde(default)]
    pub phone: PhoneConfig,

    #[serde(default)]
    pub choices: ChoicesConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PasswordConfig {
    /// Minimum length in characters
    #[serde(default = "default_password_min_length")]
    pub min_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhoneConfig {
    /// Exact number of decimal digits
    #[serde(default = "default_phone_digits")]
    pub digits: usize,
}

/// Option values offered by the select inputs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChoicesConfig {
    #[serde(default = "default_genders")]
    pub genders: Vec<String>,

    #[serde(default = "default_countries")]
    pub countries: Vec<String>,
}

/// When fields are revalidated outside of submit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default = "default_true")]
    pub validate_on_change: bool,

    #[serde(default = "default_true")]
    pub validate_on_blur: bool,
}

// Default values
fn default_password_min_length() -> usize {
    6
}

fn default_phone_digits() -> usize {
    10
}

fn default_genders() -> Vec<String> {
    ["male", "female", "other"].map(String::from).to_vec()
}

fn default_countries() -> Vec<String> {
    ["usa", "canada", "india", "uk", "australia"]
        .map(String::from)
        .to_vec()
}

fn default_true() -> bool {
    true
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min_length: default_password_min_length(),
        }
    }
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            digits: default_phone_digits(),
        }
    }
}

impl Default for ChoicesConfig {
    fn default() -> Self {
        Self {
            genders: default_genders(),
            countries: default_countries(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            validate_on_change: true,
            validate_on_blur: true,
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means stock form
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./registration.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("registration.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.password.min_length, 6);
        assert_eq!(config.phone.digits, 10);
        assert_eq!(config.choices.genders, vec!["male", "female", "other"]);
        assert_eq!(
            config.choices.countries,
            vec!["usa", "canada", "india", "uk", "australia"]
        );
        assert!(config.behavior.validate_on_change);
        assert!(config.behavior.validate_on_blur);
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<FormConfig>("").unwrap_or_default();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_partial_overrides() {
        let toml = r#"
            [password]
            min_length = 8

            [choices]
            countries = ["nz"]

            [behavior]
            validate_on_change = false
        "#;
        let config: FormConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.password.min_length, 8);
        assert_eq!(config.phone.digits, 10);
        assert_eq!(config.choices.countries, vec!["nz"]);
        assert_eq!(config.choices.genders, vec!["male", "female", "other"]);
        assert!(!config.behavior.validate_on_change);
        assert!(config.behavior.validate_on_blur);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = FormConfig::load("does/not/exist/registration.toml").unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "registration-form-config-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[phone]\ndigits = 11\n").unwrap();
        let config = FormConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.phone.digits, 11);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let path = std::env::temp_dir().join(format!(
            "registration-form-bad-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[password]\nmin_length = \"six\"\n").unwrap();
        let err = FormConfig::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
