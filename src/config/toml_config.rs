use crate::domain::model::{CompanyInfo, PriceDisplay, QuoteForm};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_COUNTRIES_ENDPOINT: &str =
    "https://restcountries.com/v3.1/all?fields=name,translations";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub company: CompanyInfo,
    pub defaults: DefaultsConfig,
    pub reference: ReferenceConfig,
    pub output: OutputConfig,
}

/// Values a fresh quotation starts from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub currency: String,
    pub tax_percent: f64,
    pub adults: u32,
    pub children: u32,
    pub price_display: PriceDisplay,
    pub notes: Option<String>,
    pub terms: Option<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            tax_percent: 0.0,
            adults: 1,
            children: 0,
            price_display: PriceDisplay::Total,
            notes: None,
            terms: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    pub enabled: bool,
    pub countries_endpoint: Option<String>,
    pub airports_endpoint: Option<String>,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            countries_endpoint: Some(DEFAULT_COUNTRIES_ENDPOINT.to_string()),
            airports_endpoint: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "./quotes".to_string(),
        }
    }
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QuoteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string, after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QuoteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QuoteError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("output.path", &self.output.path)?;
        validate_non_empty_string("defaults.currency", &self.defaults.currency)?;
        validate_range("defaults.tax_percent", self.defaults.tax_percent, 0.0, 100.0)?;

        if self.reference.enabled {
            if let Some(endpoint) = &self.reference.countries_endpoint {
                validate_url("reference.countries_endpoint", endpoint)?;
            }
            if let Some(endpoint) = &self.reference.airports_endpoint {
                validate_url("reference.airports_endpoint", endpoint)?;
            }
        }

        Ok(())
    }

    /// The form a new quotation opens with.
    pub fn initial_form(&self) -> QuoteForm {
        let defaults = &self.defaults;
        let mut form = QuoteForm {
            company: self.company.clone(),
            currency: defaults.currency.trim().to_string(),
            adults: defaults.adults.to_string(),
            children: defaults.children.to_string(),
            tax_percent: defaults.tax_percent.to_string(),
            price_display: defaults.price_display,
            ..QuoteForm::default()
        };
        if let Some(notes) = &defaults.notes {
            form.notes = notes.clone();
        }
        if let Some(terms) = &defaults.terms {
            form.terms = terms.clone();
        }

        tracing::debug!("Initial form: currency {}, tax {}%", form.currency, form.tax_percent);
        form
    }
}

impl ConfigProvider for TomlConfig {
    fn countries_endpoint(&self) -> Option<&str> {
        self.reference.countries_endpoint.as_deref()
    }

    fn airports_endpoint(&self) -> Option<&str> {
        self.reference.airports_endpoint.as_deref()
    }

    fn reference_enabled(&self) -> bool {
        self.reference.enabled
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
