use crate::core::composer::ComposerSettings;
use crate::core::handoff::HandoffTarget;
use crate::core::message::{is_valid_timestamp_format, TimestampStyle};
use crate::domain::catalog;
use crate::domain::model::{ServiceCatalog, ServiceEntry, Testimonial, TimeSlotCatalog};
use crate::utils::error::{DeskError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// 診所設定；所有區段皆可省略，省略時使用內建資料
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PracticeConfig {
    pub practice: Option<PracticeInfo>,
    pub handoff: Option<HandoffConfig>,
    pub booking: Option<BookingConfig>,
    pub services: Option<Vec<ServiceEntry>>,
    pub testimonials: Option<Vec<Testimonial>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeInfo {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HandoffConfig {
    pub host: Option<String>,
    pub destination: Option<String>,
    pub reset_delay_ms: Option<u64>,
    pub timestamp_format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingConfig {
    pub time_slots: Option<Vec<String>>,
}

impl PracticeConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DeskError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DeskError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WHATSAPP_NUMBER})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DeskError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("practice.name", self.practice_name())?;

        validation::validate_host("handoff.host", self.host())?;
        validation::validate_destination_identifier("handoff.destination", self.destination())?;

        if let Some(format) = self.timestamp_format() {
            if !is_valid_timestamp_format(format) {
                return Err(DeskError::InvalidConfigValueError {
                    field: "handoff.timestamp_format".to_string(),
                    value: format.to_string(),
                    reason: "Not a valid strftime pattern".to_string(),
                });
            }
        }

        let services = self.service_entries();
        for service in &services {
            validation::validate_non_empty_string("services.code", &service.code)?;
            validation::validate_non_empty_string("services.label", &service.label)?;
        }
        validation::validate_unique("services.code", services.iter().map(|s| &s.code))?;

        validation::validate_unique("booking.time_slots", &self.time_slot_labels())?;

        let testimonials = self.testimonials();
        if testimonials.is_empty() {
            return Err(DeskError::ConfigValidationError {
                field: "testimonials".to_string(),
                message: "At least one testimonial is required".to_string(),
            });
        }
        for testimonial in &testimonials {
            validation::validate_range("testimonials.rating", testimonial.rating, 1, 5)?;
        }
        validation::validate_unique("testimonials.id", testimonials.iter().map(|t| &t.id))?;

        Ok(())
    }

    pub fn practice_name(&self) -> &str {
        self.practice
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or(catalog::PRACTICE_NAME)
    }

    pub fn contact_phone(&self) -> &str {
        self.practice
            .as_ref()
            .and_then(|p| p.phone.as_deref())
            .unwrap_or(catalog::DESTINATION_IDENTIFIER)
    }

    pub fn contact_email(&self) -> &str {
        self.practice
            .as_ref()
            .and_then(|p| p.email.as_deref())
            .unwrap_or(catalog::PRACTICE_EMAIL)
    }

    pub fn host(&self) -> &str {
        self.handoff
            .as_ref()
            .and_then(|h| h.host.as_deref())
            .unwrap_or(catalog::MESSAGING_HOST)
    }

    pub fn destination(&self) -> &str {
        self.handoff
            .as_ref()
            .and_then(|h| h.destination.as_deref())
            .unwrap_or(catalog::DESTINATION_IDENTIFIER)
    }

    pub fn reset_delay(&self) -> Duration {
        let millis = self
            .handoff
            .as_ref()
            .and_then(|h| h.reset_delay_ms)
            .unwrap_or(catalog::RESET_DELAY_MS);
        Duration::from_millis(millis)
    }

    pub fn timestamp_format(&self) -> Option<&str> {
        self.handoff
            .as_ref()
            .and_then(|h| h.timestamp_format.as_deref())
    }

    /// 有設定格式就用設定，否則依主機語系
    pub fn timestamp_style(&self) -> TimestampStyle {
        match self.timestamp_format() {
            Some(format) => TimestampStyle::Pattern(format.to_string()),
            None => TimestampStyle::from_host(),
        }
    }

    pub fn service_entries(&self) -> Vec<ServiceEntry> {
        self.services.clone().unwrap_or_else(catalog::default_services)
    }

    pub fn service_catalog(&self) -> ServiceCatalog {
        ServiceCatalog::new(self.service_entries())
    }

    pub fn time_slot_labels(&self) -> Vec<String> {
        self.booking
            .as_ref()
            .and_then(|b| b.time_slots.clone())
            .unwrap_or_else(catalog::default_time_slots)
    }

    pub fn time_slot_catalog(&self) -> TimeSlotCatalog {
        TimeSlotCatalog::new(self.time_slot_labels())
    }

    pub fn testimonials(&self) -> Vec<Testimonial> {
        self.testimonials
            .clone()
            .unwrap_or_else(catalog::default_testimonials)
    }

    pub fn handoff_target(&self) -> HandoffTarget {
        HandoffTarget::new(self.host(), self.destination())
    }

    pub fn composer_settings(&self) -> ComposerSettings {
        ComposerSettings {
            practice_name: self.practice_name().to_string(),
            target: self.handoff_target(),
            reset_delay: self.reset_delay(),
            timestamp: self.timestamp_style(),
        }
    }
}

impl Validate for PracticeConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
