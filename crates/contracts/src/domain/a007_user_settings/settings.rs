use crate::shared::costing;
use crate::shared::currency::Currency;
use serde::{Deserialize, Serialize};

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ru,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "ru" => Some(Language::Ru),
            _ => None,
        }
    }
}

/// Workshop-wide preferences. Stored as a single row; `get` materializes
/// the defaults when nothing has been saved yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub language: Language,
    pub currency: Currency,
    /// Only the dark theme ships today; kept as data for forward
    /// compatibility of saved settings.
    pub theme: String,

    // Business settings
    #[serde(rename = "defaultMarkupPercent")]
    pub default_markup_percent: f64,
    #[serde(rename = "taxRate")]
    pub tax_rate: Option<f64>,

    // Telegram integration (stored only, no bot is wired up)
    #[serde(rename = "telegramChatId")]
    pub telegram_chat_id: Option<String>,
    #[serde(rename = "telegramNotificationsEnabled", default)]
    pub telegram_notifications_enabled: bool,

    // Notification preferences
    #[serde(rename = "notifyOnNewOrder", default)]
    pub notify_on_new_order: bool,
    #[serde(rename = "notifyOnStatusChange", default)]
    pub notify_on_status_change: bool,
    #[serde(rename = "notifyOnLowStock", default)]
    pub notify_on_low_stock: bool,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            language: Language::En,
            currency: Currency::Rub,
            theme: "dark".into(),
            default_markup_percent: 30.0,
            tax_rate: None,
            telegram_chat_id: None,
            telegram_notifications_enabled: false,
            notify_on_new_order: true,
            notify_on_status_change: true,
            notify_on_low_stock: true,
            updated_at: None,
        }
    }
}

impl UserSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.default_markup_percent < costing::MIN_MARKUP_PERCENT
            || self.default_markup_percent > costing::MAX_MARKUP_PERCENT
        {
            return Err("Default markup must be within 0..500%".into());
        }
        if let Some(tax) = self.tax_rate {
            if !(0.0..=100.0).contains(&tax) {
                return Err("Tax rate must be within 0..100%".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = UserSettings::default();
        assert_eq!(s.language, Language::En);
        assert_eq!(s.currency, Currency::Rub);
        assert_eq!(s.theme, "dark");
        assert_eq!(s.default_markup_percent, 30.0);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_validate_markup_range() {
        let mut s = UserSettings::default();
        s.default_markup_percent = 600.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("ru"), Some(Language::Ru));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::En.code(), "en");
    }
}
