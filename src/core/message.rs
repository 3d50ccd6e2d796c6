//! Renders a draft into the chat message sent to the practice.
//!
//! The layout is fixed line by line. Only the last line (the timestamp)
//! changes between two renders of the same draft; it follows the host
//! locale unless a strftime pattern is configured.

use crate::domain::model::{Draft, ServiceCatalog};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Locale, TimeZone};

pub const HEADER_LINE: &str = "🦷 *DENTAL APPOINTMENT REQUEST* 🦷";
pub const EMERGENCY_BANNER: &str = "🚨 *EMERGENCY APPOINTMENT* 🚨";
pub const PATIENT_SECTION: &str = "👤 *Patient Information:*";
pub const SERVICE_SECTION: &str = "🔧 *Service Requested:*";
pub const PREFERRED_TIME_SECTION: &str = "📅 *Preferred Appointment Time:*";
pub const NOTES_SECTION: &str = "💬 *Additional Notes:*";
pub const FOOTER_SEPARATOR: &str = "--- --- --- ---";
pub const TIMESTAMP_PREFIX: &str = "🕒 ";

/// en-US `toLocaleString` rendering, e.g. `3/10/2025, 2:05:09 PM`.
/// Used when the host locale cannot be determined.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Locale date, then locale time.
pub const LOCALIZED_TIMESTAMP_FORMAT: &str = "%x, %X";

/// How the footer timestamp is rendered.
#[derive(Debug, Clone)]
pub enum TimestampStyle {
    /// The locale's own date and time representation.
    Localized(Locale),
    /// An explicit strftime pattern.
    Pattern(String),
}

impl TimestampStyle {
    /// 依主機語系決定；偵測不到時退回 en-US 格式
    pub fn from_host() -> Self {
        match sys_locale::get_locale().as_deref().and_then(parse_locale) {
            Some(locale) => TimestampStyle::Localized(locale),
            None => {
                tracing::debug!("Host locale unknown, using en-US timestamp format");
                TimestampStyle::Pattern(DEFAULT_TIMESTAMP_FORMAT.to_string())
            }
        }
    }

    pub fn render<Tz>(&self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        match self {
            TimestampStyle::Localized(locale) => at
                .format_localized(LOCALIZED_TIMESTAMP_FORMAT, *locale)
                .to_string(),
            TimestampStyle::Pattern(format) => render_timestamp(at, format),
        }
    }
}

/// Maps `de-DE`, `de_DE` or `de_DE.UTF-8@euro` onto chrono's locale table.
/// `C` and `POSIX` count as unknown.
pub fn parse_locale(name: &str) -> Option<Locale> {
    let base = name.split(['.', '@']).next()?.replace('-', "_");
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Locale::try_from(base.as_str()).ok()
}

pub fn attribution_line(practice_name: &str) -> String {
    format!("📱 Sent via {} Website", practice_name)
}

/// Composes the message stamped with the current local time in the host locale.
pub fn compose_message(draft: &Draft, services: &ServiceCatalog, practice_name: &str) -> String {
    let timestamp = TimestampStyle::from_host().render(&Local::now());
    compose_message_at(draft, services, practice_name, &timestamp)
}

/// Pure rendering with a caller-supplied timestamp string.
pub fn compose_message_at(
    draft: &Draft,
    services: &ServiceCatalog,
    practice_name: &str,
    timestamp: &str,
) -> String {
    let mut message = format!("{}\n\n", HEADER_LINE);

    if draft.is_emergency {
        message.push_str(&format!("{}\n\n", EMERGENCY_BANNER));
    }

    message.push_str(&format!("{}\n", PATIENT_SECTION));
    message.push_str(&format!("• Name: {}\n", draft.name));
    message.push_str(&format!("• Phone: {}\n", draft.phone));
    message.push_str(&format!("• Email: {}\n\n", draft.email));

    message.push_str(&format!("{}\n", SERVICE_SECTION));
    message.push_str(&format!(
        "• {}\n\n",
        services.display_label(&draft.service_code)
    ));

    if draft.has_preferred_slot() {
        message.push_str(&format!("{}\n", PREFERRED_TIME_SECTION));
        if !draft.preferred_date.is_empty() {
            message.push_str(&format!("• Date: {}\n", draft.preferred_date));
        }
        // 只有時間行帶空白行結尾
        if !draft.preferred_time.is_empty() {
            message.push_str(&format!("• Time: {}\n\n", draft.preferred_time));
        }
    }

    if !draft.notes.trim().is_empty() {
        message.push_str(&format!("{}\n{}\n\n", NOTES_SECTION, draft.notes));
    }

    message.push_str(&format!("{}\n", FOOTER_SEPARATOR));
    message.push_str(&format!("{}\n", attribution_line(practice_name)));
    message.push_str(&format!("{}{}", TIMESTAMP_PREFIX, timestamp));

    message
}

pub fn render_timestamp<Tz>(at: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format(format).to_string()
}

/// Rejects strftime patterns chrono cannot render.
pub fn is_valid_timestamp_format(format: &str) -> bool {
    !format.is_empty() && StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;
    use chrono::{FixedOffset, TimeZone};

    fn base_draft() -> Draft {
        Draft {
            name: "Jane Doe".to_string(),
            phone: "5551234".to_string(),
            service_code: "implants".to_string(),
            ..Draft::default()
        }
    }

    #[test]
    fn test_minimal_message_golden() {
        let message = compose_message_at(
            &base_draft(),
            &catalog::service_catalog(),
            "Beyond Smile Dental Care",
            "3/10/2025, 2:05:09 PM",
        );

        let expected = "🦷 *DENTAL APPOINTMENT REQUEST* 🦷\n\n\
👤 *Patient Information:*\n\
• Name: Jane Doe\n\
• Phone: 5551234\n\
• Email: \n\n\
🔧 *Service Requested:*\n\
• Dental Implants\n\n\
--- --- --- ---\n\
📱 Sent via Beyond Smile Dental Care Website\n\
🕒 3/10/2025, 2:05:09 PM";

        assert_eq!(message, expected);
    }

    #[test]
    fn test_full_message_golden() {
        let draft = Draft {
            email: "jane@example.com".to_string(),
            preferred_date: "2025-03-10".to_string(),
            preferred_time: "9:00 AM".to_string(),
            notes: "  Sensitive molar\n".to_string(),
            is_emergency: true,
            ..base_draft()
        };

        let message = compose_message_at(&draft, &catalog::service_catalog(), "Clinic", "now");

        let expected = "🦷 *DENTAL APPOINTMENT REQUEST* 🦷\n\n\
🚨 *EMERGENCY APPOINTMENT* 🚨\n\n\
👤 *Patient Information:*\n\
• Name: Jane Doe\n\
• Phone: 5551234\n\
• Email: jane@example.com\n\n\
🔧 *Service Requested:*\n\
• Dental Implants\n\n\
📅 *Preferred Appointment Time:*\n\
• Date: 2025-03-10\n\
• Time: 9:00 AM\n\n\
💬 *Additional Notes:*\n  Sensitive molar\n\n\n\
--- --- --- ---\n\
📱 Sent via Clinic Website\n\
🕒 now";

        assert_eq!(message, expected);
    }

    #[test]
    fn test_date_only_keeps_single_line_break() {
        let draft = Draft {
            preferred_date: "2025-03-10".to_string(),
            ..base_draft()
        };
        let message = compose_message_at(&draft, &catalog::service_catalog(), "Clinic", "now");

        assert!(message.contains("📅 *Preferred Appointment Time:*\n• Date: 2025-03-10\n---"));
        assert!(!message.contains("• Time:"));
    }

    #[test]
    fn test_time_only_omits_date_line() {
        let draft = Draft {
            preferred_time: "5:00 PM".to_string(),
            ..base_draft()
        };
        let message = compose_message_at(&draft, &catalog::service_catalog(), "Clinic", "now");

        assert!(message.contains("📅 *Preferred Appointment Time:*\n• Time: 5:00 PM\n\n"));
        assert!(!message.contains("• Date:"));
    }

    #[test]
    fn test_unknown_service_code_is_echoed() {
        let draft = Draft {
            service_code: "braces".to_string(),
            ..base_draft()
        };
        let message = compose_message_at(&draft, &catalog::service_catalog(), "Clinic", "now");
        assert!(message.contains("🔧 *Service Requested:*\n• braces\n\n"));
    }

    #[test]
    fn test_whitespace_notes_are_omitted() {
        let draft = Draft {
            notes: " \t\n ".to_string(),
            ..base_draft()
        };
        let message = compose_message_at(&draft, &catalog::service_catalog(), "Clinic", "now");
        assert!(!message.contains(NOTES_SECTION));
    }

    #[test]
    fn test_render_timestamp_default_format() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let at = offset.with_ymd_and_hms(2025, 3, 10, 14, 5, 9).unwrap();
        assert_eq!(
            render_timestamp(&at, DEFAULT_TIMESTAMP_FORMAT),
            "3/10/2025, 2:05:09 PM"
        );
    }

    #[test]
    fn test_localized_timestamp_follows_locale() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let at = offset.with_ymd_and_hms(2025, 3, 10, 14, 5, 9).unwrap();

        let en_us = TimestampStyle::Pattern(DEFAULT_TIMESTAMP_FORMAT.to_string()).render(&at);
        let de = TimestampStyle::Localized(Locale::de_DE).render(&at);

        assert_eq!(en_us, "3/10/2025, 2:05:09 PM");
        assert_ne!(de, en_us);
        assert!(de.contains("10.03.2025"), "got {}", de);
        assert!(de.contains("14:05:09"), "got {}", de);
    }

    #[test]
    fn test_parse_locale_names() {
        assert!(matches!(parse_locale("de-DE"), Some(Locale::de_DE)));
        assert!(matches!(parse_locale("de_DE.UTF-8@euro"), Some(Locale::de_DE)));
        assert!(matches!(parse_locale("en_US.UTF-8"), Some(Locale::en_US)));
        assert!(parse_locale("C").is_none());
        assert!(parse_locale("POSIX").is_none());
        assert!(parse_locale("xx-YY").is_none());
        assert!(parse_locale("").is_none());
    }

    #[test]
    fn test_host_style_renders_something() {
        let rendered = TimestampStyle::from_host().render(&Local::now());
        assert!(!rendered.trim().is_empty());
    }

    #[test]
    fn test_timestamp_format_validation() {
        assert!(is_valid_timestamp_format(DEFAULT_TIMESTAMP_FORMAT));
        assert!(is_valid_timestamp_format("%c"));
        assert!(!is_valid_timestamp_format("%Q"));
        assert!(!is_valid_timestamp_format(""));
    }
}
