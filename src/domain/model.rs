use crate::utils::error::{DeskError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// 表單欄位名稱
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Phone,
    Email,
    ServiceCode,
    PreferredDate,
    PreferredTime,
    Notes,
    Emergency,
}

impl DraftField {
    /// Fields checked on submit, in check order.
    pub const REQUIRED: [DraftField; 3] =
        [DraftField::Name, DraftField::Phone, DraftField::ServiceCode];

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Phone => "phone",
            DraftField::Email => "email",
            DraftField::ServiceCode => "service_code",
            DraftField::PreferredDate => "preferred_date",
            DraftField::PreferredTime => "preferred_time",
            DraftField::Notes => "notes",
            DraftField::Emergency => "is_emergency",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftField {
    type Err = DeskError;

    /// 同時接受網頁表單的欄位名稱 (camelCase) 與 snake_case
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(DraftField::Name),
            "phone" => Ok(DraftField::Phone),
            "email" => Ok(DraftField::Email),
            "service" | "serviceCode" | "service_code" => Ok(DraftField::ServiceCode),
            "preferredDate" | "preferred_date" => Ok(DraftField::PreferredDate),
            "preferredTime" | "preferred_time" => Ok(DraftField::PreferredTime),
            "message" | "notes" => Ok(DraftField::Notes),
            "isEmergency" | "is_emergency" | "emergency" => Ok(DraftField::Emergency),
            other => Err(DeskError::UnknownField {
                name: other.to_string(),
            }),
        }
    }
}

/// A single edit to the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Phone(String),
    Email(String),
    ServiceCode(String),
    PreferredDate(String),
    PreferredTime(String),
    Notes(String),
    Emergency(bool),
}

impl FieldUpdate {
    /// Builds an update from a raw form value. The emergency flag accepts
    /// the usual checkbox spellings; every other field takes the value as is.
    pub fn parse(field: DraftField, raw: &str) -> Result<Self> {
        let value = raw.to_string();
        Ok(match field {
            DraftField::Name => FieldUpdate::Name(value),
            DraftField::Phone => FieldUpdate::Phone(value),
            DraftField::Email => FieldUpdate::Email(value),
            DraftField::ServiceCode => FieldUpdate::ServiceCode(value),
            DraftField::PreferredDate => FieldUpdate::PreferredDate(value),
            DraftField::PreferredTime => FieldUpdate::PreferredTime(value),
            DraftField::Notes => FieldUpdate::Notes(value),
            DraftField::Emergency => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => FieldUpdate::Emergency(true),
                "false" | "off" | "no" | "0" | "" => FieldUpdate::Emergency(false),
                _ => {
                    return Err(DeskError::InvalidFieldValue {
                        field,
                        value: raw.to_string(),
                    })
                }
            },
        })
    }

    pub fn field(&self) -> DraftField {
        match self {
            FieldUpdate::Name(_) => DraftField::Name,
            FieldUpdate::Phone(_) => DraftField::Phone,
            FieldUpdate::Email(_) => DraftField::Email,
            FieldUpdate::ServiceCode(_) => DraftField::ServiceCode,
            FieldUpdate::PreferredDate(_) => DraftField::PreferredDate,
            FieldUpdate::PreferredTime(_) => DraftField::PreferredTime,
            FieldUpdate::Notes(_) => DraftField::Notes,
            FieldUpdate::Emergency(_) => DraftField::Emergency,
        }
    }
}

/// 使用者正在填寫的預約請求
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(alias = "service")]
    pub service_code: String,
    pub preferred_date: String,
    pub preferred_time: String,
    #[serde(alias = "message")]
    pub notes: String,
    pub is_emergency: bool,
}

impl Draft {
    /// Returns the draft with one field replaced.
    pub fn with(mut self, update: FieldUpdate) -> Self {
        self.apply(update);
        self
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(v) => self.name = v,
            FieldUpdate::Phone(v) => self.phone = v,
            FieldUpdate::Email(v) => self.email = v,
            FieldUpdate::ServiceCode(v) => self.service_code = v,
            FieldUpdate::PreferredDate(v) => self.preferred_date = v,
            FieldUpdate::PreferredTime(v) => self.preferred_time = v,
            FieldUpdate::Notes(v) => self.notes = v,
            FieldUpdate::Emergency(v) => self.is_emergency = v,
        }
    }

    /// Text value of a field; the emergency flag reads as `"true"`/`"false"`.
    pub fn value_of(&self, field: DraftField) -> Cow<'_, str> {
        match field {
            DraftField::Name => Cow::Borrowed(&self.name),
            DraftField::Phone => Cow::Borrowed(&self.phone),
            DraftField::Email => Cow::Borrowed(&self.email),
            DraftField::ServiceCode => Cow::Borrowed(&self.service_code),
            DraftField::PreferredDate => Cow::Borrowed(&self.preferred_date),
            DraftField::PreferredTime => Cow::Borrowed(&self.preferred_time),
            DraftField::Notes => Cow::Borrowed(&self.notes),
            DraftField::Emergency => Cow::Owned(self.is_emergency.to_string()),
        }
    }

    pub fn is_blank(&self) -> bool {
        *self == Draft::default()
    }

    pub fn has_preferred_slot(&self) -> bool {
        !self.preferred_date.is_empty() || !self.preferred_time.is_empty()
    }

    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub code: String,
    pub label: String,
}

impl ServiceEntry {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Ordered code/label table of bookable services.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceCatalog {
    entries: Vec<ServiceEntry>,
}

impl ServiceCatalog {
    pub fn new(entries: Vec<ServiceEntry>) -> Self {
        Self { entries }
    }

    pub fn label_for(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.label.as_str())
    }

    /// Catalog label, or the raw code when it is not in the catalog.
    pub fn display_label<'a>(&'a self, code: &'a str) -> &'a str {
        self.label_for(code).unwrap_or(code)
    }

    pub fn entries(&self) -> &[ServiceEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeSlotCatalog {
    labels: Vec<String>,
}

impl TimeSlotCatalog {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|slot| slot == label)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub rating: u8,
    pub text: String,
    #[serde(alias = "treatment")]
    pub treatment_label: String,
    #[serde(default, alias = "before_after")]
    pub has_before_after_media: bool,
}

impl Testimonial {
    /// Avatar placeholder: first letter of every part of the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// 五顆星評分，實心代表分數
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_accept_form_and_snake_case() {
        assert_eq!("service".parse::<DraftField>().unwrap(), DraftField::ServiceCode);
        assert_eq!("preferredDate".parse::<DraftField>().unwrap(), DraftField::PreferredDate);
        assert_eq!("preferred_time".parse::<DraftField>().unwrap(), DraftField::PreferredTime);
        assert_eq!("message".parse::<DraftField>().unwrap(), DraftField::Notes);
        assert_eq!("isEmergency".parse::<DraftField>().unwrap(), DraftField::Emergency);
        assert!(matches!(
            "insurance".parse::<DraftField>(),
            Err(DeskError::UnknownField { name }) if name == "insurance"
        ));
    }

    #[test]
    fn test_apply_updates_single_field() {
        let draft = Draft::default()
            .with(FieldUpdate::Name("Jane Doe".to_string()))
            .with(FieldUpdate::Emergency(true));

        assert_eq!(draft.name, "Jane Doe");
        assert!(draft.is_emergency);
        assert!(draft.phone.is_empty());
        assert!(!draft.is_blank());
    }

    #[test]
    fn test_value_of_borrows_text_fields() {
        let draft = Draft::default()
            .with(FieldUpdate::Name("Jane".to_string()))
            .with(FieldUpdate::Emergency(true));

        let name = draft.value_of(DraftField::Name);
        assert!(matches!(name, Cow::Borrowed("Jane")));
        assert_eq!(draft.value_of(DraftField::Phone), "");
        assert!(matches!(draft.value_of(DraftField::Emergency), Cow::Owned(ref v) if v == "true"));
    }

    #[test]
    fn test_parse_emergency_flag() {
        assert_eq!(
            FieldUpdate::parse(DraftField::Emergency, "on").unwrap(),
            FieldUpdate::Emergency(true)
        );
        assert_eq!(
            FieldUpdate::parse(DraftField::Emergency, "").unwrap(),
            FieldUpdate::Emergency(false)
        );
        assert!(FieldUpdate::parse(DraftField::Emergency, "maybe").is_err());
        assert_eq!(
            FieldUpdate::parse(DraftField::Notes, "  keep spaces ").unwrap(),
            FieldUpdate::Notes("  keep spaces ".to_string())
        );
    }

    #[test]
    fn test_draft_from_form_json() {
        let draft = Draft::from_json(
            r#"{"name":"Ana","phone":"555","service":"implants","message":"hi","isEmergency":true}"#,
        )
        .unwrap();

        assert_eq!(draft.service_code, "implants");
        assert_eq!(draft.notes, "hi");
        assert!(draft.is_emergency);
        assert!(draft.email.is_empty());
    }

    #[test]
    fn test_catalog_falls_back_to_raw_code() {
        let catalog = ServiceCatalog::new(vec![ServiceEntry::new("implants", "Dental Implants")]);
        assert_eq!(catalog.display_label("implants"), "Dental Implants");
        assert_eq!(catalog.display_label("braces"), "braces");
        assert_eq!(catalog.label_for("braces"), None);
    }

    #[test]
    fn test_testimonial_initials_and_stars() {
        let testimonial = Testimonial {
            id: 1,
            name: "Sarah  Williams".to_string(),
            location: "Downtown".to_string(),
            rating: 4,
            text: "Great".to_string(),
            treatment_label: "Veneers".to_string(),
            has_before_after_media: false,
        };
        assert_eq!(testimonial.initials(), "SW");
        assert_eq!(testimonial.stars(), "★★★★☆");
    }
}
