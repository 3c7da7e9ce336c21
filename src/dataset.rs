//! Education dataset model.
//!
//! Records are kept opaque: only the optional `icon` is interpreted here.
//! Everything else is forwarded untouched to the timeline widget, which reads
//! the handful of display fields it knows about.

use serde_json::Value;
use std::collections::HashSet;

/// Image shown in place of a record's timeline point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Icon {
    pub src: String,
    pub alt: String,
}

impl Icon {
    /// Reads an `icon` value. Any truthy value is an icon; `src` and `alt`
    /// that are missing, null or not strings read as empty.
    pub fn from_value(value: &Value) -> Option<Self> {
        if is_falsy(value) {
            return None;
        }

        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        let icon = Self {
            src: text("src"),
            alt: text("alt"),
        };
        if icon.src.is_empty() {
            log::warn!("icon {} has no src", value);
        }
        Some(icon)
    }
}

/// One entry in the education timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct EducationRecord {
    icon: Option<Icon>,
    raw: Value,
}

impl EducationRecord {
    /// Wraps a raw JSON element.
    pub fn from_value(raw: Value) -> Self {
        let icon = raw.get("icon").and_then(Icon::from_value);
        Self { icon, raw }
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// The untouched JSON element as received.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Returns a string field, if present and a string.
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.raw.get(key).and_then(Value::as_str)
    }

    // ===== Timeline item fields =====

    pub fn title(&self) -> Option<&str> {
        self.field_str("title")
    }

    pub fn card_title(&self) -> Option<&str> {
        self.field_str("cardTitle")
    }

    pub fn card_subtitle(&self) -> Option<&str> {
        self.field_str("cardSubtitle")
    }

    /// Detailed text; chrono also accepts an array of paragraphs.
    pub fn card_detailed_text(&self) -> Vec<&str> {
        match self.raw.get("cardDetailedText") {
            Some(Value::String(s)) => vec![s.as_str()],
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.field_str("url")
    }
}

/// The fetched response: an ordered list of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationDataset {
    pub education: Vec<EducationRecord>,
}

impl EducationDataset {
    /// Builds a dataset from a response body.
    ///
    /// A missing or non-array `education` field yields an empty dataset.
    pub fn from_value(body: Value) -> Self {
        let education = match body {
            Value::Object(mut map) => match map.remove("education") {
                Some(Value::Array(items)) => {
                    items.into_iter().map(EducationRecord::from_value).collect()
                }
                Some(other) => {
                    log::warn!("`education` is not an array ({}), rendering empty timeline", other);
                    Vec::new()
                }
                None => {
                    log::debug!("response has no `education` field, rendering empty timeline");
                    Vec::new()
                }
            },
            _ => Vec::new(),
        };

        Self { education }
    }

    pub fn len(&self) -> usize {
        self.education.len()
    }

    pub fn is_empty(&self) -> bool {
        self.education.is_empty()
    }
}

/// Returns true for the JSON values a browser would treat as falsy.
///
/// Such a body never leaves the loading state.
pub fn is_falsy(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// An image element for a record's icon, keyed by its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconElement {
    pub key: String,
    pub src: String,
    pub alt: String,
}

/// Derives the icon list: one element per record with an icon, in order.
///
/// Records sharing an icon source produce colliding keys. They are kept and
/// reported, not deduplicated.
pub fn icon_elements(records: &[EducationRecord]) -> Vec<IconElement> {
    let mut seen = HashSet::new();

    records
        .iter()
        .filter_map(EducationRecord::icon)
        .map(|icon| {
            if !seen.insert(icon.src.as_str()) {
                log::warn!("duplicate icon key {:?}", icon.src);
            }
            IconElement {
                key: icon.src.clone(),
                src: icon.src.clone(),
                alt: icon.alt.clone(),
            }
        })
        .collect()
}
