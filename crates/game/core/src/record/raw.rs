//! Loosely typed source records.
use std::collections::BTreeMap;

/// A JSON-like value as delivered by a data source.
///
/// Sources disagree on field types (numbers as strings, generations as
/// labels or numbers), so every raw field is kept in this shape until
/// normalization decides how to read it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum RawValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<RawValue>),
    Object(BTreeMap<String, RawValue>),
}

impl RawValue {
    /// Numeric reading of the value.
    ///
    /// Numbers pass through, numeric text is parsed, everything else
    /// (including blank text) is NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    f64::NAN
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
            _ => f64::NAN,
        }
    }

    /// Textual reading of scalar values; `None` for null, lists and objects.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                Some(format!("{}", *n as i64))
            }
            Self::Number(n) => Some(n.to_string()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Null | Self::List(_) | Self::Object(_) => None,
        }
    }

    /// Non-negative integral reading, used for identifiers.
    pub fn to_id(&self) -> Option<u32> {
        match self {
            Self::Number(n) if n.fract() == 0.0 && *n >= 0.0 && *n <= u32::MAX as f64 => {
                Some(*n as u32)
            }
            Self::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for RawValue {
    fn from(n: u32) -> Self {
        Self::Number(n.into())
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// One creature as found in a dataset file or remote response.
///
/// Every field is optional; missing fields read as [`RawValue::Null`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawCreature {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: RawValue,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: RawValue,
    #[cfg_attr(feature = "serde", serde(default))]
    pub height: RawValue,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight: RawValue,
    #[cfg_attr(feature = "serde", serde(default))]
    pub types: RawValue,
    #[cfg_attr(feature = "serde", serde(default))]
    pub generation: RawValue,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "RawValue::is_null")
    )]
    pub img_url: RawValue,
}
