use crate::models::parse_calendar_date;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Sentinel property type meaning "do not filter on type"
pub const ANY_TYPE: &str = "any";

/// Search criteria for filtering the catalog
///
/// Every field is optional. The JSON shape matches what the search form
/// submits (`minPrice`, `dateAfter`, ...); a field holding a value of the
/// wrong shape deserializes as `None` instead of failing the whole request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    /// Property type, or `"any"`
    #[serde(default, rename = "type", deserialize_with = "lenient_text")]
    pub property_type: Option<String>,
    /// Minimum price, inclusive
    #[serde(default, deserialize_with = "lenient_bound")]
    pub min_price: Option<f64>,
    /// Maximum price, inclusive
    #[serde(default, deserialize_with = "lenient_bound")]
    pub max_price: Option<f64>,
    /// Minimum number of bedrooms, inclusive
    #[serde(default, deserialize_with = "lenient_bound")]
    pub min_bedrooms: Option<f64>,
    /// Maximum number of bedrooms, inclusive
    #[serde(default, deserialize_with = "lenient_bound")]
    pub max_bedrooms: Option<f64>,
    /// Earliest date added, inclusive
    #[serde(default, deserialize_with = "lenient_date")]
    pub date_after: Option<NaiveDate>,
    /// Latest date added, inclusive
    #[serde(default, deserialize_with = "lenient_date")]
    pub date_before: Option<NaiveDate>,
    /// Exact postcode, case-insensitive
    #[serde(default, deserialize_with = "lenient_text")]
    pub postcode: Option<String>,
}

impl SearchCriteria {
    /// Type filter, if one is in effect
    pub fn type_filter(&self) -> Option<&str> {
        self.property_type
            .as_deref()
            .map(str::trim)
            .filter(|kind| !kind.is_empty() && !kind.eq_ignore_ascii_case(ANY_TYPE))
    }

    /// Postcode filter, if one is in effect
    pub fn postcode_filter(&self) -> Option<&str> {
        self.postcode
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }

    /// True when no field constrains the result
    pub fn is_empty(&self) -> bool {
        self.type_filter().is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_bedrooms.is_none()
            && self.max_bedrooms.is_none()
            && self.date_after.is_none()
            && self.date_before.is_none()
            && self.postcode_filter().is_none()
    }

    /// Overlay every field that is set in `other` on top of `self`
    pub fn merged_with(mut self, other: SearchCriteria) -> Self {
        if other.property_type.is_some() {
            self.property_type = other.property_type;
        }
        self.min_price = other.min_price.or(self.min_price);
        self.max_price = other.max_price.or(self.max_price);
        self.min_bedrooms = other.min_bedrooms.or(self.min_bedrooms);
        self.max_bedrooms = other.max_bedrooms.or(self.max_bedrooms);
        self.date_after = other.date_after.or(self.date_after);
        self.date_before = other.date_before.or(self.date_before);
        if other.postcode.is_some() {
            self.postcode = other.postcode;
        }
        self
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

fn lenient_bound<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(raw.filter(|bound| bound.is_finite()))
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => parse_calendar_date(&text),
        _ => None,
    })
}
