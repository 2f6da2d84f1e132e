use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Catalog-wide unique listing identifier
pub type ListingId = u64;

/// Geo-point used for the map view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Core property data model
///
/// Field names follow the bundled catalog JSON (`dateAdded`, `longDescription`,
/// `floorPlan`). Display text is stored raw and escaped when rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(deserialize_with = "non_negative_price")]
    pub price: f64,
    pub bedrooms: u32,
    #[serde(deserialize_with = "calendar_date")]
    pub date_added: NaiveDate,
    pub postcode: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub location: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_plan: Option<String>,
}

impl Listing {
    /// Primary thumbnail, if the listing has any images
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Long description, falling back to the short one
    pub fn full_description(&self) -> &str {
        self.long_description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(&self.description)
    }
}

/// Parse a calendar date from either `YYYY-MM-DD` or an RFC 3339 timestamp.
/// The time-of-day part of a timestamp is dropped.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

fn non_negative_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let price = f64::deserialize(deserializer)?;
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(serde::de::Error::custom(format!("invalid price: {price}")))
    }
}

fn calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid calendar date: {raw}")))
}
