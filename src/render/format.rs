use crate::models::Listing;
use chrono::NaiveDate;

/// Format price in Sri Lankan Rupees, e.g. `Rs. 28,500,000` or `Rs. 1,250.5`
pub fn format_price(price: f64) -> String {
    if price <= 0.0 || !price.is_finite() {
        return "Price on request".to_string();
    }

    // Up to three fraction digits, trailing zeros dropped
    let fixed = format!("{price:.3}");
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    format!("Rs. {grouped}")
}

/// Long-form date, e.g. `5 July 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Escape display text before it goes into markup
pub fn escape_html(text: &str) -> String {
    html_escape::encode_safe(text).into_owned()
}

/// Map query for a listing: `lat,lng` when known, else the encoded location
pub fn map_query(listing: &Listing) -> String {
    match listing.coordinates {
        Some(point) => format!("{},{}", point.lat, point.lng),
        None => urlencoding::encode(&listing.location).into_owned(),
    }
}

/// Capitalise the first letter of a property type for display
pub fn display_type(kind: &str) -> String {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
