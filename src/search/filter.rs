use crate::models::Listing;
use crate::search::types::SearchCriteria;
use tracing::debug;

impl SearchCriteria {
    /// Check a single listing against every constraint that is set
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(kind) = self.type_filter() {
            if !listing.kind.eq_ignore_ascii_case(kind) {
                return false;
            }
        }

        if self.min_price.is_some_and(|min| listing.price < min)
            || self.max_price.is_some_and(|max| listing.price > max)
        {
            return false;
        }

        let bedrooms = f64::from(listing.bedrooms);
        if self.min_bedrooms.is_some_and(|min| bedrooms < min)
            || self.max_bedrooms.is_some_and(|max| bedrooms > max)
        {
            return false;
        }

        if self.date_after.is_some_and(|after| listing.date_added < after)
            || self.date_before.is_some_and(|before| listing.date_added > before)
        {
            return false;
        }

        if let Some(code) = self.postcode_filter() {
            if !listing.postcode.trim().eq_ignore_ascii_case(code) {
                return false;
            }
        }

        true
    }
}

/// Filter the catalog down to the listings matching `criteria`
///
/// Input order is preserved. Missing or empty criteria return every listing.
pub fn filter_listings<'a>(
    catalog: &'a [Listing],
    criteria: Option<&SearchCriteria>,
) -> Vec<&'a Listing> {
    let criteria = match criteria {
        Some(criteria) if !criteria.is_empty() => criteria,
        _ => return catalog.iter().collect(),
    };

    let matched: Vec<&Listing> = catalog
        .iter()
        .filter(|listing| criteria.matches(listing))
        .collect();

    debug!(
        "Filter kept {} of {} listings",
        matched.len(),
        catalog.len()
    );
    matched
}
