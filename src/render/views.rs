use crate::favourites::FavouritesSet;
use crate::models::{Listing, ListingId};
use crate::render::format::{display_type, escape_html, format_date, format_price, map_query};
use std::fmt::Write;

/// "1 Property Found" / "N Properties Found"
pub fn results_header(count: usize) -> String {
    let noun = if count == 1 { "Property" } else { "Properties" };
    format!("{count} {noun} Found")
}

/// One result card; `♥` marks favourites
pub fn result_card(listing: &Listing, is_favourite: bool) -> String {
    let heart = if is_favourite { "♥" } else { "♡" };
    let mut card = String::new();
    let _ = writeln!(
        card,
        "{heart} #{id} [{kind}] {title}",
        id = listing.id,
        kind = display_type(&listing.kind),
        title = escape_html(&listing.title),
    );
    let _ = writeln!(card, "   {}", escape_html(&listing.location));
    let _ = writeln!(card, "   {}", escape_html(&listing.description));
    let _ = writeln!(
        card,
        "   Price: {}  Bedrooms: {}  Added: {}",
        format_price(listing.price),
        listing.bedrooms,
        format_date(listing.date_added),
    );
    if let Some(thumbnail) = listing.thumbnail() {
        let _ = writeln!(card, "   Image: {thumbnail}");
    }
    card
}

/// Result grid, or the empty state
pub fn results<'a>(
    listings: impl IntoIterator<Item = &'a Listing>,
    favourites: &FavouritesSet,
) -> String {
    let listings: Vec<&Listing> = listings.into_iter().collect();
    if listings.is_empty() {
        return "No properties found\nTry adjusting your search criteria to find more properties.\n"
            .to_string();
    }

    let mut out = format!("{}\n\n", results_header(listings.len()));
    for listing in listings {
        out.push_str(&result_card(listing, favourites.contains(listing.id)));
        out.push('\n');
    }
    out
}

/// Favourites sidebar
pub fn favourites_panel(favourites: &FavouritesSet) -> String {
    let mut out = String::from("Favourite Properties\n");
    if favourites.is_empty() {
        out.push_str("No favourites yet\n");
        return out;
    }

    for listing in favourites {
        let _ = writeln!(
            out,
            "  #{} {} - {}",
            listing.id,
            escape_html(&listing.title),
            format_price(listing.price),
        );
    }
    out
}

/// Full detail view for one listing
pub fn detail(listing: &Listing, is_favourite: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", escape_html(&listing.title));
    let _ = writeln!(out, "{}", escape_html(&listing.location));
    let _ = writeln!(out, "{}", format_price(listing.price));
    let _ = writeln!(out, "{}", if is_favourite { "♥ Saved" } else { "♡ Save" });
    out.push('\n');

    let _ = writeln!(out, "Type:       {}", display_type(&listing.kind));
    let _ = writeln!(out, "Bedrooms:   {}", listing.bedrooms);
    let _ = writeln!(out, "Date Added: {}", format_date(listing.date_added));
    let _ = writeln!(out, "Postcode:   {}", escape_html(&listing.postcode));
    out.push('\n');

    let _ = writeln!(out, "{}", escape_html(&listing.description));
    out.push('\n');

    let _ = writeln!(out, "Full Description");
    let _ = writeln!(out, "{}", escape_html(listing.full_description()));
    out.push('\n');

    let _ = writeln!(out, "Gallery");
    let title = escape_html(&listing.title);
    for (index, image) in listing.images.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} ({} - Image {})", index + 1, image, title, index + 1);
    }
    out.push('\n');

    let _ = writeln!(out, "Floor Plan");
    match &listing.floor_plan {
        Some(plan) => {
            let _ = writeln!(out, "  {plan}");
        }
        None => {
            let _ = writeln!(out, "  Floor plan not available for this property.");
        }
    }
    out.push('\n');

    let _ = writeln!(out, "Map: {}", map_query(listing));
    out
}

/// Detail view for an id that is not in the catalog
pub fn not_found(id: ListingId) -> String {
    format!("Property Not Found\nThe property you're looking for ({id}) doesn't exist.\n")
}
