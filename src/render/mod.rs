pub mod format;
pub mod views;

pub use format::{display_type, escape_html, format_date, format_price, map_query};
