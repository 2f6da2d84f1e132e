pub mod filter;
pub mod types;

pub use filter::filter_listings;
pub use types::{SearchCriteria, ANY_TYPE};
