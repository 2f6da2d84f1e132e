pub mod set;
pub mod store;

pub use set::FavouritesSet;
pub use store::{FavouritesStore, DEFAULT_FAVOURITES_KEY};
