//! Listing catalog: store, errors and derived views

mod error;
pub mod store;
pub mod view;

pub use error::{ListingError, ListingResult, StockUpdate};
pub use store::ListingStore;
pub use view::{DEFAULT_ITEMS_PER_PAGE, Page, SearchFilters, SortOption, paginate};
