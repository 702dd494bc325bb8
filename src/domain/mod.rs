pub mod category;
pub mod listing;

pub use category::Category;
pub use listing::{FieldLists, ListingRecord};
