pub mod catalog;
pub mod inbox;

pub use catalog::CatalogSource;
pub use inbox::ContactInbox;
