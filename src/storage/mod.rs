pub mod error;
pub mod product;
pub mod store;

pub use error::{DecodeError, FileAction, PersistError, PriceError, StoreError};
pub use product::{Price, Product};
pub use store::{
    Inventory, Listing, LoadSummary, ProductUpdate, SkippedLine, DEFAULT_INVENTORY_FILE,
};
