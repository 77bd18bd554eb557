mod catalog;

pub use catalog::{CatalogProvider, ReleaseCatalog, StreamEntry};
