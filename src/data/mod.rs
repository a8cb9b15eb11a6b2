mod catalog;

pub use catalog::{Catalog, CatalogError};
