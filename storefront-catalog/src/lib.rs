/// Product records and the ordered catalog that holds them.
pub mod catalog;

pub use catalog::{CatalogError, Product, ProductCatalog, ProductId};
