pub mod catalog;
pub mod error;
pub mod model;
pub mod recipe;

// Re-export commonly used types
pub use catalog::{seed_catalog, ComponentItem, ComponentSection};
pub use error::{CatalogError, Result};
pub use model::{match_range, CatalogModel};
pub use recipe::{DemoRecipe, ListStyle, StackAxis};
