pub mod app;
pub mod demo;
pub mod event;
pub mod mode;
pub mod terminal;
pub mod tracing_setup;
pub mod ui;

// Re-export commonly used types
pub use app::{App, CatalogRow, DetailScreen};
pub use demo::DemoState;
pub use mode::{Mode, Screen};
