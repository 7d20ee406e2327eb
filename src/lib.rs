//! Fridge - Terminal recipe catalog browser
//!
//! Loads a bounded catalog of recipe records from a bundled JSON asset (or a
//! built-in fallback list) and exposes a live, case-insensitive substring
//! search over the recipe titles. The TUI renders the visible subset as a
//! grid of cards; Enter on a card opens the recipe's page in the system
//! browser.
//!
//! # Example
//!
//! ```no_run
//! use fridge::{catalog, search::SearchSession, CatalogSource};
//!
//! let records = catalog::load(&CatalogSource::Bundled);
//! let mut session = SearchSession::new(records);
//!
//! session.set_query("雞");
//! for record in session.visible() {
//!     println!("{} -> {}", record.title, record.link);
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod search;
pub mod tui;

// Re-export main types
pub use catalog::{CatalogSource, RecipeRecord};
pub use error::{FridgeError, Result};
pub use search::{filter, filter_indices, SearchSession};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base origin the original application prefixes onto each record's link.
pub const DEFAULT_BASE_ORIGIN: &str = "https://icook.tw";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the catalog is loaded from
    pub source: CatalogSource,
    /// Origin prepended to a record's relative link when opening it
    pub base_origin: String,
    /// TUI event loop tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: CatalogSource::Bundled,
            base_origin: DEFAULT_BASE_ORIGIN.to_string(),
            tick_rate_ms: 50,
        }
    }
}
