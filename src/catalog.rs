//! Recipe catalog: record shape and loader
//!
//! The loader never propagates failures. A missing, unreadable, or malformed
//! resource yields an empty catalog and the screen renders an empty grid;
//! the absorbed failure is written to the log and nowhere else.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FridgeError, Result};
use crate::logging;

/// Fixed name of the bundled catalog resource
pub const RESOURCE_NAME: &str = "recipes_all.json";

/// One catalog entry. Immutable once constructed; `link` and `image` are
/// opaque to everything but the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub title: String,
    pub link: String,
    pub image: String,
}

impl RecipeRecord {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            image: image.into(),
        }
    }
}

/// Where the catalog comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// The bundled resource, `assets/recipes_all.json` next to the executable
    #[default]
    Bundled,
    /// An explicit file path
    Path(PathBuf),
    /// The built-in literal table (no links)
    Builtin,
}

impl CatalogSource {
    /// Short name used in log entries
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Bundled => RESOURCE_NAME.to_string(),
            CatalogSource::Path(p) => p.display().to_string(),
            CatalogSource::Builtin => "<builtin>".to_string(),
        }
    }
}

/// Built-in fallback table: (title, image) pairs, links synthesized empty.
const BUILTIN_RECIPES: &[(&str, &str)] = &[
    ("番茄炒蛋", "https://imageproxy.icook.network/fit/800/tomato-egg.jpg"),
    ("三杯雞", "https://imageproxy.icook.network/fit/800/three-cup-chicken.jpg"),
    ("滷肉飯", "https://imageproxy.icook.network/fit/800/braised-pork-rice.jpg"),
    ("麻婆豆腐", "https://imageproxy.icook.network/fit/800/mapo-tofu.jpg"),
    ("蔥爆牛肉", "https://imageproxy.icook.network/fit/800/scallion-beef.jpg"),
    ("清蒸鱸魚", "https://imageproxy.icook.network/fit/800/steamed-bass.jpg"),
    ("蚵仔煎", "https://imageproxy.icook.network/fit/800/oyster-omelette.jpg"),
    ("珍珠奶茶", "https://imageproxy.icook.network/fit/800/bubble-tea.jpg"),
];

/// Load the catalog, absorbing every failure.
///
/// This is the only loader entry point the application uses: whatever goes
/// wrong underneath, the caller receives a valid (possibly empty) list.
pub fn load(source: &CatalogSource) -> Vec<RecipeRecord> {
    match try_load(source) {
        Ok(records) => {
            logging::log_catalog_loaded(&source.describe(), records.len());
            records
        }
        Err(e) => {
            debug_assert!(e.is_absorbed_by_loader());
            logging::log_catalog_failure(&source.describe(), &e.to_string());
            Vec::new()
        }
    }
}

/// Fallible inner loader. Only `ResourceOpen` and `ResourceParse` can come
/// out of here; `load` absorbs both.
fn try_load(source: &CatalogSource) -> Result<Vec<RecipeRecord>> {
    match source {
        CatalogSource::Bundled => load_file(&bundled_path()),
        CatalogSource::Path(path) => load_file(path),
        CatalogSource::Builtin => Ok(builtin_records()),
    }
}

fn load_file(path: &Path) -> Result<Vec<RecipeRecord>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| FridgeError::ResourceOpen(path.to_path_buf(), e))?;
    serde_json::from_str(&json).map_err(|e| FridgeError::ResourceParse(path.to_path_buf(), e))
}

/// The built-in literal catalog, in table order
pub fn builtin_records() -> Vec<RecipeRecord> {
    BUILTIN_RECIPES
        .iter()
        .map(|&(title, image)| RecipeRecord::new(title, "", image))
        .collect()
}

/// Resolve the bundled resource: `assets/recipes_all.json` next to the
/// executable, falling back to the working directory for `cargo run`.
fn bundled_path() -> PathBuf {
    let exe_relative = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .map(|dir| dir.join("assets").join(RESOURCE_NAME));

    match exe_relative {
        Some(path) if path.is_file() => path,
        _ => PathBuf::from("assets").join(RESOURCE_NAME),
    }
}
