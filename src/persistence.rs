// File: src/persistence.rs
use crate::config::SearchConfig;
use crate::core::engine::SearchEngine;
use crate::core::types::Product;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// The products endpoint answers `{ "data": [...] }`; exported files are
/// sometimes a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Envelope { data: Vec<Product> },
    Bare(Vec<Product>),
}

/// Binary snapshot of a loaded engine.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    config: SearchConfig,
    products: Vec<Product>,
}

pub fn load_catalog_json(path: &Path) -> Result<Vec<Product>> {
    let reader = BufReader::new(File::open(path)?);
    let file: CatalogFile = serde_json::from_reader(reader)?;
    let products = match file {
        CatalogFile::Envelope { data } => data,
        CatalogFile::Bare(products) => products,
    };
    tracing::info!(path = %path.display(), products = products.len(), "read catalog json");
    Ok(products)
}

/// Writes the engine's config and catalog to `path` atomically: the snapshot
/// goes to a temp file in the same directory which is then renamed over the
/// target.
pub fn save_snapshot(engine: &SearchEngine, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let snapshot = Snapshot {
        config: engine.config().clone(),
        products: engine.products().to_vec(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, &snapshot)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;

    tracing::info!(path = %path.display(), products = snapshot.products.len(), "snapshot saved");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<SearchEngine> {
    let reader = BufReader::new(File::open(path)?);
    let snapshot: Snapshot = bincode::deserialize_from(reader)?;

    let mut engine = SearchEngine::with_config(snapshot.config)?;
    engine.set_catalog(snapshot.products);
    Ok(engine)
}
