//! Product collection loading.
//!
//! A catalog is read once and handed to the filter engine as a read-only
//! slice. A `.json` file may hold either an array of products or a single
//! product; a directory is walked recursively and every `.json` file under it
//! is loaded in sorted path order.
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::Product;

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Many(Vec<Product>),
    One(Box<Product>),
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from in-memory products, rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::new();
        for p in &products {
            if !seen.insert(p.id.as_str()) {
                return Err(Error::DuplicateProduct(p.id.clone()));
            }
        }
        Ok(Self { products })
    }

    pub fn load(path: &Path) -> Result<Self> {
        if path.is_dir() {
            return Self::load_directory(path);
        }
        if !path.exists() {
            return Err(Error::NotFound(path.display().to_string()));
        }
        let products = Self::read_file(path)?;
        tracing::info!(path = %path.display(), products = products.len(), "loaded catalog");
        Self::new(products)
    }

    pub fn load_directory(dir: &Path) -> Result<Self> {
        let files = Self::list_json_files(dir);
        if files.is_empty() {
            tracing::warn!(dir = %dir.display(), "no .json files found");
            return Ok(Self::default());
        }
        let mut products = Vec::new();
        for (file_index, file_path) in files.iter().enumerate() {
            tracing::debug!(file = %file_path.display(), "reading catalog file {}/{}", file_index + 1, files.len());
            products.extend(Self::read_file(file_path)?);
        }
        tracing::info!(files = files.len(), products = products.len(), "loaded catalog directory");
        Self::new(products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn read_file(path: &Path) -> Result<Vec<Product>> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let parsed: CatalogFile =
            serde_json::from_str(&content).map_err(|source| Error::Parse { path: path.to_path_buf(), source })?;
        Ok(match parsed {
            CatalogFile::Many(products) => products,
            CatalogFile::One(product) => vec![*product],
        })
    }

    fn list_json_files(root: &Path) -> Vec<PathBuf> {
        let mut json_files: Vec<PathBuf> = walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("json"))
            .map(walkdir::DirEntry::into_path)
            .collect();
        json_files.sort();
        json_files
    }
}
