//! Item catalog with a case-insensitive name index.
//!
//! The catalog is built once at startup, either from the built-in movie
//! list or from a `name,description` CSV file, and never changes afterwards.

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

const BUILTIN_MOVIES: [(&str, &str); 6] = [
    (
        "Inception",
        "A thief who steals corporate secrets using dream-sharing technology.",
    ),
    (
        "Interstellar",
        "A team travels through a wormhole in space to ensure humanity's survival.",
    ),
    ("The Dark Knight", "Batman faces the Joker in Gotham City."),
    (
        "Shutter Island",
        "A U.S. Marshal investigates a psychiatric facility on a remote island.",
    ),
    (
        "The Martian",
        "An astronaut becomes stranded on Mars and must survive alone.",
    ),
    (
        "Gravity",
        "Two astronauts are stranded in space after an accident.",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Lowercased name -> position in the item list.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    positions: HashMap<String, usize>,
}

impl NameIndex {
    fn build(items: &[Item]) -> Result<Self, CatalogError> {
        let mut positions = HashMap::with_capacity(items.len());

        for (idx, item) in items.iter().enumerate() {
            if item.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { row: idx + 1 });
            }

            if positions.insert(item.name.to_lowercase(), idx).is_some() {
                return Err(CatalogError::DuplicateName(item.name.clone()));
            }
        }

        Ok(Self { positions })
    }

    pub fn get(&self, query: &str) -> Option<usize> {
        self.positions.get(&query.to_lowercase()).copied()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.positions.len()
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    index: NameIndex,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let index = NameIndex::build(&items)?;

        Ok(Catalog { items, index })
    }

    pub fn builtin() -> Self {
        let items = BUILTIN_MOVIES
            .iter()
            .map(|(name, description)| Item::new(*name, *description))
            .collect();

        Self::new(items).expect("built-in catalog is valid")
    }

    /// Load a catalog from a CSV file with a `name,description` header.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        let now = Instant::now();
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut items = vec![];
        for record in csv_reader.deserialize::<Item>() {
            items.push(record?);
        }

        log::debug!(
            "took {}ms to read csv",
            now.elapsed().as_micros() as f64 / 1000.0
        );

        let catalog = Self::new(items)?;
        log::info!("loaded {} items from {}", catalog.len(), path.display());

        Ok(catalog)
    }

    /// Case-insensitive exact lookup of an item position.
    pub fn resolve(&self, query: &str) -> Option<usize> {
        self.index.get(query)
    }

    pub fn get(&self, idx: usize) -> Option<&Item> {
        self.items.get(idx)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
