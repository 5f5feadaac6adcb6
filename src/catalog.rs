// src/catalog.rs

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::domain::listing::{Listing, ListingError};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[source] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ListingError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Price,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "newest" => Some(SortOrder::Newest),
            "price" => Some(SortOrder::Price),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Price => "price",
        }
    }
}

/// Read-only set of listings, validated once when built.
#[derive(Debug)]
pub struct Catalog {
    listings: Vec<Listing>,
    by_slug: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut by_slug = HashMap::with_capacity(listings.len());

        for (idx, listing) in listings.iter().enumerate() {
            listing.validate()?;
            if by_slug.insert(listing.slug.clone(), idx).is_some() {
                return Err(ListingError::DuplicateSlug(listing.slug.clone()).into());
            }
        }

        Ok(Self { listings, by_slug })
    }

    /// Load a JSON array of listings from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(CatalogError::Read)?;
        let listings: Vec<Listing> = serde_json::from_str(&raw).map_err(CatalogError::Parse)?;

        let catalog = Self::new(listings)?;
        tracing::info!(
            path = %path.display(),
            listings = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn get(&self, slug: &str) -> Option<&Listing> {
        self.by_slug.get(slug).map(|&idx| &self.listings[idx])
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// All listings in the requested order. Ties fall back to name.
    pub fn sorted(&self, order: SortOrder) -> Vec<&Listing> {
        let mut out: Vec<&Listing> = self.listings.iter().collect();
        match order {
            SortOrder::Newest => out.sort_by(|a, b| {
                b.release_date
                    .cmp(&a.release_date)
                    .then_with(|| a.name.cmp(&b.name))
            }),
            SortOrder::Price => out.sort_by(|a, b| {
                a.effective_price()
                    .cmp(&b.effective_price())
                    .then_with(|| a.name.cmp(&b.name))
            }),
        }
        out
    }
}
