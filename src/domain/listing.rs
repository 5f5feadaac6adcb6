// src/domain/listing.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single shoe in the catalog, as it arrives from the catalog file.
/// Prices are in minor currency units (cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub slug: String,
    pub name: String,
    pub image_src: String,

    pub price: u64,
    /// `None` means "not discounted". Zero is a real sale price.
    #[serde(default)]
    pub sale_price: Option<u64>,

    pub release_date: NaiveDate,
    pub num_of_colors: u32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error("invalid slug '{0}': use lowercase letters, digits and '-'")]
    InvalidSlug(String),

    #[error("listing '{slug}' has a blank {field}")]
    BlankField { slug: String, field: &'static str },

    #[error("duplicate slug '{0}'")]
    DuplicateSlug(String),
}

impl Listing {
    /// The price a buyer actually pays.
    pub fn effective_price(&self) -> u64 {
        self.sale_price.unwrap_or(self.price)
    }

    /// Route to this listing's detail page.
    pub fn href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }

    /// Boundary check run before a listing ever reaches the renderer.
    pub fn validate(&self) -> Result<(), ListingError> {
        if !is_valid_slug(&self.slug) {
            return Err(ListingError::InvalidSlug(self.slug.clone()));
        }
        if self.name.trim().is_empty() {
            return Err(ListingError::BlankField {
                slug: self.slug.clone(),
                field: "name",
            });
        }
        if self.image_src.trim().is_empty() {
            return Err(ListingError::BlankField {
                slug: self.slug.clone(),
                field: "imageSrc",
            });
        }
        Ok(())
    }
}

pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
