// src/domain/display.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::format::{format_price, pluralize};
use crate::domain::listing::Listing;
use crate::domain::logic::{classify_variant, RecencyWindow, Variant};

/// A ViewModel for one shoe card.
/// Derived from a listing on every render, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayModel {
    pub variant: Variant,

    // === Link & imagery ===
    pub href: String,
    pub name: String,
    pub image_src: String,

    // === Pricing ===
    /// Always the base price.
    pub primary_price: String,
    /// Set only for on-sale cards; the base price is struck through.
    pub strikethrough: bool,
    /// The sale price, shown next to the colors.
    pub secondary_price: Option<String>,

    pub badge: Option<&'static str>,
    pub color_label: String,
}

impl DisplayModel {
    pub fn from_listing(listing: &Listing, now: DateTime<Utc>, window: RecencyWindow) -> Self {
        let variant = classify_variant(listing, now, window);

        let secondary_price = match variant {
            Variant::OnSale => listing.sale_price.map(format_price),
            Variant::NewRelease | Variant::Default => None,
        };

        Self {
            variant,
            href: listing.href(),
            name: listing.name.clone(),
            image_src: listing.image_src.clone(),
            primary_price: format_price(listing.price),
            strikethrough: variant == Variant::OnSale,
            secondary_price,
            badge: variant.badge(),
            color_label: pluralize("Color", listing.num_of_colors),
        }
    }
}
