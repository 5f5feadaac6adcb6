// src/domain/logic.rs

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::domain::listing::Listing;

pub const DEFAULT_RECENCY_DAYS: u32 = 30;

/// Display mode of a shoe card. Exactly one applies per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    Default,
    NewRelease,
    OnSale,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::NewRelease => "new-release",
            Variant::OnSale => "on-sale",
        }
    }

    pub fn badge(self) -> Option<&'static str> {
        match self {
            Variant::Default => None,
            Variant::NewRelease => Some("Just Released!"),
            Variant::OnSale => Some("Sale"),
        }
    }
}

/// Trailing window during which a release counts as new.
/// Fixed number of days, not calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyWindow(Duration);

impl RecencyWindow {
    pub fn from_days(days: u32) -> Self {
        Self(Duration::days(i64::from(days)))
    }

    pub fn duration(&self) -> Duration {
        self.0
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self::from_days(DEFAULT_RECENCY_DAYS)
    }
}

/// True when less than `window` has elapsed between the release date
/// (taken as midnight UTC) and `now`. Future releases count as new.
pub fn is_new_release(release_date: NaiveDate, now: DateTime<Utc>, window: RecencyWindow) -> bool {
    let released_at = release_date.and_time(NaiveTime::MIN).and_utc();
    now.signed_duration_since(released_at) < window.duration()
}

/// Picks the card variant for a listing.
///
/// The order of checks is the precedence: a shoe can be both discounted and
/// recently released, in which case it is shown as on sale.
pub fn classify_variant(listing: &Listing, now: DateTime<Utc>, window: RecencyWindow) -> Variant {
    if listing.sale_price.is_some() {
        return Variant::OnSale;
    }
    if is_new_release(listing.release_date, now, window) {
        return Variant::NewRelease;
    }
    Variant::Default
}
