pub mod clock;
pub mod display;
pub mod format;
pub mod listing;
pub mod logic;

pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub use clock::FixedClock;
pub use display::DisplayModel;
pub use listing::Listing;
pub use logic::{RecencyWindow, Variant};
