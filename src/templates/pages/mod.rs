pub mod shoe;
pub mod shoes;

pub use shoe::shoe_page;
pub use shoes::shoes_page;
