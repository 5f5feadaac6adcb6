pub mod errors;
pub mod html;
pub mod json;

pub use errors::{error_response, ResultResp};

pub use html::html_response;
pub use json::json_response;
