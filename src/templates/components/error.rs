use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Body of an HTML error page.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="container error" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to all shoes" } }
            }
        },
    )
}
