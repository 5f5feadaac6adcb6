use crate::domain::DisplayModel;
use crate::templates::{desktop_layout, shoe_card};
use maud::{html, Markup};

pub fn shoe_page(card: &DisplayModel) -> Markup {
    desktop_layout(
        &card.name,
        html! {
            main class="container shoe-detail" {
                p { a href="/" { "← All shoes" } }
                (shoe_card(card))
            }
        },
    )
}
