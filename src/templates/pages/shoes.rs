// templates/pages/shoes.rs

use crate::catalog::SortOrder;
use crate::domain::DisplayModel;
use crate::templates::{desktop_layout, shoe_card};
use maud::{html, Markup};

const SORT_OPTIONS: [SortOrder; 2] = [SortOrder::Newest, SortOrder::Price];

/// Grid of every shoe in the catalog.
pub fn shoes_page(cards: &[DisplayModel], sort: SortOrder) -> Markup {
    desktop_layout(
        "All Shoes",
        html! {
            main class="container" {
                div class="shoe-index__header" {
                    h1 { "Running" }
                    div class="sort" {
                        "Sort: "
                        @for option in SORT_OPTIONS {
                            a href=(format!("/?sort={}", option.as_str()))
                              class=[(option == sort).then_some("active")] {
                                (sort_label(option))
                            }
                        }
                    }
                }

                @if cards.is_empty() {
                    p { "No shoes yet." }
                } @else {
                    section class="shoe-grid" {
                        @for card in cards {
                            (shoe_card(card))
                        }
                    }
                }
            }
        },
    )
}

fn sort_label(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Newest => "Newest Releases",
        SortOrder::Price => "Price",
    }
}
