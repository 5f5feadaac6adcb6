use crate::domain::{DisplayModel, Variant};
use maud::{html, Markup};

/// Clickable card for one shoe, linking to its detail page.
pub fn shoe_card(vm: &DisplayModel) -> Markup {
    let article_class = format!("shoe-card shoe-card--{}", vm.variant.as_str());
    let price_class = if vm.strikethrough {
        "price price--struck"
    } else {
        "price"
    };

    html! {
        a class="shoe-card-link" href=(vm.href) {
            article class=(article_class) {
                div class="shoe-card__image" {
                    img alt="" src=(vm.image_src);
                    (badge(vm))
                }
                div class="shoe-card__row" {
                    h3 class="shoe-card__name" { (vm.name) }
                    span class=(price_class) { (vm.primary_price) }
                }
                div class="shoe-card__row" {
                    p class="shoe-card__colors" { (vm.color_label) }
                    @if let Some(sale) = &vm.secondary_price {
                        span class="sale-price" { (sale) }
                    }
                }
            }
        }
    }
}

/// Badge text comes from the view model; the variant only picks the color.
pub fn badge(vm: &DisplayModel) -> Markup {
    let Some(label) = vm.badge else {
        return html! {};
    };
    let class = match vm.variant {
        Variant::OnSale => "badge badge--sale",
        Variant::NewRelease | Variant::Default => "badge badge--new",
    };

    html! {
        div class=(class) { (label) }
    }
}
