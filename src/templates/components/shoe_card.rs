use chrono::NaiveDateTime;
use maud::{html, Markup};

use crate::catalog::format::{format_price, pluralize};
use crate::catalog::{derive_variant, Shoe, Variant};
use crate::templates::components::spacer;

/// A single catalog card: image, name, price, color count, and at most
/// one promotional badge. The whole card is wrapped in a link to the
/// shoe's detail page.
///
/// `now` is the evaluation time for the "just released" window; the
/// caller captures it once so a grid of cards agrees on what "new" means.
pub fn shoe_card(shoe: &Shoe, now: NaiveDateTime) -> Markup {
    let is_sale = shoe.is_sale();
    let variant = derive_variant(shoe.sale_price, shoe.release_date, now);

    html! {
        a class="shoe-card-link" href=(shoe.href()) {
            article class="shoe-card" data-variant=(variant.as_str()) {
                div class="shoe-card-image-wrapper" {
                    img class="shoe-card-image" alt="" src=(shoe.image_src);
                }
                (spacer(12))
                div class="shoe-card-row" {
                    h3 class="shoe-card-name" { (shoe.name) }
                    span class=(price_class(is_sale)) { (format_price(shoe.price)) }
                }
                div class="shoe-card-row" {
                    p class="shoe-card-colors" { (pluralize("Color", shoe.num_of_colors)) }
                    @if let Some(sale) = shoe.sale_price {
                        span class="shoe-card-sale-price" { (format_price(sale)) }
                    }
                }
                (flag(variant))
            }
        }
    }
}

/// The original price is struck through whenever a sale price exists,
/// even though the sale price is shown in its own element.
fn price_class(is_sale: bool) -> &'static str {
    if is_sale {
        "shoe-card-price shoe-card-price-struck"
    } else {
        "shoe-card-price"
    }
}

fn flag(variant: Variant) -> Markup {
    match (variant.flag_class(), variant.flag_label()) {
        (Some(class), Some(label)) => html! {
            div class=(class) { (label) }
        },
        _ => html! {},
    }
}
