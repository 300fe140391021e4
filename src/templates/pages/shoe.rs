use maud::{html, Markup};

use crate::catalog::format::{format_price, pluralize};
use crate::catalog::Shoe;
use crate::templates::desktop_layout;

/// Minimal detail page behind the card's link target.
pub fn shoe_page(shoe: &Shoe) -> Markup {
    desktop_layout(
        &shoe.name,
        html! {
            main class="container" {
                article class="shoe-detail" {
                    img class="shoe-detail-image" alt=(shoe.name) src=(shoe.image_src);
                    div class="shoe-detail-info" {
                        h1 { (shoe.name) }
                        @match shoe.sale_price {
                            Some(sale) => p class="shoe-detail-price" {
                                span class="shoe-card-price-struck" { (format_price(shoe.price)) }
                                " "
                                span class="shoe-card-sale-price" { (format_price(sale)) }
                            },
                            None => p class="shoe-detail-price" { (format_price(shoe.price)) },
                        }
                        p class="shoe-card-colors" { (pluralize("Color", shoe.num_of_colors)) }
                        a href="/" { "Back to catalog" }
                    }
                }
            }
        },
    )
}
