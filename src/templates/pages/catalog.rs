use chrono::NaiveDateTime;
use maud::{html, Markup};

use crate::catalog::Shoe;
use crate::templates::components::shoe_card;
use crate::templates::desktop_layout;

/// The storefront grid. Every card gets the same `now`, so the
/// "just released" cutoff is consistent across one page render.
pub fn catalog_page(shoes: &[Shoe], now: NaiveDateTime) -> Markup {
    desktop_layout(
        "Running",
        html! {
            main class="container" {
                h1 { "Running" }

                @if shoes.is_empty() {
                    p class="catalog-empty" { "No shoes in the catalog yet." }
                } @else {
                    div class="shoe-grid" {
                        @for shoe in shoes {
                            (shoe_card(shoe, now))
                        }
                    }
                }
            }
        },
    )
}
