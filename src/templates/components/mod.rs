use maud::{html, Markup};

pub mod error;
pub mod shoe_card;

pub use error::html_error_response;
pub use shoe_card::shoe_card;

/// Fixed-size gap between the card's image and its text block.
pub fn spacer(size: u32) -> Markup {
    html! {
        div style=(format!("min-width: {size}px; min-height: {size}px;")) {}
    }
}
