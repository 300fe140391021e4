use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One shoe in the catalog. Rows come from the `shoes` table; the same
/// shape deserializes straight from the seed file (data/shoes.json).
///
/// Prices are in cents. `sale_price` is `Some` only while the shoe is
/// discounted; a `Some(0)` is a real (free) sale price, so everything
/// downstream checks presence, never the value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shoe {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: i64,
    pub sale_price: Option<i64>,
    pub release_date: NaiveDateTime,
    pub num_of_colors: i64,
}

impl Shoe {
    /// Target of the card's navigational wrapper.
    pub fn href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }

    pub fn is_sale(&self) -> bool {
        self.sale_price.is_some()
    }
}
