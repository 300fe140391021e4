// src/catalog/logic.rs

use chrono::NaiveDateTime;

use crate::catalog::format::is_new_shoe;

/// The three mutually exclusive promotional states of a catalog card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    OnSale,
    NewRelease,
    Default,
}

impl Variant {
    /// Stable string form, rendered as the card's `data-variant` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }

    /// Badge text, or `None` when no badge is shown.
    pub fn flag_label(self) -> Option<&'static str> {
        match self {
            Variant::OnSale => Some("Sale"),
            Variant::NewRelease => Some("Just released!"),
            Variant::Default => None,
        }
    }

    /// Fixed class set for the badge. Each promotional variant carries its
    /// own accent color; the default variant renders no badge at all.
    pub fn flag_class(self) -> Option<&'static str> {
        match self {
            Variant::OnSale => Some("flag flag-sale"),
            Variant::NewRelease => Some("flag flag-new-release"),
            Variant::Default => None,
        }
    }
}

/// Determines the promotional variant of a shoe card.
/// The order of checks determines the precedence of the promotions.
///
/// A shoe can be both discounted and released within the last month, but
/// the discount always wins: "on sale" outranks "just released". That is
/// a fixed business rule, not a tunable heuristic.
pub fn derive_variant(
    sale_price: Option<i64>,
    release_date: NaiveDateTime,
    now: NaiveDateTime,
) -> Variant {
    // Presence check, not a value check: a $0.00 sale price is still a sale.
    if sale_price.is_some() {
        return Variant::OnSale;
    }
    if is_new_shoe(release_date, now) {
        return Variant::NewRelease;
    }
    Variant::Default
}
