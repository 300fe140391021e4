pub mod format;
pub mod logic;
pub mod shoe;

pub use logic::{derive_variant, Variant};
pub use shoe::Shoe;
