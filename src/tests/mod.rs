pub mod utils;

mod format_tests;
mod router_tests;

#[test]
fn crate_is_named_for_the_catalog() {
    assert_eq!(env!("CARGO_PKG_NAME"), "sole_catalog");
}
