#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn dark_class_is_plain_dark() {
    assert_eq!(DARK_CLASS, "dark");
}

#[test]
fn apply_is_noop_but_callable() {
    apply(DisplayMode::Dark);
    apply(DisplayMode::Light);
}
