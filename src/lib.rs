//! # portfolio
//!
//! Leptos + WASM single-page personal portfolio.
//!
//! This crate contains the page shell, presentational components, the theme
//! and contact-form state machines, and the form-relay client used by the
//! contact section. Browser-only code is gated behind the `csr` feature so
//! state and wire handling can be exercised natively with `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
