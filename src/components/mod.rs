//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and sections. Only `navbar` (theme) and
//! `contact_form` (submission) read or write state; the rest render static
//! content from `crate::content`.

pub mod contact_form;
pub mod footer;
pub mod navbar;
pub mod project_card;
pub mod section;
