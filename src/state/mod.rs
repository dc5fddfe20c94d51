//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui` for the theme, `contact` for the form)
//! so each component depends only on the small model it renders.

pub mod contact;
pub mod ui;
