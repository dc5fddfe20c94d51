//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site has a single page; `home` lays out its sections in order and
//! delegates rendering details to `components`.

pub mod home;
