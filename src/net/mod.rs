//! Networking modules for the contact form relay.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the relay wire schema, `relay` performs the HTTP call and
//! interprets its result, and `submit` drives one full submission against a
//! `ContactStore`.

pub mod relay;
pub mod submit;
pub mod types;
