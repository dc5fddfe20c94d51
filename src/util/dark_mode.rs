//! Dark mode marker on the document root.
//!
//! Adds or removes the `dark` class on the `<html>` element so every styled
//! descendant picks the matching palette. Nothing is persisted; each page
//! load starts from `DisplayMode::default()`. Requires a browser environment.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::ui::DisplayMode;

/// Class toggled on `<html>` while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(mode: DisplayMode) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            let result = if mode.is_dark() {
                class_list.add_1(DARK_CLASS)
            } else {
                class_list.remove_1(DARK_CLASS)
            };
            if let Err(e) = result {
                log::debug!("failed to update root class list: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = mode;
    }
}
