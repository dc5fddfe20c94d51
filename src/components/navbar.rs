//! Floating top navigation with section anchors and the theme toggle.

use leptos::prelude::*;

use crate::content::{BRAND, NAV_ITEMS};
use crate::state::ui::UiState;

/// Navbar pinned to the top of the viewport.
///
/// The toggle shows a sun while dark mode is on and a moon otherwise.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let mode = move || ui.with(|s| s.display_mode);

    let on_toggle = move |_| ui.update(UiState::toggle_theme);

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="#home" class="navbar__brand">
                    {BRAND}
                    <span class="navbar__brand-dot">"."</span>
                </a>
                <div class="navbar__links">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a href=item.href() class="navbar__link">
                                    {item.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <button
                    class="navbar__theme"
                    class:navbar__theme--dark=move || mode().is_dark()
                    title=move || mode().toggle_label()
                    aria-label=move || mode().toggle_label()
                    on:click=on_toggle
                >
                    {move || if mode().is_dark() { "\u{2600}" } else { "\u{263e}" }}
                </button>
            </div>
        </nav>
    }
}
