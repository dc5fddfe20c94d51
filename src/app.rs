//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::content::OWNER_NAME;
use crate::pages::home::HomePage;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Root application component.
///
/// Provides the page-wide `UiState` context and keeps the `<html>` dark
/// marker in sync with the current display mode.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    Effect::new(move || dark_mode::apply(ui.with(|s| s.display_mode)));

    let show_blobs = move || ui.with(|s| s.display_mode.is_dark());

    view! {
        <Title text=format!("{OWNER_NAME} | Portfolio")/>
        <Meta name="description" content="Full Stack Developer portfolio: skills, projects, and contact."/>

        <div class="page">
            <Show when=show_blobs>
                <div class="page__blobs" aria-hidden="true">
                    <div class="page__blob page__blob--purple"></div>
                    <div class="page__blob page__blob--blue"></div>
                </div>
            </Show>
            <Navbar/>
            <HomePage/>
            <Footer/>
        </div>
    }
}
