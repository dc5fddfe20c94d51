//! Full-height page section with a reveal-on-load animation.

use leptos::prelude::*;

#[component]
pub fn Section(
    id: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() { "section".to_owned() } else { format!("section {class}") };

    view! {
        <section id=id class=class>
            {children()}
        </section>
    }
}
