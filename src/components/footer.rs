//! Page footer with social links and copyright.

use leptos::prelude::*;

use crate::content::{COPYRIGHT, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__socials">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        let class = format!("footer__social {}", link.modifier);
                        view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class=class
                                aria-label=link.label
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="footer__copyright">{COPYRIGHT}</div>
        </footer>
    }
}
