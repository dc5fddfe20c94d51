//! Contact form: three controlled inputs, status line, and submit button.
//!
//! DESIGN
//! ======
//! The component owns its `ContactState` signal and hands it to
//! `net::submit::submit_contact` on submit. Native `required` and
//! `type="email"` attributes stop invalid input before the submit event
//! fires. The button is disabled while a request is in flight, and the whole
//! form is disabled when no relay access key was configured at build time.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::net::submit::submit_contact;
#[cfg(feature = "csr")]
use crate::util::timer::BrowserTimer;
use crate::net::relay::Web3FormsRelay;
use crate::state::contact::ContactState;

#[component]
pub fn ContactForm() -> impl IntoView {
    let contact = RwSignal::new(ContactState::default());
    let relay = StoredValue::new(match Web3FormsRelay::from_build_env() {
        Ok(relay) => Some(relay),
        Err(e) => {
            log::error!("contact form disabled: {e}");
            None
        }
    });
    let configured = relay.with_value(Option::is_some);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            let Some(relay) = relay.get_value() else {
                return;
            };
            leptos::task::spawn_local(async move {
                if let Err(e) = submit_contact(&contact, &relay, &BrowserTimer).await {
                    log::debug!("submission not started: {e}");
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (contact, relay);
        }
    };

    let status_text = move || contact.with(|c| c.status.message().to_owned());
    let is_success = move || contact.with(|c| c.status.is_success());
    let submit_disabled = move || !configured || contact.with(|c| c.status.is_sending());

    view! {
        <form class="contact-form" on:submit=on_submit>
            <input
                required
                type="text"
                placeholder="Name"
                name="name"
                class="contact-form__input"
                prop:value=move || contact.with(|c| c.form.name.clone())
                on:input=move |ev| contact.update(|c| c.form.name = event_target_value(&ev))
            />
            <input
                required
                type="email"
                placeholder="Email"
                name="email"
                class="contact-form__input"
                prop:value=move || contact.with(|c| c.form.email.clone())
                on:input=move |ev| contact.update(|c| c.form.email = event_target_value(&ev))
            />
            <textarea
                required
                placeholder="Message"
                rows="4"
                name="message"
                class="contact-form__input"
                prop:value=move || contact.with(|c| c.form.message.clone())
                on:input=move |ev| contact.update(|c| c.form.message = event_target_value(&ev))
            ></textarea>

            <div class="contact-form__status-row">
                <p class="contact-form__status" class:contact-form__status--success=is_success>
                    {status_text}
                </p>
            </div>

            <Show when=move || !configured>
                <p class="contact-form__notice">"The contact form is not available right now."</p>
            </Show>

            <button type="submit" class="contact-form__submit" prop:disabled=submit_disabled>
                "Send Message"
            </button>
        </form>
    }
}
