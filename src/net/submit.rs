//! One contact-form submission, end to end.
//!
//! ARCHITECTURE
//! ============
//! `begin` -> one `FormRelay::post` -> `interpret` -> `settle` -> sleep ->
//! `expire`. The driver is generic over its store, relay, and timer so the
//! `ContactForm` component runs it with a signal, `Web3FormsRelay`, and
//! `BrowserTimer`, while tests plug in scripted fakes.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use super::relay::{FormRelay, interpret};
use crate::state::contact::{ContactError, ContactState, ContactStore, STATUS_RESET_AFTER};
use crate::util::timer::Timer;

/// Run one submission against `store`.
///
/// Returns once the status has been reset (or the store is gone). Exactly one
/// request is issued per accepted call; nothing is retried.
///
/// # Errors
///
/// Returns `ContactError` without touching the network when the submission
/// is refused by `ContactState::begin`.
pub async fn submit_contact<S, R, T>(store: &S, relay: &R, timer: &T) -> Result<(), ContactError>
where
    S: ContactStore,
    R: FormRelay,
    T: Timer,
{
    let Some(started) = store.update_state(ContactState::begin) else {
        return Ok(());
    };
    let input = started?;

    let outcome = interpret(relay.post(&input).await);
    let Some(token) = store.update_state(|state| state.settle(outcome)) else {
        return Ok(());
    };

    timer.sleep(STATUS_RESET_AFTER).await;
    store.update_state(|state| state.expire(token));
    Ok(())
}
