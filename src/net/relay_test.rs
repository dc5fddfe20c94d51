use super::*;

fn relay() -> Web3FormsRelay {
    Web3FormsRelay::new(RelayConfig {
        endpoint: "https://relay.example.test/submit".to_owned(),
        access_key: "key-123".to_owned(),
    })
}

fn input() -> ContactFormInput {
    ContactFormInput {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Hi".to_owned(),
    }
}

// =============================================================
// Web3FormsRelay
// =============================================================

#[test]
fn form_fields_carry_inputs_and_access_key() {
    let relay = relay();
    let input = input();
    assert_eq!(
        relay.form_fields(&input),
        [("name", "Ada"), ("email", "ada@example.com"), ("message", "Hi"), ("access_key", "key-123")]
    );
}

#[test]
fn endpoint_comes_from_config() {
    assert_eq!(relay().endpoint(), "https://relay.example.test/submit");
}

#[cfg(not(feature = "csr"))]
#[test]
fn post_is_unavailable_outside_browser() {
    let result = futures::executor::block_on(relay().post(&input()));
    assert_eq!(result, Err(RelayError::Unavailable));
}

// =============================================================
// interpret
// =============================================================

#[test]
fn interpret_success_is_delivered() {
    let resp = RelayResponse { success: true, message: Some("ok".to_owned()) };
    assert_eq!(interpret(Ok(resp)), SubmissionOutcome::Delivered);
}

#[test]
fn interpret_refusal_keeps_relay_message() {
    let resp = RelayResponse { success: false, message: Some("Invalid email".to_owned()) };
    assert_eq!(interpret(Ok(resp)), SubmissionOutcome::Rejected("Invalid email".to_owned()));
}

#[test]
fn interpret_refusal_without_message_uses_generic_text() {
    let resp = RelayResponse { success: false, message: None };
    assert_eq!(interpret(Ok(resp)), SubmissionOutcome::Rejected(GENERIC_FAILURE_MESSAGE.to_owned()));
}

#[test]
fn interpret_errors_are_failed() {
    assert_eq!(interpret(Err(RelayError::Transport("offline".to_owned()))), SubmissionOutcome::Failed);
    assert_eq!(interpret(Err(RelayError::Decode("eof".to_owned()))), SubmissionOutcome::Failed);
    assert_eq!(interpret(Err(RelayError::Unavailable)), SubmissionOutcome::Failed);
}
