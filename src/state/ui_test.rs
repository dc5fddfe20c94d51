use super::*;

// =============================================================
// DisplayMode
// =============================================================

#[test]
fn display_mode_default_is_dark() {
    assert_eq!(DisplayMode::default(), DisplayMode::Dark);
    assert!(DisplayMode::default().is_dark());
}

#[test]
fn display_mode_toggled_flips() {
    assert_eq!(DisplayMode::Dark.toggled(), DisplayMode::Light);
    assert_eq!(DisplayMode::Light.toggled(), DisplayMode::Dark);
}

#[test]
fn display_mode_toggle_label_names_target_mode() {
    assert_eq!(DisplayMode::Dark.toggle_label(), "Switch to light mode");
    assert_eq!(DisplayMode::Light.toggle_label(), "Switch to dark mode");
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_is_dark() {
    let state = UiState::default();
    assert_eq!(state.display_mode, DisplayMode::Dark);
}

#[test]
fn ui_state_toggle_once_switches_to_light() {
    let mut state = UiState::default();
    state.toggle_theme();
    assert_eq!(state.display_mode, DisplayMode::Light);
    assert!(!state.display_mode.is_dark());
}

#[test]
fn ui_state_toggle_twice_restores_original() {
    for start in [DisplayMode::Dark, DisplayMode::Light] {
        let mut state = UiState { display_mode: start };
        state.toggle_theme();
        state.toggle_theme();
        assert_eq!(state.display_mode, start);
    }
}
