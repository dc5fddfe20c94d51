#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Page-wide UI state. Provided as `RwSignal<UiState>` context by `App`.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub display_mode: DisplayMode,
}

impl UiState {
    /// Flip the display mode between dark and light.
    pub fn toggle_theme(&mut self) {
        self.display_mode = self.display_mode.toggled();
    }
}

/// Dark/light visual theme. Starts dark on every page load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Dark,
    Light,
}

impl DisplayMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Accessible label for the toggle button, naming the mode it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light mode",
            Self::Light => "Switch to dark mode",
        }
    }
}
