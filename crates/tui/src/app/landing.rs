//! Login and sign-up forms shown before the main shell.

use engine::{ValidationErrors, forms};

use super::{
    App, Screen, Section,
    form::{FieldDef, FieldKind, FormBuffer, FormEdit, FormView},
};
use crate::{error::Result, ui::keymap::AppAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingMode {
    Login,
    Signup,
}

#[derive(Debug)]
pub struct LandingState {
    pub mode: LandingMode,
    pub login: FormBuffer,
    pub login_view: FormView,
    pub signup: FormBuffer,
    pub signup_view: FormView,
}

impl LandingState {
    pub fn new() -> Self {
        Self {
            mode: LandingMode::Login,
            login: FormBuffer::default(),
            login_view: FormView::new(vec![
                FieldDef::new(forms::login::EMAIL, "Email", FieldKind::Text),
                FieldDef::new(forms::login::PASSWORD, "Password", FieldKind::Secret),
            ]),
            signup: FormBuffer::default(),
            signup_view: FormView::new(vec![
                FieldDef::new(forms::signup::FULL_NAME, "Full name", FieldKind::Text),
                FieldDef::new(forms::signup::EMAIL, "Email", FieldKind::Text),
                FieldDef::new(forms::signup::PASSWORD, "Password", FieldKind::Secret),
                FieldDef::new(forms::signup::CONFIRM, "Confirm password", FieldKind::Secret),
                FieldDef::new(
                    forms::signup::AGREE,
                    "I agree to the terms and privacy policy",
                    FieldKind::Checkbox,
                ),
            ]),
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            LandingMode::Login => LandingMode::Signup,
            LandingMode::Signup => LandingMode::Login,
        };
    }

    /// Returns `true` once the active form validates.
    pub fn handle(&mut self, action: AppAction) -> bool {
        let (view, buffer, schema) = match self.mode {
            LandingMode::Login => (&mut self.login_view, &mut self.login, forms::login()),
            LandingMode::Signup => (&mut self.signup_view, &mut self.signup, forms::signup()),
        };
        if view.handle(action, buffer) != FormEdit::Submit {
            return false;
        }
        match schema.validate(&buffer.values) {
            Ok(()) => true,
            Err(errors) => {
                buffer.errors = errors;
                false
            }
        }
    }

    pub fn active_errors(&self) -> &ValidationErrors {
        match self.mode {
            LandingMode::Login => &self.login.errors,
            LandingMode::Signup => &self.signup.errors,
        }
    }
}

impl Default for LandingState {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub(crate) async fn handle_landing_key(&mut self, action: AppAction) -> Result<()> {
        if action == AppAction::Command('s') {
            self.state.landing.toggle_mode();
            return Ok(());
        }
        if self.state.landing.handle(action) {
            tracing::info!(mode = ?self.state.landing.mode, "signed in");
            self.state.landing.login.clear();
            self.state.landing.signup.clear();
            self.state.screen = Screen::Main;
            self.switch_section(Section::Dashboard).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(state: &mut LandingState, text: &str) {
        for ch in text.chars() {
            state.handle(AppAction::Input(ch));
        }
    }

    #[test]
    fn login_requires_valid_credentials() {
        let mut state = LandingState::new();
        assert!(!state.handle(AppAction::Submit));
        assert_eq!(
            state.active_errors().get(forms::login::EMAIL),
            Some("Email is required")
        );

        type_str(&mut state, "jd@example.com");
        state.handle(AppAction::NextField);
        type_str(&mut state, "12345");
        assert!(!state.handle(AppAction::Submit));
        assert_eq!(
            state.active_errors().get(forms::login::PASSWORD),
            Some("Invalid password")
        );

        type_str(&mut state, "6");
        assert!(state.handle(AppAction::Submit));
    }

    #[test]
    fn signup_needs_terms_accepted() {
        let mut state = LandingState::new();
        state.toggle_mode();
        type_str(&mut state, "Jane Doe");
        state.handle(AppAction::NextField);
        type_str(&mut state, "jane@example.com");
        state.handle(AppAction::NextField);
        type_str(&mut state, "secret1");
        state.handle(AppAction::NextField);
        type_str(&mut state, "secret1");
        assert!(!state.handle(AppAction::Submit));
        assert!(state.active_errors().contains(forms::signup::AGREE));

        state.handle(AppAction::NextField);
        state.handle(AppAction::Input(' '));
        assert!(state.handle(AppAction::Submit));
    }
}
