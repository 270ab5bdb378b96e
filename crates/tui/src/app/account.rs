//! Dashboard, profile, settings and support screens.

use std::time::{Duration, Instant};

use api_types::{dashboard::AccountSummary, profile::Profile};
use engine::{Outcome, OutcomeState, forms};

use super::{
    App, AppEvent, ToastLevel,
    form::{FieldDef, FieldKind, FormBuffer, FormEdit, FormView},
    message_for_error,
};
use crate::{client::ClientResult, error::Result, ui::keymap::AppAction};

const PASSWORD_SAVE_DELAY: Duration = Duration::from_millis(800);
const CONTACT_SEND_DELAY: Duration = Duration::from_millis(900);
const NOTICE_WINDOW: Duration = Duration::from_secs(4);

pub const PASSWORD_CHANGED_MESSAGE: &str = "Password changed successfully.";
pub const CONTACT_SENT_MESSAGE: &str = "Sent";

#[derive(Debug, Default)]
pub struct DashboardState {
    pub summary: Option<AccountSummary>,
    pub show_account: bool,
    pub show_balance: bool,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn cached(summary: Option<AccountSummary>) -> Self {
        Self {
            summary,
            ..Self::default()
        }
    }
}

#[derive(Debug)]
pub struct ProfileState {
    pub profile: Profile,
    pub account_number: String,
    pub account_type: String,
    pub editing: bool,
    pub form: FormBuffer,
    pub view: FormView,
    pub error: Option<String>,
}

impl ProfileState {
    pub fn cached(profile: Option<Profile>) -> Self {
        use forms::profile::*;
        Self {
            profile: profile.unwrap_or_else(default_profile),
            account_number: "1234567890".to_string(),
            account_type: "Savings".to_string(),
            editing: false,
            form: FormBuffer::default(),
            view: FormView::new(vec![
                FieldDef::new(NAME, "Name", FieldKind::Text),
                FieldDef::new(EMAIL, "Email", FieldKind::Text),
                FieldDef::new(PHONE, "Phone", FieldKind::Text).max_len(14),
            ]),
            error: None,
        }
    }

    pub fn start_edit(&mut self) {
        use forms::profile::*;
        self.form.clear();
        self.form.values.set(NAME, self.profile.name.clone());
        self.form.values.set(EMAIL, self.profile.email.clone());
        self.form.values.set(PHONE, self.profile.phone.clone());
        self.view.reset_focus();
        self.editing = true;
    }

    /// Validated, trimmed profile; errors are kept on the form otherwise.
    pub fn draft(&mut self) -> Option<Profile> {
        use forms::profile::*;
        if let Err(errors) = forms::profile().validate(&self.form.values) {
            self.form.errors = errors;
            return None;
        }
        Some(Profile {
            name: self.form.values.get(NAME).trim().to_string(),
            email: self.form.values.get(EMAIL).trim().to_string(),
            phone: self.form.values.get(PHONE).trim().to_string(),
        })
    }
}

fn default_profile() -> Profile {
    Profile {
        name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        phone: "08012345678".to_string(),
    }
}

#[derive(Debug)]
pub struct SettingsState {
    pub form: FormBuffer,
    pub view: FormView,
    /// Only the first validation message is shown.
    pub error: Option<String>,
    pub saving: bool,
    pub notice: Outcome,
}

impl SettingsState {
    pub fn new() -> Self {
        use forms::password::*;
        Self {
            form: FormBuffer::default(),
            view: FormView::new(vec![
                FieldDef::new(CURRENT, "Current password", FieldKind::Secret),
                FieldDef::new(NEW, "New password", FieldKind::Secret),
                FieldDef::new(CONFIRM, "Confirm password", FieldKind::Secret),
            ]),
            error: None,
            saving: false,
            notice: Outcome::default(),
        }
    }

    /// Handles a key on the password form. Returns `true` when a save
    /// should start.
    pub fn handle(&mut self, action: AppAction) -> bool {
        if self.saving {
            return false;
        }
        match self.view.handle(action, &mut self.form) {
            FormEdit::Changed => {
                self.error = None;
                self.notice.clear();
                false
            }
            FormEdit::Submit => match forms::password_change().validate(&self.form.values) {
                Ok(()) => {
                    self.error = None;
                    self.saving = true;
                    true
                }
                Err(errors) => {
                    self.error = errors.first().map(str::to_string);
                    false
                }
            },
            FormEdit::Moved | FormEdit::Ignored => false,
        }
    }

    pub fn saved(&mut self, now: Instant) {
        self.saving = false;
        self.form.clear();
        self.view.reset_focus();
        self.notice.show(
            OutcomeState::Success(PASSWORD_CHANGED_MESSAGE.to_string()),
            now,
            NOTICE_WINDOW,
        );
    }

    pub fn tick(&mut self, now: Instant) {
        self.notice.tick(now);
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct SupportState {
    pub form: FormBuffer,
    pub view: FormView,
    pub sending: bool,
    pub notice: Outcome,
}

impl SupportState {
    pub fn new() -> Self {
        use forms::contact::*;
        Self {
            form: FormBuffer::default(),
            view: FormView::new(vec![
                FieldDef::new(NAME, "Name", FieldKind::Text),
                FieldDef::new(EMAIL, "Email", FieldKind::Text),
                FieldDef::new(MESSAGE, "Message", FieldKind::Text).max_len(500),
            ]),
            sending: false,
            notice: Outcome::default(),
        }
    }

    /// Returns `true` when the message passed validation and is being sent.
    pub fn handle(&mut self, action: AppAction) -> bool {
        if self.sending {
            return false;
        }
        if self.view.handle(action, &mut self.form) != FormEdit::Submit {
            return false;
        }
        match forms::contact().validate(&self.form.values) {
            Ok(()) => {
                self.sending = true;
                true
            }
            Err(errors) => {
                self.form.errors = errors;
                false
            }
        }
    }

    pub fn sent(&mut self, now: Instant) {
        self.sending = false;
        self.form.clear();
        self.view.reset_focus();
        self.notice.show(
            OutcomeState::Success(CONTACT_SENT_MESSAGE.to_string()),
            now,
            NOTICE_WINDOW,
        );
    }

    pub fn tick(&mut self, now: Instant) {
        self.notice.tick(now);
    }
}

impl Default for SupportState {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub(crate) async fn load_dashboard(&mut self) {
        match self.client.dashboard().await {
            Ok(summary) => {
                self.state.dashboard.error = None;
                self.state.dashboard.summary = Some(summary.clone());
                self.update_prefs(|p| p.dashboard = Some(summary));
            }
            Err(err) => {
                tracing::warn!("failed to load dashboard: {err}");
                self.state.dashboard.error = Some(message_for_error(&err));
                if self.state.dashboard.summary.is_none() {
                    self.state.dashboard.summary = self.prefs.get().dashboard.clone();
                }
            }
        }
    }

    pub(crate) async fn handle_dashboard_key(&mut self, action: AppAction) -> Result<()> {
        let dashboard = &mut self.state.dashboard;
        match action {
            AppAction::Input('a') => dashboard.show_account = !dashboard.show_account,
            AppAction::Input('b') => dashboard.show_balance = !dashboard.show_balance,
            AppAction::Input('r') => self.load_dashboard().await,
            _ => {}
        }
        Ok(())
    }

    pub(crate) async fn load_profile(&mut self) {
        let profile = self.client.profile().await;
        let summary = self.client.dashboard().await;
        match (profile, summary) {
            (Ok(profile), Ok(summary)) => {
                let state = &mut self.state.profile;
                state.error = None;
                state.account_number = summary.account_number;
                state.account_type = summary.account_type;
                state.profile = profile;
            }
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!("failed to load profile: {err}");
                self.state.profile.error = Some(message_for_error(&err));
            }
        }
    }

    pub(crate) async fn handle_profile_key(&mut self, action: AppAction) -> Result<()> {
        let state = &mut self.state.profile;
        if !state.editing {
            match action {
                AppAction::Input('e') => state.start_edit(),
                AppAction::Input('r') => self.load_profile().await,
                _ => {}
            }
            return Ok(());
        }
        if action == AppAction::Cancel {
            state.editing = false;
            state.form.clear();
            return Ok(());
        }
        if state.view.handle(action, &mut state.form) == FormEdit::Submit {
            if let Some(profile) = state.draft() {
                self.save_profile(profile).await;
            }
        }
        Ok(())
    }

    /// Writes the profile, then mirrors the name onto the dashboard record
    /// and caches both locally. Editing ends whether or not the writes land.
    async fn save_profile(&mut self, profile: Profile) {
        let result = self.push_profile(&profile).await;

        self.state.profile.editing = false;
        self.state.profile.form.clear();
        match result {
            Ok(summary) => {
                tracing::info!("profile updated");
                self.state.profile.error = None;
                self.state.profile.profile = profile.clone();
                self.state.dashboard.summary = Some(summary.clone());
                self.update_prefs(|p| {
                    p.profile = Some(profile);
                    p.dashboard = Some(summary);
                });
                self.state.toast(ToastLevel::Success, "Profile updated.");
            }
            Err(err) => {
                tracing::warn!("failed to update profile: {err}");
                self.state.profile.error = Some(message_for_error(&err));
            }
        }
    }

    async fn push_profile(&self, profile: &Profile) -> ClientResult<AccountSummary> {
        self.client.put_profile(profile).await?;
        let mut summary = self.client.dashboard().await?;
        summary.user_name = profile.name.clone();
        self.client.put_dashboard(&summary).await
    }

    pub(crate) fn handle_settings_key(&mut self, action: AppAction) {
        if action == AppAction::Command('t') {
            let enabled = !self.prefs.get().email_notifications;
            self.update_prefs(|p| p.email_notifications = enabled);
            return;
        }
        if self.state.settings.handle(action) {
            self.spawn_delayed(PASSWORD_SAVE_DELAY, AppEvent::PasswordSaved);
        }
    }

    pub(crate) fn handle_support_key(&mut self, action: AppAction) {
        if self.state.support.handle(action) {
            tracing::info!("contact message queued");
            self.spawn_delayed(CONTACT_SEND_DELAY, AppEvent::ContactSent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(settings: &mut SettingsState, text: &str) {
        for ch in text.chars() {
            settings.handle(AppAction::Input(ch));
        }
    }

    #[test]
    fn password_form_shows_only_the_first_error() {
        let mut settings = SettingsState::new();
        assert!(!settings.handle(AppAction::Submit));
        assert_eq!(settings.error.as_deref(), Some("Current password is required"));
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let mut settings = SettingsState::new();
        type_str(&mut settings, "oldpass");
        settings.handle(AppAction::NextField);
        type_str(&mut settings, "secret1");
        settings.handle(AppAction::NextField);
        type_str(&mut settings, "secret2");
        assert!(!settings.handle(AppAction::Submit));
        assert_eq!(settings.error.as_deref(), Some("Passwords must match"));

        settings.handle(AppAction::Backspace);
        assert!(settings.error.is_none());
    }

    #[test]
    fn saved_password_clears_form_and_notice_expires() {
        let mut settings = SettingsState::new();
        type_str(&mut settings, "oldpass");
        settings.handle(AppAction::NextField);
        type_str(&mut settings, "secret1");
        settings.handle(AppAction::NextField);
        type_str(&mut settings, "secret1");
        assert!(settings.handle(AppAction::Submit));
        assert!(settings.saving);
        assert!(!settings.handle(AppAction::Input('x')));

        let now = Instant::now();
        settings.saved(now);
        assert!(settings.form.values.is_blank());
        assert_eq!(settings.notice.state().message(), Some(PASSWORD_CHANGED_MESSAGE));

        settings.tick(now + NOTICE_WINDOW);
        assert!(settings.notice.state().is_none());
    }

    #[test]
    fn contact_form_needs_a_real_message() {
        let mut support = SupportState::new();
        for ch in "Ada".chars() {
            support.handle(AppAction::Input(ch));
        }
        support.handle(AppAction::NextField);
        for ch in "ada@example.com".chars() {
            support.handle(AppAction::Input(ch));
        }
        support.handle(AppAction::NextField);
        for ch in "help".chars() {
            support.handle(AppAction::Input(ch));
        }
        assert!(!support.handle(AppAction::Submit));
        assert_eq!(
            support.form.errors.get(forms::contact::MESSAGE),
            Some("Message must be 8+ characters.")
        );

        for ch in " me now".chars() {
            support.handle(AppAction::Input(ch));
        }
        assert!(support.handle(AppAction::Submit));
        support.sent(Instant::now());
        assert_eq!(support.notice.state().message(), Some(CONTACT_SENT_MESSAGE));
        assert!(support.form.values.is_blank());
    }

    #[test]
    fn profile_edit_round_trip() {
        let mut profile = ProfileState::cached(None);
        profile.start_edit();
        profile.form.values.set(forms::profile::EMAIL, "not-an-email");
        assert!(profile.draft().is_none());
        assert_eq!(
            profile.form.errors.get(forms::profile::EMAIL),
            Some("Enter a valid email.")
        );

        profile.form.values.set(forms::profile::EMAIL, " jd@example.com ");
        let draft = profile.draft().unwrap();
        assert_eq!(draft.email, "jd@example.com");
        assert_eq!(draft.name, "John Doe");
    }
}
