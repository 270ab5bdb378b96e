use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use engine::{
    AppStateStore, CommitReceipt, EngineError, FlowKind, PendingCommit, SubmitPolicy,
    TransactionSubmitter, UiLock,
};
use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc;

use crate::{
    client::{Client, ClientError},
    config::AppConfig,
    error::{AppError, Result},
    local_state::FilePreferences,
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

pub use account::{DashboardState, ProfileState, SettingsState, SupportState};
pub use cards::{CardsFocus, CardsState};
pub use form::FormView;
pub use history::HistoryState;
pub use landing::{LandingMode, LandingState};
pub use payments::{PaymentState, PinButton};

mod account;
mod cards;
mod form;
mod history;
mod landing;
mod payments;

const TOAST_WINDOW: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Transfer,
    Airtime,
    Transactions,
    Cards,
    Profile,
    Settings,
    Support,
    Help,
    Privacy,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Section::Dashboard,
        Section::Transfer,
        Section::Airtime,
        Section::Transactions,
        Section::Cards,
        Section::Profile,
        Section::Settings,
        Section::Support,
        Section::Help,
        Section::Privacy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Transfer => "Transfer",
            Self::Airtime => "Airtime",
            Self::Transactions => "Transactions",
            Self::Cards => "Cards",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::Support => "Support",
            Self::Help => "Help",
            Self::Privacy => "Privacy",
        }
    }

    /// `F1`..`F10` in tab order.
    pub fn from_function_key(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    fn offset(self, step: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let next = (self.index() as isize + step).rem_euclid(len);
        Self::ALL[next as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    expires_at: Instant,
}

/// Results of background work, delivered back to the UI loop.
#[derive(Debug)]
pub enum AppEvent {
    Committed {
        kind: FlowKind,
        result: std::result::Result<CommitReceipt, EngineError>,
    },
    PasswordSaved,
    ContactSent,
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub section: Section,
    pub landing: LandingState,
    pub dashboard: DashboardState,
    pub transfer: PaymentState,
    pub airtime: PaymentState,
    pub history: HistoryState,
    pub cards: CardsState,
    pub profile: ProfileState,
    pub settings: SettingsState,
    pub support: SupportState,
    pub page_scroll: u16,
    pub email_notifications: bool,
    pub toast: Option<ToastState>,
    pub ui_lock: UiLock,
    pub base_url: String,
}

impl AppState {
    pub fn payment(&self, kind: FlowKind) -> &PaymentState {
        match kind {
            FlowKind::Transfer => &self.transfer,
            FlowKind::Airtime => &self.airtime,
        }
    }

    fn payment_mut(&mut self, kind: FlowKind) -> &mut PaymentState {
        match kind {
            FlowKind::Transfer => &mut self.transfer,
            FlowKind::Airtime => &mut self.airtime,
        }
    }

    fn toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(ToastState {
            message: message.into(),
            level,
            expires_at: Instant::now() + TOAST_WINDOW,
        });
    }
}

pub struct App {
    client: Client,
    submitter: TransactionSubmitter<Client>,
    prefs: AppStateStore<FilePreferences>,
    pub state: AppState,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    screen_area: Rect,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url)?;
        let policy = SubmitPolicy {
            latency: config.latency(),
            timezone: config.timezone()?,
        };
        let submitter = TransactionSubmitter::new(client.clone(), policy);
        let prefs = AppStateStore::open(FilePreferences::new(&config.state_path))?;
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let ui_lock = UiLock::new();
        let cached = prefs.get().clone();
        let state = AppState {
            screen: Screen::Landing,
            section: Section::Dashboard,
            landing: LandingState::new(),
            dashboard: DashboardState::cached(cached.dashboard),
            transfer: PaymentState::transfer(ui_lock.clone()),
            airtime: PaymentState::airtime(ui_lock.clone()),
            history: HistoryState::default(),
            cards: CardsState::new(),
            profile: ProfileState::cached(cached.profile),
            settings: SettingsState::new(),
            support: SupportState::new(),
            page_scroll: 0,
            email_notifications: cached.email_notifications,
            toast: None,
            ui_lock,
            base_url: config.base_url.clone(),
        };

        Ok(Self {
            client,
            submitter,
            prefs,
            state,
            events_tx,
            events_rx,
            screen_area: Rect::default(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::AppTerminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            let mut area = self.screen_area;
            terminal
                .draw(|frame| {
                    area = frame.area();
                    ui::render(frame, &self.state);
                })
                .map_err(|err| AppError::Terminal(err.to_string()))?;
            self.screen_area = area;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key).await?
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            self.drain_events();
            self.tick(Instant::now());
        }

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let action = map_key(key);
        if action == AppAction::Quit {
            self.should_quit = true;
            return Ok(());
        }
        if self.state.screen == Screen::Landing {
            return self.handle_landing_key(action).await;
        }

        let target = match action {
            AppAction::GoTo(section) => Some(section),
            AppAction::NextSection => Some(self.state.section.offset(1)),
            AppAction::PrevSection => Some(self.state.section.offset(-1)),
            _ => None,
        };
        if let Some(section) = target {
            // Navigation is frozen while a modal holds the lock.
            if !self.state.ui_lock.is_held() {
                self.switch_section(section).await?;
            }
            return Ok(());
        }

        match self.state.section {
            Section::Dashboard => self.handle_dashboard_key(action).await?,
            Section::Transfer => self.handle_payment_key(FlowKind::Transfer, action),
            Section::Airtime => self.handle_payment_key(FlowKind::Airtime, action),
            Section::Transactions => self.handle_history_key(action).await?,
            Section::Cards => self.handle_cards_key(action).await?,
            Section::Profile => self.handle_profile_key(action).await?,
            Section::Settings => self.handle_settings_key(action),
            Section::Support => self.handle_support_key(action),
            Section::Help | Section::Privacy => self.handle_page_key(action),
        }
        Ok(())
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let kind = match self.state.section {
            Section::Transfer => FlowKind::Transfer,
            Section::Airtime => FlowKind::Airtime,
            _ => return,
        };
        let modal = ui::components::pin_modal::modal_area(self.screen_area);
        let payment = self.state.payment_mut(kind);
        if payment.flow.pin().is_open() && !modal.contains(Position::new(mouse.column, mouse.row)) {
            payment.backdrop_click();
        }
    }

    pub(crate) async fn switch_section(&mut self, section: Section) -> Result<()> {
        tracing::debug!(from = ?self.state.section, to = ?section, "switch section");
        self.state.section = section;
        self.state.page_scroll = 0;
        match section {
            Section::Dashboard => self.load_dashboard().await,
            Section::Transactions => {
                if self.state.history.stale || self.state.history.items.is_empty() {
                    self.load_transactions().await;
                }
            }
            Section::Cards => {
                if self.state.cards.items.is_empty() {
                    self.load_cards().await;
                }
            }
            Section::Profile => self.load_profile().await,
            _ => {}
        }
        Ok(())
    }

    fn handle_payment_key(&mut self, kind: FlowKind, action: AppAction) {
        match self.state.payment_mut(kind).handle(action) {
            payments::PaymentStep::None => {}
            payments::PaymentStep::Commit(pending) => self.spawn_commit(kind, pending),
            payments::PaymentStep::Failed(err) => {
                self.state.toast(ToastLevel::Error, err.user_message());
            }
        }
    }

    /// Runs the commit off the UI loop; the screen keeps showing
    /// "Processing..." until [`AppEvent::Committed`] arrives.
    fn spawn_commit(&self, kind: FlowKind, pending: PendingCommit) {
        tracing::info!(?kind, amount = pending.amount.naira(), "committing transaction");
        let submitter = self.submitter.clone();
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let result = submitter.commit(pending).await;
            let _ = events.send(AppEvent::Committed { kind, result });
        });
    }

    /// Sends `event` after `delay`; stands in for a backend call.
    fn spawn_delayed(&self, delay: Duration, event: AppEvent) {
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(event);
        });
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event, Instant::now());
        }
    }

    fn apply_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Committed { kind, result } => {
                let shown = match result {
                    Ok(receipt) => {
                        self.state.history.stale = true;
                        Ok(receipt.message)
                    }
                    Err(err) => Err(err),
                };
                self.state.payment_mut(kind).flow.finish(shown, now);
            }
            AppEvent::PasswordSaved => self.state.settings.saved(now),
            AppEvent::ContactSent => self.state.support.sent(now),
        }
    }

    fn tick(&mut self, now: Instant) {
        self.state.transfer.flow.tick(now);
        self.state.airtime.flow.tick(now);
        self.state.settings.tick(now);
        self.state.support.tick(now);
        if self.state.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.state.toast = None;
        }
    }

    fn handle_page_key(&mut self, action: AppAction) {
        if self.state.ui_lock.is_held() {
            return;
        }
        match action {
            AppAction::Down | AppAction::Input('j') => {
                self.state.page_scroll = self.state.page_scroll.saturating_add(1);
            }
            AppAction::Up | AppAction::Input('k') => {
                self.state.page_scroll = self.state.page_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn update_prefs(&mut self, change: impl FnOnce(&mut engine::Preferences)) {
        if let Err(err) = self.prefs.update(change) {
            tracing::error!("failed to save preferences: {err}");
            self.state.toast(ToastLevel::Error, err.user_message());
        }
        self.state.email_notifications = self.prefs.get().email_notifications;
    }
}

fn message_for_error(err: &ClientError) -> String {
    match err {
        ClientError::NotFound => "Not found.".to_string(),
        ClientError::Validation(message) => format!("Rejected: {message}"),
        ClientError::Server(message) => format!("Server error: {message}"),
        ClientError::Transport(_) => "Bank service unreachable. Try again.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use api_types::transaction::{TransactionRecord, TransactionType};
    use crossterm::event::{KeyCode, KeyModifiers};
    use engine::{CancelReason, PinState};

    use super::*;

    fn test_app() -> App {
        let dir = std::env::temp_dir().join(format!("skybank_app_{}", uuid::Uuid::new_v4()));
        let config = AppConfig {
            state_path: dir.join("state.json").display().to_string(),
            ..AppConfig::default()
        };
        let mut app = App::new(config).unwrap();
        app.state.screen = Screen::Main;
        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(press(KeyCode::Char(ch))).await.unwrap();
        }
    }

    async fn open_airtime_pin(app: &mut App) {
        app.state.section = Section::Airtime;
        type_str(app, "08012345678").await;
        app.handle_key(press(KeyCode::Tab)).await.unwrap();
        app.handle_key(press(KeyCode::Right)).await.unwrap();
        app.handle_key(press(KeyCode::Tab)).await.unwrap();
        type_str(app, "500").await;
        app.handle_key(press(KeyCode::Enter)).await.unwrap();
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[tokio::test]
    async fn open_pin_blocks_section_navigation() {
        let mut app = test_app();
        open_airtime_pin(&mut app).await;
        assert!(app.state.ui_lock.is_held());

        app.handle_key(press(KeyCode::F(9))).await.unwrap();
        assert_eq!(app.state.section, Section::Airtime);

        app.handle_key(press(KeyCode::Esc)).await.unwrap();
        assert!(!app.state.ui_lock.is_held());
        app.handle_key(press(KeyCode::F(9))).await.unwrap();
        assert_eq!(app.state.section, Section::Help);
    }

    #[tokio::test]
    async fn click_outside_pin_modal_cancels_challenge() {
        let mut app = test_app();
        app.screen_area = Rect::new(0, 0, 80, 24);
        open_airtime_pin(&mut app).await;
        assert!(app.state.airtime.flow.pin().is_open());

        let modal = ui::components::pin_modal::modal_area(app.screen_area);
        app.handle_mouse(left_click(modal.x + 1, modal.y + 1));
        assert!(app.state.airtime.flow.pin().is_open());

        app.handle_mouse(left_click(0, 0));
        assert_eq!(
            app.state.airtime.flow.pin().state(),
            PinState::Cancelled(CancelReason::Backdrop)
        );
        assert!(!app.state.ui_lock.is_held());
    }

    #[test]
    fn committed_event_shows_outcome_and_marks_history_stale() {
        let mut app = test_app();
        let now = Instant::now();
        let receipt = CommitReceipt {
            record: TransactionRecord {
                id: 1,
                kind: TransactionType::Debit,
                amount: 500,
                description: "Airtime".to_string(),
                date: chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            },
            message: "Airtime purchase successful".to_string(),
        };
        app.apply_event(
            AppEvent::Committed {
                kind: FlowKind::Airtime,
                result: Ok(receipt),
            },
            now,
        );
        assert!(app.state.history.stale);
        assert_eq!(
            app.state.airtime.flow.outcome().message(),
            Some("Airtime purchase successful")
        );

        app.tick(now + Duration::from_secs(5));
        assert!(app.state.airtime.flow.outcome().is_none());
    }

    #[test]
    fn failed_commit_keeps_history_fresh() {
        let mut app = test_app();
        app.apply_event(
            AppEvent::Committed {
                kind: FlowKind::Transfer,
                result: Err(EngineError::StoreWriteFailed("down".to_string())),
            },
            Instant::now(),
        );
        assert!(!app.state.history.stale);
        assert_eq!(
            app.state.transfer.flow.outcome().message(),
            Some(engine::error::STORE_WRITE_MESSAGE)
        );
    }

    #[test]
    fn function_keys_follow_tab_order() {
        assert_eq!(Section::from_function_key(1), Some(Section::Dashboard));
        assert_eq!(Section::from_function_key(10), Some(Section::Privacy));
        assert_eq!(Section::from_function_key(0), None);
        assert_eq!(Section::from_function_key(11), None);
    }

    #[test]
    fn section_offset_wraps() {
        assert_eq!(Section::Dashboard.offset(-1), Section::Privacy);
        assert_eq!(Section::Privacy.offset(1), Section::Dashboard);
        assert_eq!(Section::Transfer.offset(1), Section::Airtime);
    }
}
