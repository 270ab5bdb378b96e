pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use engine::FlowKind;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, CardsFocus, Screen, Section};
use components::hints::{self, KeyHint};

pub use terminal::{AppTerminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    match state.screen {
        Screen::Landing => screens::landing::render(frame, area, state),
        Screen::Main => render_shell(frame, area, state),
    }
}

fn render_shell(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let [info, tabs, content, bottom] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_info_bar(frame, info, state, &theme);
    components::tabs::render_tabs(
        frame,
        tabs,
        state.section,
        state.ui_lock.is_held(),
        &theme,
    );

    match state.section {
        Section::Dashboard => screens::dashboard::render(frame, content, state),
        Section::Transfer => screens::payment::render(frame, content, state, FlowKind::Transfer),
        Section::Airtime => screens::payment::render(frame, content, state, FlowKind::Airtime),
        Section::Transactions => screens::transactions::render(frame, content, state),
        Section::Cards => screens::cards::render(frame, content, state),
        Section::Profile => screens::profile::render(frame, content, state),
        Section::Settings => screens::settings::render(frame, content, state),
        Section::Support => screens::support::render(frame, content, state),
        Section::Help => screens::pages::render_help(frame, content, state),
        Section::Privacy => screens::pages::render_privacy(frame, content, state),
    }

    render_bottom_bar(frame, bottom, state, &theme);
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let user = state
        .dashboard
        .summary
        .as_ref()
        .map(|s| s.user_name.as_str())
        .unwrap_or(state.profile.profile.name.as_str());

    let line = Line::from(vec![
        Span::styled("SkyBank", Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled("User", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {user}  ")),
        Span::styled("Store", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}", state.base_url)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = hints::hints_to_spans(context_hints(state), theme);
    parts.push(hints::hint_separator(theme));
    parts.extend(hints::hints_to_spans(hints::GLOBAL, theme));
    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn context_hints(state: &AppState) -> &'static [KeyHint] {
    match state.section {
        Section::Dashboard => &[
            KeyHint { key: "a", action: "account no." },
            KeyHint { key: "b", action: "balance" },
            KeyHint { key: "r", action: "refresh" },
        ],
        Section::Transfer | Section::Airtime => {
            let kind = if state.section == Section::Transfer {
                FlowKind::Transfer
            } else {
                FlowKind::Airtime
            };
            if state.payment(kind).flow.pin().is_open() {
                hints::PIN
            } else {
                hints::FORM
            }
        }
        Section::Transactions if state.history.editing_date => &[
            KeyHint { key: "YYYY-MM-DD", action: "date" },
            KeyHint { key: "Enter", action: "done" },
        ],
        Section::Transactions => &[
            KeyHint { key: "↑↓", action: "select" },
            KeyHint { key: "t", action: "type" },
            KeyHint { key: "d", action: "date" },
            KeyHint { key: "c", action: "clear" },
            KeyHint { key: "r", action: "refresh" },
        ],
        Section::Cards if state.cards.focus == CardsFocus::Form => &[
            KeyHint { key: "Tab", action: "next" },
            KeyHint { key: "Enter", action: "save" },
            KeyHint { key: "Esc", action: "cancel" },
        ],
        Section::Cards => &[
            KeyHint { key: "a", action: "add" },
            KeyHint { key: "e", action: "edit" },
            KeyHint { key: "b", action: "block" },
            KeyHint { key: "d", action: "delete" },
            KeyHint { key: "r", action: "refresh" },
        ],
        Section::Profile if state.profile.editing => &[
            KeyHint { key: "Tab", action: "next" },
            KeyHint { key: "Enter", action: "save" },
            KeyHint { key: "Esc", action: "cancel" },
        ],
        Section::Profile => &[
            KeyHint { key: "e", action: "edit" },
            KeyHint { key: "r", action: "refresh" },
        ],
        Section::Settings => &[
            KeyHint { key: "Ctrl+T", action: "notifications" },
            KeyHint { key: "Tab", action: "next" },
            KeyHint { key: "Enter", action: "save" },
        ],
        Section::Support => &[
            KeyHint { key: "Tab", action: "next" },
            KeyHint { key: "Enter", action: "send" },
        ],
        Section::Help | Section::Privacy => &[KeyHint { key: "↑↓", action: "scroll" }],
    }
}
