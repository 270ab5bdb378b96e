//! Keyboard editing of schema-backed forms.

use engine::{
    FormState, TransactionFlow, ValidationErrors,
    forms::{Choice, label_for},
};

use crate::ui::keymap::AppAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Rendered as bullets.
    Secret,
    Digits,
    Select(&'static [Choice]),
    Checkbox,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub max_len: Option<usize>,
    /// Reformats the raw value after every edit.
    pub format: Option<fn(&str) -> String>,
}

impl FieldDef {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            max_len: None,
            format: None,
        }
    }

    pub const fn max_len(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }

    pub const fn format(mut self, format: fn(&str) -> String) -> Self {
        self.format = Some(format);
        self
    }

    /// Text shown for `value` in this field.
    pub fn display(&self, value: &str) -> String {
        match self.kind {
            FieldKind::Secret => "•".repeat(value.chars().count()),
            FieldKind::Select(_) if value.is_empty() => "‹ select ›".to_string(),
            FieldKind::Select(choices) => format!("‹ {} ›", label_for(choices, value)),
            FieldKind::Checkbox if value == "true" => "[x]".to_string(),
            FieldKind::Checkbox => "[ ]".to_string(),
            FieldKind::Text | FieldKind::Digits => value.to_string(),
        }
    }

    fn edit(&self, current: &str, action: AppAction) -> Option<String> {
        let mut value = current.to_string();
        match (self.kind, action) {
            (FieldKind::Select(choices), AppAction::Left | AppAction::Right) => {
                let step = if action == AppAction::Right { 1 } else { -1 };
                return Some(cycle(choices, current, step));
            }
            (FieldKind::Select(choices), AppAction::Input(' ')) => {
                return Some(cycle(choices, current, 1));
            }
            (FieldKind::Checkbox, AppAction::Input(' ') | AppAction::Left | AppAction::Right) => {
                let next = if current == "true" { "" } else { "true" };
                return Some(next.to_string());
            }
            (FieldKind::Text | FieldKind::Secret, AppAction::Input(ch)) => value.push(ch),
            (FieldKind::Digits, AppAction::Input(ch)) if ch.is_ascii_digit() => value.push(ch),
            (FieldKind::Text | FieldKind::Secret | FieldKind::Digits, AppAction::Backspace) => {
                value.pop()?;
            }
            _ => return None,
        }
        if let Some(format) = self.format {
            value = format(&value);
        }
        if self.max_len.is_some_and(|max| value.chars().count() > max) {
            return None;
        }
        Some(value)
    }
}

fn cycle(choices: &[Choice], current: &str, step: isize) -> String {
    // Position 0 is "nothing selected".
    let len = choices.len() as isize + 1;
    let index = choices
        .iter()
        .position(|c| c.value == current)
        .map_or(0, |i| i as isize + 1);
    let next = (index + step).rem_euclid(len);
    if next == 0 {
        String::new()
    } else {
        choices[(next - 1) as usize].value.to_string()
    }
}

/// Anything whose fields a [`FormView`] can edit.
pub trait FieldSink {
    fn values(&self) -> &FormState;
    fn errors(&self) -> &ValidationErrors;
    fn set_value(&mut self, name: &str, value: String);
}

impl FieldSink for TransactionFlow {
    fn values(&self) -> &FormState {
        self.form()
    }

    fn errors(&self) -> &ValidationErrors {
        TransactionFlow::errors(self)
    }

    fn set_value(&mut self, name: &str, value: String) {
        self.set_field(name, value);
    }
}

/// Plain form buffer for screens outside the confirmation protocol.
#[derive(Debug, Default, Clone)]
pub struct FormBuffer {
    pub values: FormState,
    pub errors: ValidationErrors,
}

impl FormBuffer {
    pub fn clear(&mut self) {
        self.values.clear();
        self.errors.clear();
    }
}

impl FieldSink for FormBuffer {
    fn values(&self) -> &FormState {
        &self.values
    }

    fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    fn set_value(&mut self, name: &str, value: String) {
        self.values.set(name, value);
        self.errors.clear_field(name);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEdit {
    Changed,
    Moved,
    Submit,
    Ignored,
}

/// Field layout and focus of one form.
#[derive(Debug, Clone)]
pub struct FormView {
    fields: Vec<FieldDef>,
    focus: usize,
}

impl FormView {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self { fields, focus: 0 }
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn reset_focus(&mut self) {
        self.focus = 0;
    }

    pub fn handle(&mut self, action: AppAction, sink: &mut impl FieldSink) -> FormEdit {
        match action {
            AppAction::NextField | AppAction::Down => {
                self.focus = (self.focus + 1) % self.fields.len().max(1);
                FormEdit::Moved
            }
            AppAction::PrevField | AppAction::Up => {
                let len = self.fields.len().max(1);
                self.focus = (self.focus + len - 1) % len;
                FormEdit::Moved
            }
            AppAction::Submit => FormEdit::Submit,
            _ => {
                let Some(field) = self.fields.get(self.focus) else {
                    return FormEdit::Ignored;
                };
                match field.edit(sink.values().get(field.name), action) {
                    Some(value) => {
                        sink.set_value(field.name, value);
                        FormEdit::Changed
                    }
                    None => FormEdit::Ignored,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use engine::{forms, format};

    use super::*;

    fn card_view() -> FormView {
        FormView::new(vec![
            FieldDef::new(forms::card::CARD_NUMBER, "Card number", FieldKind::Digits)
                .format(format::format_card_input),
            FieldDef::new(forms::card::EXPIRY, "Expiry", FieldKind::Digits)
                .format(format::format_expiry_input),
        ])
    }

    fn type_str(view: &mut FormView, sink: &mut impl FieldSink, text: &str) {
        for ch in text.chars() {
            view.handle(AppAction::Input(ch), sink);
        }
    }

    #[test]
    fn digits_are_grouped_as_typed() {
        let mut view = card_view();
        let mut buffer = FormBuffer::default();
        type_str(&mut view, &mut buffer, "4111x11111");
        assert_eq!(buffer.values.get(forms::card::CARD_NUMBER), "4111 1111 11");

        view.handle(AppAction::Backspace, &mut buffer);
        assert_eq!(buffer.values.get(forms::card::CARD_NUMBER), "4111 1111 1");
    }

    #[test]
    fn expiry_gets_its_slash() {
        let mut view = card_view();
        let mut buffer = FormBuffer::default();
        view.handle(AppAction::NextField, &mut buffer);
        type_str(&mut view, &mut buffer, "0927");
        assert_eq!(buffer.values.get(forms::card::EXPIRY), "09/27");
    }

    #[test]
    fn select_cycles_through_unselected() {
        let field = FieldDef::new("network", "Network", FieldKind::Select(forms::NETWORKS));
        assert_eq!(field.edit("", AppAction::Right).as_deref(), Some("mtn"));
        assert_eq!(field.edit("9mobile", AppAction::Right).as_deref(), Some(""));
        assert_eq!(field.edit("", AppAction::Left).as_deref(), Some("9mobile"));
    }

    #[test]
    fn editing_clears_the_field_error() {
        let mut view = FormView::new(vec![FieldDef::new("name", "Name", FieldKind::Text)]);
        let mut buffer = FormBuffer::default();
        buffer.errors.insert("name", "Name is required.");
        type_str(&mut view, &mut buffer, "J");
        assert!(buffer.errors.is_empty());
    }

    #[test]
    fn max_len_rejects_overflow() {
        let field = FieldDef::new("acct", "Account", FieldKind::Digits).max_len(2);
        assert_eq!(field.edit("12", AppAction::Input('3')), None);
    }
}
