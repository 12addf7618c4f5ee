//! Application state and key handling

use crate::config::TuiConfig;
use crate::directory::OrganizationLookup;
use crate::state::{
    focus_targets, pop_char, push_char, DocumentKind, FocusTarget, FormEvent, FormState,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current form state
    pub state: FormState,
    /// Organization source for the search box
    directory: Box<dyn OrganizationLookup>,
    /// Whether the app should quit
    quit: bool,
    /// Position of the focused element in `focus_targets()`
    focus_index: usize,
    /// Highlighted entry of the suggestion panel
    pub suggestion_index: usize,
    /// Feedback for the last action, cleared on the next key press
    pub status_message: Option<String>,
    /// Show key hints in the status bar
    pub show_key_hints: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(directory: Box<dyn OrganizationLookup>, config: &TuiConfig) -> Self {
        Self {
            state: FormState::new(config.entity_type()),
            directory,
            quit: false,
            focus_index: 0,
            suggestion_index: 0,
            status_message: None,
            show_key_hints: config.key_hints_enabled(),
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Focusable elements of the current form, in display order
    pub fn focus_targets(&self) -> Vec<FocusTarget> {
        focus_targets(&self.state)
    }

    /// The element that receives key input
    pub fn focused(&self) -> FocusTarget {
        let targets = self.focus_targets();
        let index = self.focus_index.min(targets.len().saturating_sub(1));
        targets
            .get(index)
            .copied()
            .unwrap_or(FocusTarget::EntitySwitch)
    }

    /// Whether Up/Down/Enter currently drive the suggestion panel
    pub fn navigating_suggestions(&self) -> bool {
        self.focused() == FocusTarget::Search && self.state.suggestions_visible()
    }

    /// Move focus to a specific element, if it is visible
    fn focus_on(&mut self, target: FocusTarget) {
        if let Some(index) = self.focus_targets().iter().position(|t| *t == target) {
            self.focus_index = index;
        }
    }

    fn next_focus(&mut self) {
        let count = self.focus_targets().len();
        self.focus_index = (self.focus_index + 1) % count;
    }

    fn prev_focus(&mut self) {
        let count = self.focus_targets().len();
        if self.focus_index == 0 {
            self.focus_index = count - 1;
        } else {
            self.focus_index = (self.focus_index - 1).min(count - 1);
        }
    }

    /// Run an event through the reducer, keeping focus on the same element when possible
    pub fn dispatch(&mut self, event: FormEvent) {
        let focused = self.focused();
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(event, self.directory.as_ref());

        let targets = self.focus_targets();
        match targets.iter().position(|t| *t == focused) {
            Some(index) => self.focus_index = index,
            None => self.focus_index = self.focus_index.min(targets.len().saturating_sub(1)),
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear any status messages on key press
        self.status_message = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        if self.navigating_suggestions() && self.handle_suggestion_key(key) {
            return;
        }

        let focused = self.focused();
        match key.code {
            KeyCode::Tab => self.next_focus(),
            KeyCode::BackTab => self.prev_focus(),
            KeyCode::Down => self.next_focus(),
            KeyCode::Up => self.prev_focus(),
            KeyCode::Esc => {
                if self.state.suggestions_visible() {
                    self.dispatch(FormEvent::CloseSuggestions);
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ')
                if focused == FocusTarget::EntitySwitch =>
            {
                let entity_type = self.state.entity_type.toggle();
                self.dispatch(FormEvent::SetEntityType(entity_type));
            }
            KeyCode::Enter | KeyCode::Char(' ') if focused.is_button() => {
                self.activate_button(focused);
            }
            KeyCode::Enter if focused.is_text() => self.next_focus(),
            KeyCode::Char(c)
                if focused.is_text()
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input_char(focused, c);
            }
            KeyCode::Backspace if focused.is_text() => self.backspace(focused),
            _ => {}
        }
    }

    /// Keys handled by the open suggestion panel. Returns false to fall through.
    fn handle_suggestion_key(&mut self, key: KeyEvent) -> bool {
        let count = self.state.search_results.len();
        match key.code {
            KeyCode::Down => {
                self.suggestion_index = (self.suggestion_index + 1) % count;
                true
            }
            KeyCode::Up => {
                self.suggestion_index = if self.suggestion_index == 0 {
                    count - 1
                } else {
                    self.suggestion_index - 1
                };
                true
            }
            KeyCode::Enter => {
                self.dispatch(FormEvent::SelectOrganization(self.suggestion_index));
                if let Some(org) = &self.state.organization {
                    self.status_message = Some(format!("Выбрано: {}", org.short_name));
                }
                self.suggestion_index = 0;
                true
            }
            _ => false,
        }
    }

    fn activate_button(&mut self, target: FocusTarget) {
        match target {
            FocusTarget::AddPhone => {
                self.dispatch(FormEvent::AddPhone);
                self.focus_on(FocusTarget::Phone(self.state.phones.len() - 1));
            }
            FocusTarget::RemovePhone(index) => {
                self.dispatch(FormEvent::RemovePhone(index));
                self.status_message = Some("Телефон удалён".to_string());
            }
            FocusTarget::AddDocument(kind) => self.add_document(kind),
            FocusTarget::RemoveDocument(index) => {
                if let Some(kind) = self.state.documents.get(index).map(|d| d.kind()) {
                    self.dispatch(FormEvent::RemoveDocument(index));
                    self.status_message = Some(format!("Удалён документ: {}", kind.label()));
                }
            }
            _ => {}
        }
    }

    fn add_document(&mut self, kind: DocumentKind) {
        if !self.state.can_add_document(kind) {
            return;
        }
        self.dispatch(FormEvent::AddDocument(kind));
        let index = self.state.documents.len() - 1;
        if let Some(field) = kind.fields().first() {
            self.focus_on(FocusTarget::DocumentField(index, *field));
        }
        self.status_message = Some(format!("Добавлен документ: {}", kind.label()));
    }

    /// Current text of a text element
    pub fn value_of(&self, target: FocusTarget) -> Option<&str> {
        match target {
            FocusTarget::Person(field) => Some(self.state.person.get(field)),
            FocusTarget::Phone(index) => self.state.phones.get(index).map(String::as_str),
            FocusTarget::DocumentField(index, field) => self
                .state
                .documents
                .get(index)
                .and_then(|doc| doc.field(field)),
            FocusTarget::Search => Some(self.state.search_query.as_str()),
            _ => None,
        }
    }

    /// Length cap of a text element
    pub fn max_len_of(&self, target: FocusTarget) -> Option<usize> {
        match target {
            FocusTarget::DocumentField(index, field) => self
                .state
                .documents
                .get(index)
                .and_then(|doc| field.max_len(doc.kind())),
            _ => None,
        }
    }

    fn input_char(&mut self, target: FocusTarget, c: char) {
        let Some(current) = self.value_of(target) else {
            return;
        };
        if let Some(value) = push_char(current, c, target.input_kind(), self.max_len_of(target)) {
            self.set_value(target, value);
        }
    }

    fn backspace(&mut self, target: FocusTarget) {
        if let Some(current) = self.value_of(target) {
            let value = pop_char(current);
            self.set_value(target, value);
        }
    }

    fn set_value(&mut self, target: FocusTarget, value: String) {
        let event = match target {
            FocusTarget::Person(field) => FormEvent::SetPersonField(field, value),
            FocusTarget::Phone(index) => FormEvent::SetPhone(index, value),
            FocusTarget::DocumentField(index, field) => {
                FormEvent::SetDocumentField(index, field, value)
            }
            FocusTarget::Search => {
                self.suggestion_index = 0;
                FormEvent::SetSearchQuery(value)
            }
            _ => return,
        };
        self.dispatch(event);
    }
}
