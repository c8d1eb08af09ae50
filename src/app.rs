use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::i18n::Messages;
use crate::models::Answers;

/// Questions in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    BinaryName,
    InitMode,
    EpitechHeader,
    UnitTests,
    Lib,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Finished(Answers),
    Cancelled,
}

/// Prompt sequence state.
pub struct App {
    pub messages: &'static Messages,
    /// Question currently on screen.
    pub step: Step,
    /// Text typed for the binary name.
    pub input: String,
    /// Highlighted entry in the current choice list.
    pub highlighted_index: usize,
    /// Questions already answered, with the answer shown back to the user.
    pub history: Vec<(&'static str, String)>,
    /// Validation error for the current question.
    pub error: Option<&'static str>,
    pub outcome: Option<Outcome>,
    binary_name: String,
    epitech_header: bool,
    unit_tests: bool,
}

impl App {
    pub fn new(messages: &'static Messages) -> Self {
        Self {
            messages,
            step: Step::BinaryName,
            input: String::new(),
            highlighted_index: 0,
            history: Vec::new(),
            error: None,
            outcome: None,
            binary_name: String::new(),
            epitech_header: true,
            unit_tests: true,
        }
    }

    pub fn question(&self) -> &'static str {
        match self.step {
            Step::BinaryName => self.messages.binary_name_question,
            Step::InitMode => self.messages.custom_init_question,
            Step::EpitechHeader => self.messages.epitech_header_question,
            Step::UnitTests => self.messages.unit_tests_question,
            Step::Lib => self.messages.lib_question,
        }
    }

    /// Labels of the current choice list; empty while the name is being typed.
    /// The first entry is the default and maps to Classic or Yes.
    pub fn choices(&self) -> Vec<&'static str> {
        match self.step {
            Step::BinaryName => Vec::new(),
            Step::InitMode => vec![self.messages.classic, self.messages.custom],
            Step::EpitechHeader | Step::UnitTests | Step::Lib => {
                vec![self.messages.yes, self.messages.no]
            }
        }
    }

    pub fn is_done(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.is_done() {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.cancel();
            return;
        }

        match (self.step, key.code) {
            (_, KeyCode::Esc) => self.cancel(),
            (_, KeyCode::Enter) => self.submit(),
            (Step::BinaryName, KeyCode::Char(c)) if is_plain_text(key.modifiers) => {
                self.error = None;
                self.input.push(c);
            }
            (Step::BinaryName, KeyCode::Backspace) => {
                self.error = None;
                self.input.pop();
            }
            (Step::BinaryName, _) => {}
            (_, KeyCode::Down | KeyCode::Char('j')) => self.next(),
            (_, KeyCode::Up | KeyCode::Char('k')) => self.previous(),
            _ => {}
        }
    }

    pub fn next(&mut self) {
        let len = self.choices().len();
        if len > 0 {
            self.highlighted_index = (self.highlighted_index + 1) % len;
        }
    }

    pub fn previous(&mut self) {
        let len = self.choices().len();
        if len > 0 {
            if self.highlighted_index > 0 {
                self.highlighted_index -= 1;
            } else {
                self.highlighted_index = len - 1;
            }
        }
    }

    pub fn cancel(&mut self) {
        self.outcome = Some(Outcome::Cancelled);
    }

    /// Confirms the current answer and moves to the next question.
    pub fn submit(&mut self) {
        if self.step == Step::BinaryName {
            if self.input.is_empty() {
                self.error = Some(self.messages.binary_name_error);
                return;
            }
            self.binary_name = self.input.clone();
            let question = self.question();
            self.history.push((question, self.binary_name.clone()));
            self.advance(Step::InitMode);
            return;
        }

        let picked_first = self.highlighted_index == 0;
        let label = self.choices().get(self.highlighted_index).copied().unwrap_or_default();
        let question = self.question();
        self.history.push((question, label.to_string()));

        match self.step {
            Step::BinaryName => {}
            Step::InitMode if picked_first => {
                self.outcome = Some(Outcome::Finished(Answers::classic(self.binary_name.clone())));
            }
            Step::InitMode => self.advance(Step::EpitechHeader),
            Step::EpitechHeader => {
                self.epitech_header = picked_first;
                self.advance(Step::UnitTests);
            }
            Step::UnitTests => {
                self.unit_tests = picked_first;
                self.advance(Step::Lib);
            }
            Step::Lib => {
                self.outcome = Some(Outcome::Finished(Answers::custom(
                    self.binary_name.clone(),
                    self.epitech_header,
                    self.unit_tests,
                    picked_first,
                )));
            }
        }
    }

    fn advance(&mut self, step: Step) {
        self.step = step;
        self.highlighted_index = 0;
        self.error = None;
    }
}

/// Characters typed with Ctrl or Alt held are shortcuts, not text.
fn is_plain_text(modifiers: KeyModifiers) -> bool {
    modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn english() -> App {
        App::new(Language::English.messages())
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut app = english();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.step, Step::BinaryName);
        assert_eq!(app.error, Some(Language::English.messages().binary_name_error));
    }

    #[test]
    fn test_whitespace_name_is_accepted_as_typed() {
        let mut app = english();
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.step, Step::InitMode);
        assert!(app.error.is_none());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.outcome, Some(Outcome::Finished(Answers::classic("   "))));
    }

    #[test]
    fn test_modified_chars_are_not_typed() {
        let mut app = english();
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(app.input, "");

        app.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.input, "Ab");
    }

    #[test]
    fn test_error_is_localized() {
        let mut app = App::new(Language::French.messages());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.error, Some(Language::French.messages().binary_name_error));
    }

    #[test]
    fn test_typing_clears_error() {
        let mut app = english();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "a");
        assert!(app.error.is_none());
        assert_eq!(app.input, "a");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "");
    }

    #[test]
    fn test_j_and_k_are_text_in_name_step() {
        let mut app = english();
        type_text(&mut app, "jk");
        assert_eq!(app.input, "jk");
    }

    #[test]
    fn test_classic_flow() {
        let mut app = english();
        type_text(&mut app, "app");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.step, Step::InitMode);
        assert_eq!(app.choices(), vec!["Classic", "Custom"]);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.outcome, Some(Outcome::Finished(Answers::classic("app"))));
        assert_eq!(app.history.len(), 2);
    }

    #[test]
    fn test_custom_flow_all_no() {
        let mut app = english();
        type_text(&mut app, "x");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.step, Step::EpitechHeader);

        for _ in 0..3 {
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Enter);
        }

        assert_eq!(
            app.outcome,
            Some(Outcome::Finished(Answers::custom("x", false, false, false)))
        );
    }

    #[test]
    fn test_custom_toggles_are_independent() {
        let mut app = english();
        type_text(&mut app, " demo ");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.step, Step::UnitTests);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.step, Step::Lib);
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.outcome,
            Some(Outcome::Finished(Answers::custom(" demo ", true, false, true)))
        );
    }

    #[test]
    fn test_highlight_wraps() {
        let mut app = english();
        type_text(&mut app, "x");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.highlighted_index, 1);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.highlighted_index, 0);
    }

    #[test]
    fn test_escape_cancels() {
        let mut app = english();
        type_text(&mut app, "x");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.outcome, Some(Outcome::Cancelled));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.outcome, Some(Outcome::Cancelled));
    }

    #[test]
    fn test_ctrl_c_cancels() {
        let mut app = english();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.is_done());
        assert_eq!(app.input, "");
    }
}
