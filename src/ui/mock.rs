//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use loadout::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking tools");
//! ui.success("All present");
//!
//! assert!(ui.has_message("Checking tools"));
//! assert!(ui.has_success("All present"));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, UserInterface};

#[derive(Debug, Default)]
struct Captured {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    progress: Vec<(usize, usize)>,
    spinners: Vec<String>,
    spinner_results: Vec<String>,
}

/// Mock UI implementation for testing.
///
/// Captures all UI interactions, including spinner completions.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    captured: Rc<RefCell<Captured>>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> Vec<String> {
        self.captured.borrow().messages.clone()
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> Vec<String> {
        self.captured.borrow().successes.clone()
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> Vec<String> {
        self.captured.borrow().warnings.clone()
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> Vec<String> {
        self.captured.borrow().errors.clone()
    }

    /// Get all captured headers.
    pub fn headers(&self) -> Vec<String> {
        self.captured.borrow().headers.clone()
    }

    /// Get all captured progress updates.
    pub fn progress(&self) -> Vec<(usize, usize)> {
        self.captured.borrow().progress.clone()
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> Vec<String> {
        self.captured.borrow().spinners.clone()
    }

    /// Get all spinner completion messages, prefixed with their kind
    /// (`success:`, `error:`, `skipped:`).
    pub fn spinner_results(&self) -> Vec<String> {
        self.captured.borrow().spinner_results.clone()
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.captured
            .borrow()
            .messages
            .iter()
            .any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.captured
            .borrow()
            .successes
            .iter()
            .any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.captured
            .borrow()
            .warnings
            .iter()
            .any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.captured
            .borrow()
            .errors
            .iter()
            .any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.captured.borrow_mut().messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.captured.borrow_mut().successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.captured.borrow_mut().warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.captured.borrow_mut().errors.push(msg.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.captured.borrow_mut().spinners.push(message.to_string());
        Box::new(MockSpinner {
            captured: Rc::clone(&self.captured),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.captured.borrow_mut().headers.push(title.to_string());
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        self.captured.borrow_mut().progress.push((current, total));
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner handle that records completions back into the owning `MockUI`.
pub struct MockSpinner {
    captured: Rc<RefCell<Captured>>,
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        self.captured
            .borrow_mut()
            .spinner_results
            .push(format!("success: {}", msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.captured
            .borrow_mut()
            .spinner_results
            .push(format!("error: {}", msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.captured
            .borrow_mut()
            .spinner_results
            .push(format!("skipped: {}", msg));
    }
}
