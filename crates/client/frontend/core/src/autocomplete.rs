//! Suggestion list state for the guess input.
//!
//! Holds the names offered for the current input and which one is
//! highlighted. Keyboard handling maps onto [`next`](Autocomplete::next),
//! [`previous`](Autocomplete::previous) and [`clear`](Autocomplete::clear);
//! [`submission`](Autocomplete::submission) decides what Enter submits.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Autocomplete {
    items: Vec<String>,
    active: Option<usize>,
}

impl Autocomplete {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the offered names. The first one is highlighted.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.active = if items.is_empty() { None } else { Some(0) };
        self.items = items;
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_item(&self) -> Option<&str> {
        self.active
            .and_then(|idx| self.items.get(idx))
            .map(String::as_str)
    }

    pub fn is_open(&self) -> bool {
        !self.items.is_empty()
    }

    /// Highlight the next name, wrapping to the first.
    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.active = Some(match self.active {
            Some(idx) => (idx + 1) % self.items.len(),
            None => 0,
        });
    }

    /// Highlight the previous name, wrapping to the last.
    pub fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        self.active = Some(match self.active {
            Some(0) | None => last,
            Some(idx) => idx - 1,
        });
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.active = None;
    }

    /// What Enter submits: the highlighted name, else the typed text.
    ///
    /// The typed text is looked up by exact canonical name downstream.
    /// Returns `None` when there is nothing to submit.
    pub fn submission(&self, input: &str) -> Option<String> {
        if let Some(item) = self.active_item() {
            return Some(item.to_string());
        }
        let typed = input.trim();
        (!typed.is_empty()).then(|| typed.to_string())
    }
}
