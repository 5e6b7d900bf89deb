//! Text entry buffer for the word currently being typed.
//!
//! Fixed capacity and stack-only; characters past the capacity are dropped.

use arrayvec::ArrayString;

use crate::types::{InputEvent, MAX_INPUT_LEN};

#[derive(Debug, Clone, Default)]
pub struct TextEntry {
    buf: ArrayString<MAX_INPUT_LEN>,
}

impl TextEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buf.is_full()
    }

    /// Append a character. Returns false when the buffer has no room for it.
    pub fn push(&mut self, ch: char) -> bool {
        self.buf.try_push(ch).is_ok()
    }

    pub fn backspace(&mut self) {
        self.buf.pop();
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Take the typed word, leaving the buffer empty.
    ///
    /// Whitespace-only input yields `None`.
    pub fn take(&mut self) -> Option<String> {
        let word = self.buf.trim().to_string();
        self.buf.clear();
        if word.is_empty() {
            None
        } else {
            Some(word)
        }
    }

    /// Apply an editing event; returns the word when the event ends one.
    pub fn apply(&mut self, event: InputEvent) -> Option<String> {
        match event {
            InputEvent::Char(ch) => {
                self.push(ch);
                None
            }
            InputEvent::Backspace => {
                self.backspace();
                None
            }
            InputEvent::ClearWord => {
                self.clear();
                None
            }
            InputEvent::Submit | InputEvent::Enter => self.take(),
            InputEvent::Restart => None,
        }
    }
}
