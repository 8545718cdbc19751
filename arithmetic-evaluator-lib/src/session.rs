//! Input handling for a calculator front end.
//!
//! A [`Session`] accumulates key presses into an input buffer, evaluates it
//! on request and keeps track of what the display should show.

use crate::interpreter::evaluate;
use log::debug;

/// Longest input the buffer accepts before further values are ignored.
pub const MAX_INPUT_LENGTH: usize = 200;

/// What the display shows when an expression can not be evaluated.
pub const ERROR_DISPLAY: &str = "Error";

const INTEGER_EPSILON: f64 = 1e-12;

/// A single key press on the calculator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Value(char),
    Back,
    Clear,
    Equals,
}

impl Key {
    /// Maps a typed character to a key, if it is one the calculator accepts.
    pub fn from_char(character: char) -> Option<Key> {
        match character {
            '0'..='9' | '.' | '+' | '-' | '*' | '/' | '(' | ')' => Some(Key::Value(character)),
            _ => None,
        }
    }

    /// Maps a keyboard key name, such as `Enter` or `7`, to a key.
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "Enter" => Some(Key::Equals),
            "Backspace" => Some(Key::Back),
            "Escape" => Some(Key::Clear),
            name => {
                let mut characters = name.chars();
                match (characters.next(), characters.next()) {
                    (Some(character), None) => Key::from_char(character),
                    _ => None,
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    buffer: String,
    shown: Option<String>,
    max_length: usize,
}

impl Default for Session {
    fn default() -> Self {
        Session::with_max_length(MAX_INPUT_LENGTH)
    }
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn with_max_length(max_length: usize) -> Session {
        Session {
            buffer: String::new(),
            shown: None,
            max_length,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The text currently on the display.
    pub fn display(&self) -> &str {
        match &self.shown {
            Some(shown) => shown.as_str(),
            None if self.buffer.is_empty() => "0",
            None => self.buffer.as_str(),
        }
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Value(character) => self.append(character),
            Key::Back => self.back(),
            Key::Clear => self.clear(),
            Key::Equals => self.compute(),
        }
    }

    pub fn append(&mut self, character: char) {
        if self.buffer.len() >= self.max_length {
            debug!("input is full at {} characters", self.max_length);
            return;
        }
        self.buffer.push(character);
        self.shown = None;
    }

    pub fn back(&mut self) {
        self.buffer.pop();
        self.shown = None;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.shown = None;
    }

    /// Evaluates the buffer. A result replaces the buffer so that further
    /// input continues from it, while a failure only changes the display.
    pub fn compute(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        match evaluate(&self.buffer) {
            Ok(value) => {
                let result = format_result(value);
                self.buffer = result.clone();
                self.shown = Some(result);
            }
            Err(error) => {
                debug!("{:?} failed: {}", self.buffer, error);
                self.shown = Some(ERROR_DISPLAY.to_string());
            }
        }
    }
}

/// Formats a result for display. Values within `1e-12` of an integer are shown
/// without decimals.
pub fn format_result(value: f64) -> String {
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    let rounded = value.round();
    if (value - rounded).abs() < INTEGER_EPSILON {
        // Adding zero turns -0 into 0.
        format!("{}", rounded + 0.0)
    } else {
        format!("{}", value)
    }
}
