// Receivers - the objects commands act on
//
// Receivers are owned by client code. Commands never hold them; they borrow
// them mutably for the duration of execute()/undo(). Concrete commands are
// generic over any target that exposes a receiver via AsMut, so a single
// context (such as Room) can host several receivers at once.

use std::fmt;

/// A light switch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Light {
    on: bool,
}

impl Light {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn_on(&mut self) {
        self.on = true;
    }

    pub fn turn_off(&mut self) {
        self.on = false;
    }

    pub fn set(&mut self, on: bool) {
        self.on = on;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl AsMut<Light> for Light {
    fn as_mut(&mut self) -> &mut Light {
        self
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.on { "on" } else { "off" })
    }
}

/// An appendable text document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Remove the last `len` bytes from the buffer
    ///
    /// Returns false (and leaves the buffer untouched) if the buffer is
    /// shorter than `len` or the cut would split a character.
    pub fn truncate_end(&mut self, len: usize) -> bool {
        let Some(cut) = self.text.len().checked_sub(len) else {
            return false;
        };
        if !self.text.is_char_boundary(cut) {
            return false;
        }
        self.text.truncate(cut);
        true
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl AsMut<TextBuffer> for TextBuffer {
    fn as_mut(&mut self) -> &mut TextBuffer {
        self
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A context hosting both receivers, so light and text commands can share a
/// macro, history or queue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Room {
    pub light: Light,
    pub document: TextBuffer,
}

impl Room {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AsMut<Light> for Room {
    fn as_mut(&mut self) -> &mut Light {
        &mut self.light
    }
}

impl AsMut<TextBuffer> for Room {
    fn as_mut(&mut self) -> &mut TextBuffer {
        &mut self.document
    }
}
