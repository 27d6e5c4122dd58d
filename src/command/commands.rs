// Concrete command implementations

use crate::command::state::{Light, TextBuffer};
use crate::command::trait_def::{Command, CommandError, CommandResult, UndoableCommand};

/// Command to switch a light on
///
/// Stores the previous switch state to enable undo.
#[derive(Debug, Default)]
pub struct LightOn {
    was_on: Option<bool>,
}

impl LightOn {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: AsMut<Light> + ?Sized> Command<R> for LightOn {
    fn execute(&mut self, target: &mut R) -> CommandResult<()> {
        let light = target.as_mut();
        self.was_on = Some(light.is_on());
        light.turn_on();
        Ok(())
    }

    fn description(&self) -> String {
        "Turn light on".to_string()
    }
}

impl<R: AsMut<Light> + ?Sized> UndoableCommand<R> for LightOn {
    fn undo(&mut self, target: &mut R) -> CommandResult<()> {
        let was_on = self
            .was_on
            .take()
            .ok_or_else(|| CommandError::UndoFailed("No previous light state stored".into()))?;
        target.as_mut().set(was_on);
        Ok(())
    }
}

/// Command to switch a light off
///
/// Stores the previous switch state to enable undo.
#[derive(Debug, Default)]
pub struct LightOff {
    was_on: Option<bool>,
}

impl LightOff {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: AsMut<Light> + ?Sized> Command<R> for LightOff {
    fn execute(&mut self, target: &mut R) -> CommandResult<()> {
        let light = target.as_mut();
        self.was_on = Some(light.is_on());
        light.turn_off();
        Ok(())
    }

    fn description(&self) -> String {
        "Turn light off".to_string()
    }
}

impl<R: AsMut<Light> + ?Sized> UndoableCommand<R> for LightOff {
    fn undo(&mut self, target: &mut R) -> CommandResult<()> {
        let was_on = self
            .was_on
            .take()
            .ok_or_else(|| CommandError::UndoFailed("No previous light state stored".into()))?;
        target.as_mut().set(was_on);
        Ok(())
    }
}

/// Command to append text to a document
///
/// Undo removes exactly the appended length from the end of the buffer.
#[derive(Debug)]
pub struct AppendText {
    text: String,
    applied: bool,
}

impl AppendText {
    /// Create a new AppendText
    ///
    /// # Arguments
    /// * `text` - The text appended on every execution
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            applied: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl<R: AsMut<TextBuffer> + ?Sized> Command<R> for AppendText {
    fn execute(&mut self, target: &mut R) -> CommandResult<()> {
        target.as_mut().append(&self.text);
        self.applied = true;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Append {:?}", self.text)
    }
}

impl<R: AsMut<TextBuffer> + ?Sized> UndoableCommand<R> for AppendText {
    fn undo(&mut self, target: &mut R) -> CommandResult<()> {
        if !self.applied {
            return Err(CommandError::UndoFailed("Text was never appended".into()));
        }

        let buffer = target.as_mut();
        if !buffer.truncate_end(self.text.len()) {
            return Err(CommandError::InvalidState(format!(
                "Buffer of {} bytes cannot drop {} appended bytes",
                buffer.len(),
                self.text.len()
            )));
        }

        self.applied = false;
        Ok(())
    }
}
