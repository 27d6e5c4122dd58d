// CommandHistory - Executes undoable commands and keeps the undo stack

use crate::command::trait_def::{Command, CommandResult, UndoableCommand};
use tracing::{debug, warn};

/// Executes undoable commands and records them for undo
///
/// The history is a single LIFO stack:
/// - `exec` runs a command and pushes it (only if it succeeded)
/// - `undo` pops the most recent command, undoes it and hands it back
///
/// There is no redo stack. Undone commands are returned to the caller and
/// forgotten by the history.
pub struct CommandHistory<R: ?Sized> {
    /// Executed commands, most recent at the back
    undo_stack: Vec<Box<dyn UndoableCommand<R>>>,
}

impl<R: ?Sized> CommandHistory<R> {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
        }
    }

    /// Execute a command and add it to the undo stack
    ///
    /// # Errors
    /// Returns the command's error if execution fails; the command is then
    /// dropped and the history is left unchanged.
    pub fn exec(
        &mut self,
        mut command: Box<dyn UndoableCommand<R>>,
        target: &mut R,
    ) -> CommandResult<()> {
        if let Err(err) = command.execute(target) {
            warn!(command = command.kind(), error = %err, "command failed, not recorded");
            return Err(err);
        }

        debug!(
            command = command.kind(),
            depth = self.undo_stack.len() + 1,
            "command executed"
        );
        self.undo_stack.push(command);
        Ok(())
    }

    /// Undo the most recent command
    ///
    /// Returns the undone command, or `None` if there was nothing to undo.
    /// Undo on an empty history is a no-op.
    ///
    /// # Errors
    /// Returns the command's error if its undo fails. The command stays on
    /// top of the history, since its effect was not reversed.
    pub fn undo(&mut self, target: &mut R) -> CommandResult<Option<Box<dyn UndoableCommand<R>>>> {
        let Some(mut command) = self.undo_stack.pop() else {
            debug!("nothing to undo");
            return Ok(None);
        };

        if let Err(err) = command.undo(target) {
            warn!(command = command.kind(), error = %err, "undo failed, command kept");
            self.undo_stack.push(command);
            return Err(err);
        }
        debug!(
            command = command.kind(),
            depth = self.undo_stack.len(),
            "command undone"
        );

        Ok(Some(command))
    }

    /// Check if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Get a description of the command that would be undone
    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(|cmd| cmd.description())
    }

    /// Clear all command history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
    }

    /// Get the number of commands in the undo stack
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}

impl<R: ?Sized> Default for CommandHistory<R> {
    fn default() -> Self {
        Self::new()
    }
}
