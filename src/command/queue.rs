// CommandQueue - Deferred FIFO execution

use crate::command::trait_def::{Command, CommandResult};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// A first-in-first-out queue of commands for deferred batch execution
///
/// Every command is removed from the queue before it runs, so each one
/// executes at most once. `run_all` borrows the queue mutably for its whole
/// duration: commands cannot enqueue into the queue that is draining them,
/// and anything added afterwards waits for the next `run_all`.
pub struct CommandQueue<R: ?Sized> {
    pending: VecDeque<Box<dyn Command<R>>>,
}

impl<R: ?Sized> CommandQueue<R> {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Append a command to the tail of the queue
    pub fn add(&mut self, command: Box<dyn Command<R>>) {
        self.pending.push_back(command);
    }

    /// Execute queued commands head first until the queue is empty
    ///
    /// Returns the number of commands executed.
    ///
    /// # Errors
    /// Stops at the first failing command and returns its error. The failed
    /// command has already been removed; the ones behind it stay queued.
    pub fn run_all(&mut self, target: &mut R) -> CommandResult<usize> {
        let mut executed = 0;

        while let Some(mut command) = self.pending.pop_front() {
            if let Err(err) = command.execute(target) {
                warn!(
                    command = command.kind(),
                    remaining = self.pending.len(),
                    error = %err,
                    "queued command failed"
                );
                return Err(err);
            }
            executed += 1;
        }

        debug!(executed, "command queue drained");
        Ok(executed)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<R: ?Sized> Default for CommandQueue<R> {
    fn default() -> Self {
        Self::new()
    }
}
