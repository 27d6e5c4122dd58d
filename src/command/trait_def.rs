// Command and UndoableCommand trait definitions

use thiserror::Error;

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Command execution failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Undo operation failed
    #[error("Undo failed: {0}")]
    UndoFailed(String),

    /// Invalid state for this operation
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A child of a macro failed
    #[error("Macro child #{index} ({kind}) failed")]
    ChildFailed {
        index: usize,
        kind: &'static str,
        #[source]
        source: Box<CommandError>,
    },

    /// An invoker was triggered without a bound command
    #[error("No command bound")]
    NoCommandBound,
}

/// Short, unqualified name of a type: `a::b::Foo<x::Y>` becomes `Foo`.
///
/// Only named types are shortened. Tuples, arrays and slices have no single
/// name and are returned in full.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    if full.starts_with(['(', '[']) {
        return full;
    }
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// An action against a target of type `R`, encapsulated as an object
///
/// The target (the receiver) is owned by the caller and lent to the command
/// for the duration of `execute`.
///
/// # Example
/// ```
/// use command_deck::command::trait_def::{Command, CommandResult};
///
/// struct Ring;
///
/// impl Command<Vec<&'static str>> for Ring {
///     fn execute(&mut self, bell: &mut Vec<&'static str>) -> CommandResult<()> {
///         bell.push("ding");
///         Ok(())
///     }
/// }
///
/// let mut bell = Vec::new();
/// Ring.execute(&mut bell).unwrap();
/// assert_eq!(bell, ["ding"]);
/// assert_eq!(Ring.kind(), "Ring");
/// ```
pub trait Command<R: ?Sized> {
    /// Execute the command against the target
    fn execute(&mut self, target: &mut R) -> CommandResult<()>;

    /// Concrete kind of the command, used in log records
    fn kind(&self) -> &'static str {
        short_type_name::<Self>()
    }

    /// Human-readable description of the command
    fn description(&self) -> String {
        self.kind().to_string()
    }
}

/// A command that can reverse its own effect
///
/// `undo` must be the exact inverse of the immediately preceding `execute`
/// on the same instance. Implementations store whatever previous state they
/// need during `execute`.
pub trait UndoableCommand<R: ?Sized>: Command<R> {
    /// Undo the command
    ///
    /// Restores the target to what it was before execute() was called.
    fn undo(&mut self, target: &mut R) -> CommandResult<()>;
}

impl<R: ?Sized, C: Command<R> + ?Sized> Command<R> for Box<C> {
    fn execute(&mut self, target: &mut R) -> CommandResult<()> {
        (**self).execute(target)
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

impl<R: ?Sized, C: UndoableCommand<R> + ?Sized> UndoableCommand<R> for Box<C> {
    fn undo(&mut self, target: &mut R) -> CommandResult<()> {
        (**self).undo(target)
    }
}
