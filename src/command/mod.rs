// Command Pattern building blocks
//
// Every action is an object implementing Command<R>, where R is the target
// (receiver) the action mutates. The target is owned by the caller and lent
// to commands at execution time.
//
// Architecture:
// - Command / UndoableCommand traits: execute(), undo(), kind(), description()
// - CommandHistory: executes undoable commands and keeps the undo stack
// - MacroCommand: composite running children in insertion order
// - LoggingCommand: decorator recording each execution before it happens
// - CommandQueue: deferred FIFO execution
// - RemoteControl: single-slot invoker
// - Concrete commands: LightOn, LightOff, AppendText

pub mod commands;
pub mod history;
pub mod invoker;
pub mod logging;
pub mod macro_command;
pub mod queue;
pub mod state;
pub mod trait_def;

pub use commands::{AppendText, LightOff, LightOn};
pub use history::CommandHistory;
pub use invoker::RemoteControl;
pub use logging::{LogSink, LoggingCommand, TracingSink};
pub use macro_command::MacroCommand;
pub use queue::CommandQueue;
pub use state::{Light, Room, TextBuffer};
pub use trait_def::{Command, CommandError, CommandResult, UndoableCommand};
