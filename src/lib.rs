// Command Deck - Library exports for tests and the demo binary

pub mod command;
pub mod settings;

// Re-export commonly used types for convenience
pub use command::{
    AppendText, Command, CommandError, CommandHistory, CommandQueue, CommandResult, Light,
    LightOff, LightOn, LoggingCommand, MacroCommand, RemoteControl, Room, TextBuffer,
    UndoableCommand,
};
pub use settings::{FailurePolicy, Settings, SettingsError};
