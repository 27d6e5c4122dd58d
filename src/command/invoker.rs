// RemoteControl - Single-slot invoker

use crate::command::trait_def::{Command, CommandError, CommandResult};
use tracing::debug;

/// Holds one bound command and runs it on demand
///
/// The invoker knows nothing about what the command does. Binding a new
/// command replaces the previous one.
pub struct RemoteControl<R: ?Sized> {
    slot: Option<Box<dyn Command<R>>>,
}

impl<R: ?Sized> RemoteControl<R> {
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Bind a command, returning the previously bound one
    pub fn set_command(&mut self, command: Box<dyn Command<R>>) -> Option<Box<dyn Command<R>>> {
        debug!(command = command.kind(), "command bound");
        self.slot.replace(command)
    }

    /// Execute the bound command
    ///
    /// The command stays bound and can be invoked again.
    pub fn invoke(&mut self, target: &mut R) -> CommandResult<()> {
        let command = self.slot.as_mut().ok_or(CommandError::NoCommandBound)?;
        command.execute(target)
    }

    pub fn has_command(&self) -> bool {
        self.slot.is_some()
    }
}

impl<R: ?Sized> Default for RemoteControl<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::commands::{AppendText, LightOn};
    use crate::command::state::{Light, TextBuffer};

    #[test]
    fn test_invoke_without_command() {
        let mut remote: RemoteControl<Light> = RemoteControl::new();
        let mut light = Light::new();

        assert!(!remote.has_command());
        assert_eq!(remote.invoke(&mut light), Err(CommandError::NoCommandBound));
        assert!(!light.is_on());
    }

    #[test]
    fn test_invoke_bound_command() {
        let mut remote: RemoteControl<Light> = RemoteControl::new();
        let mut light = Light::new();

        assert!(remote.set_command(Box::new(LightOn::new())).is_none());
        remote.invoke(&mut light).unwrap();
        assert!(light.is_on());
    }

    #[test]
    fn test_invoke_repeats_and_rebinds() {
        let mut remote: RemoteControl<TextBuffer> = RemoteControl::new();
        let mut buffer = TextBuffer::new();

        remote.set_command(Box::new(AppendText::new("la")));
        remote.invoke(&mut buffer).unwrap();
        remote.invoke(&mut buffer).unwrap();

        let previous = remote.set_command(Box::new(AppendText::new("!")));
        assert_eq!(previous.map(|c| c.description()).as_deref(), Some("Append \"la\""));
        remote.invoke(&mut buffer).unwrap();

        assert_eq!(buffer.as_str(), "lala!");
    }
}
