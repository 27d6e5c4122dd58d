// LoggingCommand - Decorator recording every execution before it happens

use crate::command::trait_def::{Command, CommandResult, UndoableCommand};
use tracing::{debug, info};

/// Destination for execution records
///
/// Any `FnMut(&'static str, &str)` closure is a sink, receiving the command
/// kind and its description.
pub trait LogSink {
    fn record(&mut self, kind: &'static str, description: &str);
}

impl<F: FnMut(&'static str, &str)> LogSink for F {
    fn record(&mut self, kind: &'static str, description: &str) {
        self(kind, description)
    }
}

/// Sink emitting one `info` level tracing event per record
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn record(&mut self, kind: &'static str, description: &str) {
        info!(command = kind, description, "executing command");
    }
}

/// Wraps a command and records each execution before delegating to it
///
/// The record is written before the wrapped command runs, so it is present
/// even when the command fails.
pub struct LoggingCommand<C, S = TracingSink> {
    inner: C,
    sink: S,
}

impl<C> LoggingCommand<C> {
    /// Wrap `inner`, logging through `tracing`
    pub fn new(inner: C) -> Self {
        Self::with_sink(inner, TracingSink)
    }
}

impl<C, S: LogSink> LoggingCommand<C, S> {
    pub fn with_sink(inner: C, sink: S) -> Self {
        Self { inner, sink }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<R, C, S> Command<R> for LoggingCommand<C, S>
where
    R: ?Sized,
    C: Command<R>,
    S: LogSink,
{
    fn execute(&mut self, target: &mut R) -> CommandResult<()> {
        let kind = self.inner.kind();
        self.sink.record(kind, &self.inner.description());
        self.inner.execute(target)
    }

    fn description(&self) -> String {
        format!("Log({})", self.inner.description())
    }
}

impl<R, C, S> UndoableCommand<R> for LoggingCommand<C, S>
where
    R: ?Sized,
    C: UndoableCommand<R>,
    S: LogSink,
{
    fn undo(&mut self, target: &mut R) -> CommandResult<()> {
        debug!(command = self.inner.kind(), "undoing command");
        self.inner.undo(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::commands::{AppendText, LightOn};
    use crate::command::history::CommandHistory;
    use crate::command::state::{Light, TextBuffer};
    use crate::command::trait_def::CommandError;
    use std::cell::RefCell;
    use std::fmt;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    type Trail = Rc<RefCell<Vec<String>>>;

    // Pushes "effect" into the shared trail
    struct Effect;

    impl Command<Trail> for Effect {
        fn execute(&mut self, target: &mut Trail) -> CommandResult<()> {
            target.borrow_mut().push("effect".to_string());
            Ok(())
        }
    }

    struct Fails;

    impl Command<Trail> for Fails {
        fn execute(&mut self, _target: &mut Trail) -> CommandResult<()> {
            Err(CommandError::ExecutionFailed("nope".into()))
        }
    }

    fn trail_sink(trail: &Trail) -> impl FnMut(&'static str, &str) + use<> {
        let trail = Rc::clone(trail);
        move |kind: &'static str, _description: &str| trail.borrow_mut().push(format!("log:{kind}"))
    }

    #[test]
    fn test_record_precedes_effect() {
        let mut trail: Trail = Rc::default();
        let mut logged = LoggingCommand::with_sink(Effect, trail_sink(&trail));

        logged.execute(&mut trail).unwrap();
        assert_eq!(*trail.borrow(), ["log:Effect", "effect"]);
    }

    #[test]
    fn test_one_record_per_execution() {
        let mut trail: Trail = Rc::default();
        let mut logged = LoggingCommand::with_sink(Effect, trail_sink(&trail));

        logged.execute(&mut trail).unwrap();
        logged.execute(&mut trail).unwrap();
        assert_eq!(
            *trail.borrow(),
            ["log:Effect", "effect", "log:Effect", "effect"]
        );
    }

    #[test]
    fn test_record_written_even_when_inner_fails() {
        let mut trail: Trail = Rc::default();
        let mut logged = LoggingCommand::with_sink(Fails, trail_sink(&trail));

        assert!(logged.execute(&mut trail).is_err());
        assert_eq!(*trail.borrow(), ["log:Fails"]);
    }

    #[test]
    fn test_wraps_boxed_command() {
        let mut names = Vec::new();
        let inner: Box<dyn Command<Light>> = Box::new(LightOn::new());
        let mut light = Light::new();

        LoggingCommand::with_sink(inner, |kind: &'static str, _: &str| names.push(kind))
            .execute(&mut light)
            .unwrap();

        assert!(light.is_on());
        assert_eq!(names, ["LightOn"]);
    }

    #[test]
    fn test_tracing_sink_delegates() {
        let mut buffer = TextBuffer::new();
        let mut logged = LoggingCommand::new(AppendText::new("Hello"));

        logged.execute(&mut buffer).unwrap();
        assert_eq!(buffer.as_str(), "Hello");
        assert_eq!(
            Command::<TextBuffer>::description(&logged),
            "Log(Append \"Hello\")"
        );
        assert_eq!(logged.inner().text(), "Hello");
    }

    #[test]
    fn test_logged_command_is_undoable_in_history() {
        let mut history: CommandHistory<TextBuffer> = CommandHistory::new();
        let mut buffer = TextBuffer::new();

        history
            .exec(
                Box::new(LoggingCommand::new(AppendText::new("Hello"))),
                &mut buffer,
            )
            .unwrap();
        assert_eq!(buffer.as_str(), "Hello");

        history.undo(&mut buffer).unwrap();
        assert_eq!(buffer.as_str(), "");
    }

    type Journal = Arc<Mutex<Vec<String>>>;

    // Appends "LEVEL:command" for every event carrying a `command` field
    #[derive(Clone, Default)]
    struct EventCapture(Journal);

    struct CommandField(Option<String>);

    impl Visit for CommandField {
        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "command" {
                self.0 = Some(value.to_string());
            }
        }

        fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
    }

    impl<S: Subscriber> Layer<S> for EventCapture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = CommandField(None);
            event.record(&mut visitor);
            if let Some(command) = visitor.0 {
                self.0
                    .lock()
                    .unwrap()
                    .push(format!("{}:{}", event.metadata().level(), command));
            }
        }
    }

    fn with_event_capture(capture: &EventCapture, f: impl FnOnce()) {
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        tracing::subscriber::with_default(subscriber, f);
    }

    // Pushes "effect" into the journal it runs against
    struct Stamp;

    impl Command<Journal> for Stamp {
        fn execute(&mut self, target: &mut Journal) -> CommandResult<()> {
            target.lock().unwrap().push("effect".to_string());
            Ok(())
        }
    }

    #[test]
    fn test_tracing_sink_emits_one_info_event_per_execution() {
        let capture = EventCapture::default();
        let mut buffer = TextBuffer::new();

        with_event_capture(&capture, || {
            let mut logged = LoggingCommand::new(AppendText::new("ab"));
            logged.execute(&mut buffer).unwrap();
            logged.execute(&mut buffer).unwrap();
        });

        assert_eq!(buffer.as_str(), "abab");
        assert_eq!(
            *capture.0.lock().unwrap(),
            ["INFO:AppendText", "INFO:AppendText"]
        );
    }

    #[test]
    fn test_tracing_sink_event_precedes_effect() {
        let capture = EventCapture::default();
        let mut journal = Arc::clone(&capture.0);

        with_event_capture(&capture, || {
            LoggingCommand::new(Stamp).execute(&mut journal).unwrap();
        });

        assert_eq!(*capture.0.lock().unwrap(), ["INFO:Stamp", "effect"]);
    }
}
