// MacroCommand - Runs an ordered list of child commands as one command

use crate::command::trait_def::{Command, CommandError, CommandResult};
use crate::settings::{FailurePolicy, Settings};
use tracing::{trace, warn};

/// A composite command executing its children in insertion order
///
/// An empty macro executes as a no-op. Failed children are never rolled
/// back; the policy only decides whether later children still run.
pub struct MacroCommand<R: ?Sized> {
    children: Vec<Box<dyn Command<R>>>,
    policy: FailurePolicy,
}

impl<R: ?Sized> MacroCommand<R> {
    pub fn new() -> Self {
        Self::with_policy(FailurePolicy::default())
    }

    pub fn with_policy(policy: FailurePolicy) -> Self {
        Self {
            children: Vec::new(),
            policy,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_policy(settings.macro_failure)
    }

    /// Append a child command
    pub fn add(&mut self, command: Box<dyn Command<R>>) {
        self.children.push(command);
    }

    /// Builder form of [`MacroCommand::add`]
    pub fn with(mut self, command: Box<dyn Command<R>>) -> Self {
        self.add(command);
        self
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<R: ?Sized> Default for MacroCommand<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ?Sized> Command<R> for MacroCommand<R> {
    fn execute(&mut self, target: &mut R) -> CommandResult<()> {
        let mut first_failure = None;

        for (index, child) in self.children.iter_mut().enumerate() {
            trace!(index, command = child.kind(), "running macro child");

            let Err(err) = child.execute(target) else {
                continue;
            };
            warn!(index, command = child.kind(), error = %err, "macro child failed");

            let failure = CommandError::ChildFailed {
                index,
                kind: child.kind(),
                source: Box::new(err),
            };
            match self.policy {
                FailurePolicy::AbortOnFirst => return Err(failure),
                FailurePolicy::ContinueOnError => {
                    first_failure.get_or_insert(failure);
                }
            }
        }

        first_failure.map_or(Ok(()), Err)
    }

    fn description(&self) -> String {
        let names: Vec<String> = self.children.iter().map(|c| c.description()).collect();
        format!("Macro [{}]", names.join(", "))
    }
}
