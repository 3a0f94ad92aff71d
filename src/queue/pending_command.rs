use crate::{Command, Id, Receiver};

/// A command that has been queued but not yet executed
///
/// Executing consumes it, so each queued command runs at most once.
pub struct PendingCommand {
    id: Id,
    command: Box<dyn Command>,
}

impl PendingCommand {
    pub(crate) fn new(command: Box<dyn Command>) -> Self {
        Self {
            id: Id::generate(),
            command,
        }
    }

    /// The id assigned when the command was queued
    pub fn id(&self) -> Id {
        self.id
    }

    /// The command's label
    pub fn name(&self) -> &str {
        self.command.name()
    }

    /// Run the command against `receiver`
    pub fn execute(self, receiver: &mut dyn Receiver) -> Id {
        tracing::debug!(id = %self.id, name = self.name(), "executing command");
        self.command.execute(receiver);
        self.id
    }

    /// Take the command out without running it
    pub fn into_command(self) -> Box<dyn Command> {
        self.command
    }
}

impl std::fmt::Debug for PendingCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingCommand")
            .field("id", &self.id)
            .field("name", &self.name())
            .finish()
    }
}
