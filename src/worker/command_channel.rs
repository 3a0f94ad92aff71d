use crossbeam::channel;

use crate::{
    queue::PendingCommand, Command, CommandSink, CommandWorker, Id, QueueError, Result,
    WorkerOptions,
};

/// Create a connected producer/consumer pair
///
/// The [`CommandSender`] side can be cloned and moved to wherever commands
/// are created. The [`CommandWorker`] side executes them, in the order they
/// were sent, usually on a thread of its own.
pub fn create_command_channel(options: WorkerOptions) -> (CommandSender, CommandWorker) {
    let (command_tx, command_rx) = match options.bound() {
        Some(bound) => channel::bounded(bound),
        None => channel::unbounded(),
    };

    (CommandSender { command_tx }, CommandWorker::new(command_rx))
}

/// The producing end of a command channel
#[derive(Clone)]
pub struct CommandSender {
    command_tx: channel::Sender<PendingCommand>,
}

impl CommandSender {
    /// Send a command to the worker
    pub fn send(&self, command: impl Command + 'static) -> Result<Id> {
        self.send_boxed(Box::new(command))
    }

    /// Send an already boxed command to the worker
    pub fn send_boxed(&self, command: Box<dyn Command>) -> Result<Id> {
        let pending = PendingCommand::new(command);
        let id = pending.id();
        let name = pending.name().to_owned();

        self.command_tx.send(pending).map_err(|_| {
            tracing::warn!(%id, %name, "worker gone, dropping command");
            QueueError::Disconnected
        })?;

        tracing::debug!(%id, %name, "sent command");
        Ok(id)
    }
}

impl CommandSink for CommandSender {
    fn submit(&mut self, command: Box<dyn Command>) -> Result<Id> {
        self.send_boxed(command)
    }
}

impl std::fmt::Debug for CommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSender")
            .field("pending", &self.command_tx.len())
            .finish()
    }
}
