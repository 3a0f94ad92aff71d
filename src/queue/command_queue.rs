use std::collections::VecDeque;

use crate::{Command, CommandSink, Id, QueueError, QueueOptions, Receiver, Result};

use super::pending_command::PendingCommand;

/// A first-in, first-out holding area for commands
///
/// The queue owns each command from the moment it is enqueued until it is
/// dequeued. It is not shared between threads; see
/// [`create_command_channel`](crate::create_command_channel) for that.
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: VecDeque<PendingCommand>,
}

impl CommandQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with the given options
    pub fn with_options(options: QueueOptions) -> Self {
        Self {
            pending: VecDeque::with_capacity(options.capacity()),
        }
    }

    /// Add a command to the back of the queue
    pub fn enqueue(&mut self, command: impl Command + 'static) -> Id {
        self.enqueue_boxed(Box::new(command))
    }

    /// Add an already boxed command to the back of the queue
    pub fn enqueue_boxed(&mut self, command: Box<dyn Command>) -> Id {
        let pending = PendingCommand::new(command);
        let id = pending.id();

        tracing::debug!(%id, name = pending.name(), depth = self.pending.len() + 1, "enqueued command");

        self.pending.push_back(pending);
        id
    }

    /// Remove the command at the front of the queue
    pub fn dequeue(&mut self) -> Result<PendingCommand> {
        let pending = self.pending.pop_front().ok_or(QueueError::EmptyQueue)?;
        tracing::debug!(id = %pending.id(), name = pending.name(), "dequeued command");
        Ok(pending)
    }

    /// Look at the command at the front of the queue without removing it
    pub fn peek(&self) -> Option<&PendingCommand> {
        self.pending.front()
    }

    /// Dequeue the next command and execute it against `receiver`
    pub fn execute_next(&mut self, receiver: &mut dyn Receiver) -> Result<Id> {
        Ok(self.dequeue()?.execute(receiver))
    }

    /// Execute every queued command in order, leaving the queue empty
    ///
    /// Returns the number of commands executed.
    pub fn execute_all(&mut self, receiver: &mut dyn Receiver) -> usize {
        let mut executed = 0;

        while self.execute_next(receiver).is_ok() {
            executed += 1;
        }

        executed
    }

    /// Number of commands waiting
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether there is nothing waiting
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl CommandSink for CommandQueue {
    fn submit(&mut self, command: Box<dyn Command>) -> Result<Id> {
        Ok(self.enqueue_boxed(command))
    }
}
