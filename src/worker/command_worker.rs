use std::{thread, time::Duration};

use crossbeam::channel::{self, RecvTimeoutError};

use crate::{queue::PendingCommand, Id, QueueError, Receiver, Result};

/// The consuming end of a command channel
///
/// Commands come out in the order they were sent and each is executed
/// exactly once.
pub struct CommandWorker {
    command_rx: channel::Receiver<PendingCommand>,
}

impl CommandWorker {
    pub(crate) fn new(command_rx: channel::Receiver<PendingCommand>) -> Self {
        Self { command_rx }
    }

    /// Execute everything that has already arrived, without waiting
    ///
    /// Returns the number of commands executed.
    pub fn process_pending(&mut self, receiver: &mut dyn Receiver) -> usize {
        let mut executed = 0;

        while let Ok(pending) = self.command_rx.try_recv() {
            pending.execute(receiver);
            executed += 1;
        }

        tracing::trace!(executed, "processed pending commands");
        executed
    }

    /// Wait for the next command and execute it
    ///
    /// Fails with [`QueueError::Disconnected`] once every sender has been
    /// dropped and nothing is left to execute.
    pub fn execute_next(&mut self, receiver: &mut dyn Receiver) -> Result<Id> {
        let pending = self
            .command_rx
            .recv()
            .map_err(|_| QueueError::Disconnected)?;

        Ok(pending.execute(receiver))
    }

    /// Like [`execute_next`](Self::execute_next), giving up after `timeout`
    pub fn execute_next_timeout(
        &mut self,
        receiver: &mut dyn Receiver,
        timeout: Duration,
    ) -> Result<Id> {
        let pending = self.command_rx.recv_timeout(timeout).map_err(|error| match error {
            RecvTimeoutError::Timeout => QueueError::Timeout,
            RecvTimeoutError::Disconnected => QueueError::Disconnected,
        })?;

        Ok(pending.execute(receiver))
    }

    /// Execute commands as they arrive until every sender has been dropped
    ///
    /// Returns the number of commands executed.
    pub fn run(&mut self, receiver: &mut dyn Receiver) -> usize {
        let mut executed = 0;

        while self.execute_next(receiver).is_ok() {
            executed += 1;
        }

        tracing::debug!(executed, "all senders dropped, worker finished");
        executed
    }

    /// Move the worker and `receiver` onto a new thread and [`run`](Self::run)
    ///
    /// The receiver is handed back through the join handle once the worker
    /// has finished.
    pub fn spawn<R>(mut self, mut receiver: R) -> thread::JoinHandle<R>
    where
        R: Receiver + Send + 'static,
    {
        thread::spawn(move || {
            self.run(&mut receiver);
            receiver
        })
    }

    /// Number of commands waiting
    pub fn len(&self) -> usize {
        self.command_rx.len()
    }

    /// Whether there is nothing waiting
    pub fn is_empty(&self) -> bool {
        self.command_rx.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::{create_command_channel, PrintCommand, RecordingReceiver, WorkerOptions};

    use super::*;

    #[test]
    fn process_pending_executes_everything_already_sent() {
        let (sender, mut worker) = create_command_channel(WorkerOptions::default());
        let mut receiver = RecordingReceiver::new();

        sender.send(PrintCommand::new("A")).unwrap();
        sender.send(PrintCommand::new("B")).unwrap();

        assert_eq!(worker.len(), 2);
        assert_eq!(worker.process_pending(&mut receiver), 2);
        assert_eq!(worker.process_pending(&mut receiver), 0);
        assert_eq!(receiver.output(), "AB");
    }

    #[test]
    fn times_out_when_nothing_arrives() {
        let (_sender, mut worker) = create_command_channel(WorkerOptions::default());
        let mut receiver = RecordingReceiver::new();

        let result = worker.execute_next_timeout(&mut receiver, Duration::from_millis(10));

        assert_eq!(result, Err(QueueError::Timeout));
    }

    #[test]
    fn disconnected_once_senders_are_gone() {
        let (sender, mut worker) = create_command_channel(WorkerOptions::default());
        let mut receiver = RecordingReceiver::new();

        let id = sender.send(PrintCommand::new("last")).unwrap();
        drop(sender);

        assert_eq!(worker.execute_next(&mut receiver), Ok(id));
        assert_eq!(
            worker.execute_next(&mut receiver),
            Err(QueueError::Disconnected)
        );
        assert_eq!(receiver.output(), "last");
    }

    #[test]
    fn send_fails_once_worker_is_gone() {
        let (sender, worker) = create_command_channel(WorkerOptions::default());
        drop(worker);

        assert_eq!(
            sender.send(PrintCommand::new("lost")),
            Err(QueueError::Disconnected)
        );
    }
}
