#![warn(missing_docs)]

//! courier decouples building a unit of work from running it
//!
//! You can use it to:
//! - Wrap data and an operation into a `Command`
//! - Push commands into a queue, in order
//! - Take them out later and execute them against a `Receiver`
//! - Optionally hand the consuming side to another thread
//!
//! # Example
//!
//! ```rust
//! use courier::{CommandQueue, ConsoleReceiver, PrintCommand};
//!
//! let mut queue = CommandQueue::new();
//! queue.enqueue(PrintCommand::new("Hello world!"));
//!
//! let mut receiver = ConsoleReceiver::new();
//! queue.dequeue()?.execute(&mut receiver);
//! # Ok::<(), courier::QueueError>(())
//! ```

mod commands;
mod error;
mod queue;
mod receiver;
mod worker;

pub use commands::Command;
pub use commands::FnCommand;
pub use commands::Id;
pub use commands::PrintCommand;

pub use error::QueueError;
pub use error::Result;

pub use queue::CommandQueue;
pub use queue::CommandSink;
pub use queue::PendingCommand;
pub use queue::QueueOptions;

pub use receiver::ConsoleReceiver;
pub use receiver::Receiver;
pub use receiver::RecordingReceiver;
pub use receiver::WriterReceiver;

pub use worker::create_command_channel;
pub use worker::CommandSender;
pub use worker::CommandWorker;
pub use worker::WorkerOptions;
