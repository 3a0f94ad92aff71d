mod command_queue;
mod command_sink;
mod pending_command;
mod queue_options;

pub use command_queue::CommandQueue;
pub use command_sink::CommandSink;
pub use pending_command::PendingCommand;
pub use queue_options::QueueOptions;
