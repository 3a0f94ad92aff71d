mod command_channel;
mod command_worker;
mod worker_options;

pub use command_channel::create_command_channel;
pub use command_channel::CommandSender;
pub use command_worker::CommandWorker;
pub use worker_options::WorkerOptions;
