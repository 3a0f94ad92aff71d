mod command;
mod fn_command;
mod id;
mod print_command;

pub use command::Command;
pub use fn_command::FnCommand;
pub use id::Id;
pub use print_command::PrintCommand;
