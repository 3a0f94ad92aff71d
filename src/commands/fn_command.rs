use crate::{Command, Receiver};

type Operation = dyn Fn(&mut dyn Receiver) + Send;

/// A command whose operation is a closure bound when it is created
///
/// Anything the closure captures becomes the command's payload. Because the
/// operation is required up front there is no such thing as a command with
/// nothing to run.
pub struct FnCommand {
    name: String,
    operation: Box<Operation>,
}

impl FnCommand {
    /// Create a named command from an operation
    pub fn new<F>(name: impl Into<String>, operation: F) -> Self
    where
        F: Fn(&mut dyn Receiver) + Send + 'static,
    {
        Self {
            name: name.into(),
            operation: Box::new(operation),
        }
    }
}

impl Command for FnCommand {
    fn execute(&self, receiver: &mut dyn Receiver) {
        (self.operation)(receiver)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for FnCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCommand")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
