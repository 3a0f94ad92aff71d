use crate::{Command, Receiver};

/// Asks the receiver to print a fixed piece of text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintCommand {
    message: String,
}

impl PrintCommand {
    /// Create a command that will print `message` exactly as given
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The text this command prints
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Command for PrintCommand {
    fn execute(&self, receiver: &mut dyn Receiver) {
        receiver.print(&self.message);
    }

    fn name(&self) -> &str {
        "print"
    }
}
