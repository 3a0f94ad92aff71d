use std::io::Stdout;

use crate::{Receiver, WriterReceiver};

/// A receiver that prints to standard output
///
/// Text is written exactly as given and flushed straight away. No newline is
/// added.
pub struct ConsoleReceiver {
    stdout: WriterReceiver<Stdout>,
}

impl ConsoleReceiver {
    /// Create a receiver attached to the process's standard output
    pub fn new() -> Self {
        Self {
            stdout: WriterReceiver::new(std::io::stdout()),
        }
    }
}

impl Default for ConsoleReceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl Receiver for ConsoleReceiver {
    fn print(&mut self, text: &str) {
        self.stdout.print(text);
    }
}
