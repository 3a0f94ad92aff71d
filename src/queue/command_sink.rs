use crate::{Command, Id, Result};

/// Somewhere a producer can hand commands to
pub trait CommandSink {
    /// Transfer ownership of `command` to the sink
    fn submit(&mut self, command: Box<dyn Command>) -> Result<Id>;
}
