use crate::Receiver;

/// A unit of deferred work
///
/// A command owns whatever data it needs and knows how to apply itself to a
/// [`Receiver`]. The receiver is lent to the command only for the duration of
/// `execute`, so one receiver can serve any number of commands.
pub trait Command: Send {
    /// Run the command against `receiver`
    fn execute(&self, receiver: &mut dyn Receiver);

    /// A short label for this kind of command, used in logs
    fn name(&self) -> &str {
        "command"
    }
}

impl<C: Command + ?Sized> Command for Box<C> {
    fn execute(&self, receiver: &mut dyn Receiver) {
        (**self).execute(receiver)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
