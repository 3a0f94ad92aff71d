use std::io::Write;

use crate::Receiver;

/// A receiver that writes text verbatim into any [`Write`] sink
pub struct WriterReceiver<W: Write> {
    writer: W,
}

impl<W: Write> WriterReceiver<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get the writer back
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Receiver for WriterReceiver<W> {
    fn print(&mut self, text: &str) {
        let result = self
            .writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush());

        if let Err(error) = result {
            tracing::warn!(%error, bytes = text.len(), "receiver failed to write");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_text_without_adding_a_newline() {
        let mut receiver = WriterReceiver::new(Vec::new());

        receiver.print("Hello");
        receiver.print(" world!");

        assert_eq!(receiver.into_inner(), b"Hello world!");
    }

    #[test]
    fn write_failure_is_not_fatal() {
        struct BrokenPipe;

        impl Write for BrokenPipe {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut receiver = WriterReceiver::new(BrokenPipe);
        receiver.print("dropped");
        receiver.print("also dropped");
    }
}
