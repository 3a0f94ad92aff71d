use crate::Receiver;

/// A receiver that remembers everything it was asked to print
///
/// Useful wherever the output needs inspecting rather than emitting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingReceiver {
    printed: Vec<String>,
}

impl RecordingReceiver {
    /// Create an empty recording
    pub fn new() -> Self {
        Self::default()
    }

    /// Every text printed so far, in order
    pub fn printed(&self) -> &[String] {
        &self.printed
    }

    /// Everything printed so far, concatenated
    pub fn output(&self) -> String {
        self.printed.concat()
    }

    /// Forget everything recorded
    pub fn clear(&mut self) {
        self.printed.clear();
    }
}

impl Receiver for RecordingReceiver {
    fn print(&mut self, text: &str) {
        self.printed.push(text.to_owned());
    }
}
