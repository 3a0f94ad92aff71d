/// Options used when creating a command channel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkerOptions {
    bound: Option<usize>,
}

impl WorkerOptions {
    /// Limit how many commands can be waiting at once
    ///
    /// With a bound, `send` blocks while the channel is full. `None` (the
    /// default) means the channel grows without limit.
    pub fn with_bound(mut self, bound: Option<usize>) -> Self {
        self.bound = bound;
        self
    }

    pub(crate) fn bound(&self) -> Option<usize> {
        self.bound
    }
}
