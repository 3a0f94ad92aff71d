/// Options used when creating a [`CommandQueue`](crate::CommandQueue)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueueOptions {
    capacity: usize,
}

impl QueueOptions {
    /// Reserve room for `capacity` commands up front
    ///
    /// The queue still grows past this if needed.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }
}
