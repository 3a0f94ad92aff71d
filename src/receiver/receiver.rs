/// Something that performs the side effect a command asks for
pub trait Receiver {
    /// Emit `text` to whatever sink this receiver writes to
    fn print(&mut self, text: &str);
}
