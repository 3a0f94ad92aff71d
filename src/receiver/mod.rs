mod console_receiver;
mod receiver;
mod recording_receiver;
mod writer_receiver;

pub use console_receiver::ConsoleReceiver;
pub use receiver::Receiver;
pub use recording_receiver::RecordingReceiver;
pub use writer_receiver::WriterReceiver;
