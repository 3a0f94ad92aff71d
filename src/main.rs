use courier::{CommandQueue, ConsoleReceiver, PrintCommand};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> courier::Result<()> {
    init_logging();

    // Producer side
    let command = PrintCommand::new("Hello world!");

    let mut queue = CommandQueue::new();
    queue.enqueue(command);

    // Consumer side
    let mut receiver = ConsoleReceiver::new();
    queue.dequeue()?.execute(&mut receiver);

    Ok(())
}
