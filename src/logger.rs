use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Initializer for logger. Events go to stderr so stdout stays clean for
// shell pipelines.
pub fn init() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set up the global logger");
}
