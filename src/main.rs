use flatframe::{generate, GeneratorConfig};
use tracing::error;

fn main() {
    tracing_subscriber::fmt::init();

    let config = GeneratorConfig::default();
    if let Err(err) = generate(&config) {
        error!("frame generation failed: {err}");
        std::process::exit(1);
    }
}
