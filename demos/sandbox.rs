//! The windowed sandbox
//!
//! Generates a 3x3 chunk world from a fixed seed and opens the first-person
//! viewer. WASD moves, Q/E raise and lower, mouse looks, Escape quits.
//!
//! Run with `cargo run --example sandbox`. Set `RUST_LOG=debug` for
//! per-chunk generation logs.

use embervox::{Engine, EngineConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = EngineConfig {
        window_title: "Embervox Sandbox".to_string(),
        ..Default::default()
    };

    Engine::new(config)?.run()
}
