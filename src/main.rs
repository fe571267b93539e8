//! Subtraction Quiz Service Entry Point
//!
//! Loads configuration and starts the HTTP server.

use subtraction_quiz::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
