// Amount Kit - Web Server
// REST API over the amount validators and schema registry

use amount_kit::server::{router, AppState};
use amount_kit::{register_amount_schemas, SchemaRegistry};
use anyhow::{Context, Result};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    println!("🌐 Amount Kit - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Registry is built once here, then shared read-only
    let mut registry = SchemaRegistry::new();
    register_amount_schemas(&mut registry)?;
    println!("✓ Registered {} schemas", registry.count());

    let app = router(AppState::new(registry));

    let addr = std::env::var("AMOUNT_KIT_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    log::info!("Listening on {}", addr);
    println!("\n🚀 Server running on http://{}", addr);
    println!("   Schemas:  GET  /api/schemas");
    println!("   Validate: POST /api/validate/:kind");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
