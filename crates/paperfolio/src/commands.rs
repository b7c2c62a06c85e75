//! CLI command implementations.

use color_eyre::eyre::Result;

use paperfolio_core::Catalog;
use paperfolio_server::{Server, ServerConfig};

/// Start the web server.
pub async fn serve(host: String, port: u16) -> Result<()> {
    tracing::info!("Starting paperfolio server...");

    let addr = format!("{}:{}", host, port).parse()?;
    let config = ServerConfig::builder().addr(addr).build();

    let server = Server::new(config, Catalog::placeholder());
    server.run().await?;

    Ok(())
}

/// Print version and component info.
pub fn version() {
    println!("paperfolio {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Components:");
    println!("  paperfolio-core    - Data model and catalog");
    println!("  paperfolio-server  - HTTP server and rendering");
}
