use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io::{self, Write};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use storefront::application::engine::StorefrontEngine;
use storefront::domain::catalog::Catalog;
use storefront::domain::ports::CartStoreBox;
use storefront::infrastructure::in_memory::InMemoryCartStore;
use storefront::interfaces::csv::catalog_reader::CatalogReader;
use storefront::interfaces::http;
use storefront::telemetry;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address the HTTP server listens on
    #[arg(long, env = "STOREFRONT_BIND", default_value = "127.0.0.1:4000")]
    bind: SocketAddr,

    /// Catalog CSV file (id,name,price). Uses the built-in demo catalog if omitted.
    #[arg(long, env = "STOREFRONT_CATALOG")]
    catalog: Option<PathBuf>,

    /// Print the catalog as JSON and exit instead of serving
    #[arg(long)]
    print_catalog: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init();

    let catalog = match cli.catalog {
        Some(path) => {
            let catalog = CatalogReader::from_path(&path)
                .and_then(CatalogReader::into_catalog)
                .into_diagnostic()?;
            tracing::info!(path = %path.display(), items = catalog.len(), "catalog loaded");
            catalog
        }
        None => Catalog::demo().into_diagnostic()?,
    };

    if catalog.is_empty() {
        tracing::warn!("catalog is empty; every add to cart will be rejected");
    }

    if cli.print_catalog {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, catalog.list()).into_diagnostic()?;
        writeln!(out).into_diagnostic()?;
        return Ok(());
    }

    let cart_store: CartStoreBox = Box::new(InMemoryCartStore::new());
    let engine = Arc::new(StorefrontEngine::new(Arc::new(catalog), cart_store));
    let app = http::build_app(engine);

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .into_diagnostic()?;
    tracing::info!("listening on http://{}", listener.local_addr().into_diagnostic()?);

    axum::serve(listener, app).await.into_diagnostic()?;
    Ok(())
}
