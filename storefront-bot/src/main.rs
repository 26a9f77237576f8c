use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use storefront_catalog::ProductCatalog;
use storefront_commands::render::render_page;
use storefront_commands::{Dispatch, Session, apply_query, handle_line};
use storefront_core::{Context, Settings};
use storefront_utils::debounce::spawn_debouncer;

const QUERY_CHANNEL_CAPACITY: usize = 32;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load the .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the page output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_env()?;
    let catalog = load_catalog(&settings);
    let ctx = Context::new(catalog, settings);
    info!(
        products = ctx.catalog.len(),
        page_size = ctx.settings.page_size,
        "storefront ready"
    );

    let mut session = Session::from_context(&ctx);
    let (query_tx, query_rx) = mpsc::channel::<String>(QUERY_CHANNEL_CAPACITY);
    let mut debounced = spawn_debouncer(ctx.settings.debounce, query_rx);
    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut buf = Vec::new();

    println!("{}", render_page(session.controller()));

    loop {
        tokio::select! {
            read = stdin.read_until(b'\n', &mut buf) => {
                match read {
                    // stdin closed, apply whatever is still pending
                    Ok(0) if buf.is_empty() => break,
                    Ok(_) => {}
                    Err(source) => {
                        warn!(%source, "reading stdin failed, stopping input");
                        break;
                    }
                }
                let line = decode_line(&buf);
                buf.clear();

                match handle_line(&mut session, &line) {
                    Dispatch::Reply(text) => println!("{text}"),
                    Dispatch::Query { text, suggestions } => {
                        if let Some(suggestions) = suggestions {
                            println!("{suggestions}");
                        }
                        query_tx.send(text).await?;
                    }
                    Dispatch::Quit => return Ok(()),
                }
            }
            Some(text) = debounced.recv() => {
                if let Some(page) = apply_query(&mut session, &text) {
                    println!("{page}");
                }
            }
        }
    }

    drop(query_tx);
    while let Some(text) = debounced.recv().await {
        if let Some(page) = apply_query(&mut session, &text) {
            println!("{page}");
        }
    }

    Ok(())
}

/// Decode one raw input line, replacing invalid UTF-8 and dropping the line ending.
fn decode_line(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .trim_end_matches(['\n', '\r'])
        .to_owned()
}

/// Load the configured catalog, degrading to an empty one on any failure.
fn load_catalog(settings: &Settings) -> ProductCatalog {
    let Some(path) = settings.catalog_path.as_ref() else {
        warn!("STOREFRONT_CATALOG is not set, starting with an empty catalog");
        return ProductCatalog::empty();
    };

    match ProductCatalog::load(path) {
        Ok(catalog) => catalog,
        Err(source) => {
            warn!(%source, path = %path.display(), "catalog load failed, starting with an empty catalog");
            ProductCatalog::empty()
        }
    }
}
