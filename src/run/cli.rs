use anyhow::Result;

use crate::backend::HttpBackend;
use crate::config::Config;
use crate::ui::app::{PageKind, Route};

pub(crate) async fn as_cli(args: &[String], config: Config) -> Result<()> {
    match args[1].as_str() {
        "serve" => super::as_server(with_flags(&args[2..], config)).await,
        "render" => cli_render(&args[2..], with_flags(&args[2..], config)).await,
        "routes" => {
            cli_routes();
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("finn-dash {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("finn-dash - dashboard for the Finn personal finance backend");
    println!();
    println!("Usage: finn-dash [command]");
    println!();
    println!("Commands:");
    println!("  (none), serve                 Serve the dashboard over HTTP");
    println!("    --listen <addr>             Address to listen on (default: 127.0.0.1:3000)");
    println!("    --backend <url>             Finn JSON API base URL (default: http://localhost:8080)");
    println!("  render </path[?query]>        Render one page to stdout");
    println!("    --backend <url>             Finn JSON API base URL");
    println!("  routes                        List the pages the dashboard can show");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Environment: FINN_BACKEND_URL, FINN_LISTEN, RUST_LOG");
}

fn flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == name)
        .map(|w| w[1].as_str())
}

/// Command-line flags override the config file and environment.
pub(crate) fn with_flags(args: &[String], mut config: Config) -> Config {
    if let Some(listen) = flag(args, "--listen") {
        config.listen = listen.to_string();
    }
    if let Some(url) = flag(args, "--backend") {
        config.backend_url = url.to_string();
    }
    if let Some(href) = flag(args, "--stylesheet") {
        config.stylesheet = Some(href.to_string());
    }
    config
}

async fn cli_render(args: &[String], config: Config) -> Result<()> {
    let target = args
        .first()
        .filter(|a| a.starts_with('/'))
        .ok_or_else(|| anyhow::anyhow!("Usage: finn-dash render </path[?query]> [--backend <url>]"))?;
    let backend = HttpBackend::new(&config.backend_url, config.request_timeout())?;
    let html = super::render_page(
        &backend,
        Route::parse_target(target),
        config.stylesheet.as_deref(),
    )
    .await?;
    println!("{html}");
    Ok(())
}

fn cli_routes() {
    println!("{:<10} Path", "Page");
    println!("{}", "─".repeat(36));
    for kind in PageKind::all() {
        let path = if kind.needs_id() {
            format!("/{kind}/<id>")
        } else {
            format!("/{kind}[?filter=value...]")
        };
        println!("{:<10} {path}", kind.as_str());
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
