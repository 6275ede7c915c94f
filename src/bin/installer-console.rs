use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Form, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use clap::Parser;

use installer_console::config_printer::{self, PrintRequest};
use installer_console::provider::{
    ConfigurationAdmin, FileConfigurationAdmin, FileInfoProvider, InfoProvider,
};
use installer_console::report;

#[path = "installer_console/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "installer_console/page.rs"]
mod page;
use self::page::*;
#[path = "installer_console/handlers_installer.rs"]
mod handlers_installer;
use self::handlers_installer::*;
#[path = "installer_console/handlers_config_printer.rs"]
mod handlers_config_printer;
use self::handlers_config_printer::*;
#[path = "installer_console/routes.rs"]
mod routes;
use self::routes::*;

#[derive(Clone)]
struct AppState {
    installer: Arc<dyn InfoProvider>,
    config_admin: Arc<dyn ConfigurationAdmin>,
}

#[derive(Parser)]
#[command(name = "installer-console")]
#[command(about = "Web console views for the component installer", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Directory holding installation-state.json and configurations/
    #[arg(long, default_value = "./installer-data")]
    data_dir: PathBuf,

    /// Log filter directives (e.g. `info`, `installer_console=debug`)
    #[arg(long, env = "INSTALLER_CONSOLE_LOG", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    installer_console::logging::init(&args.log_level)?;

    let state = Arc::new(AppState {
        installer: Arc::new(FileInfoProvider::new(&args.data_dir)),
        config_admin: Arc::new(FileConfigurationAdmin::new(&args.data_dir)),
    });
    tracing::info!(data_dir = %args.data_dir.display(), "serving installer data");

    let app = console_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    tracing::info!(%local_addr, "installer-console listening");

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
