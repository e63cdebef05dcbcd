//! pagerect - element, viewport, window and frame geometry of Chrome tabs.
//!
//! Main entry point for the pagerect CLI.

mod cli;
mod report;

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pagerect_cdp::{CdpClient, CdpError, PageSession};
use pagerect_config::{Config, ConfigLoader, ConfigValidator, LogFormat, LoggingConfig};
use pagerect_geometry::{ElementGeometry, ElementRef, FrameGeometry, WindowGeometry};

use cli::{Cli, Commands, TabArgs};
use report::{ElementReport, FrameReport, TabReport, WindowReport};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::load_or_default(&config_path(&cli.config))?;
    if let Some(endpoint) = cli.endpoint {
        config.browser.endpoint = endpoint;
    }

    init_tracing(&config.logging);

    for warning in ConfigValidator::validate(&config).into_result()? {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    let client = CdpClient::connect_with_timeout(
        &config.browser.endpoint,
        Duration::from_secs(config.browser.request_timeout_secs),
    )
    .await?;
    info!("Connected to {}", client.browser_ws_url());

    match cli.command {
        Commands::Tabs => {
            let pages = client.list_pages().await?;
            print_json(&TabReport::from_pages(pages))?;
        }
        Commands::Window { tab } => {
            let session = open_tab(&client, &config, &tab).await?;
            let window = WindowGeometry::with_chrome(&session, config.chrome);
            print_json(&WindowReport::collect(&window).await?)?;
        }
        Commands::Element { selector, tab } => {
            let session = open_tab(&client, &config, &tab).await?;
            let window = WindowGeometry::with_chrome(&session, config.chrome);
            let element = locate(&session, &selector).await?;
            let geometry = ElementGeometry::new(&session, &element, &window)
                .with_click_y_bias(config.chrome.click_y_bias);
            print_json(&ElementReport::collect(&geometry).await?)?;
        }
        Commands::Frame {
            selector,
            inner,
            tab,
        } => {
            let session = open_tab(&client, &config, &tab).await?;
            let window = WindowGeometry::with_chrome(&session, config.chrome);

            let host_node = session.find_node(&selector).await?;
            let frame_id = host_node.frame_id.clone().ok_or_else(|| {
                CdpError::InvalidResponse(format!("{} is not a frame owner", selector))
            })?;
            let host_element = ElementRef::new(host_node.backend_node_id);

            let target = client.find_frame_target(&frame_id).await?;
            debug!("Frame {} is rendered by target {}", frame_id, target.target_id);
            let frame_session = client.attach_page(&target.target_id).await?;

            let host = ElementGeometry::new(&session, &host_element, &window)
                .with_click_y_bias(config.chrome.click_y_bias);
            let frame = FrameGeometry::new(host, &frame_session);

            let mut report =
                FrameReport::collect(frame_id, target.target_id.clone(), &frame).await?;
            if let Some(inner) = inner {
                let element = locate(&frame_session, &inner).await?;
                let geometry = ElementGeometry::new(&frame_session, &element, &frame)
                    .with_click_y_bias(config.chrome.click_y_bias);
                report.inner = Some(ElementReport::collect(&geometry).await?);
            }
            print_json(&report)?;
        }
    }

    Ok(())
}

/// Resolve `~` in the `--config` path.
fn config_path(path: &Path) -> PathBuf {
    PathBuf::from(ConfigLoader::expand_path(&path.to_string_lossy()))
}

/// Log to stderr so stdout carries only the JSON report.
fn init_tracing(logging: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match logging.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

/// Attach to the requested tab, or open a new one when a URL is given.
async fn open_tab(
    client: &CdpClient,
    config: &Config,
    tab: &TabArgs,
) -> Result<PageSession, CdpError> {
    let session = match (&tab.url, &tab.target) {
        (Some(url), _) => {
            info!("Opening {}", url);
            let session = client.new_page(Some(url)).await?;
            session
                .wait_for_load(Duration::from_secs(config.browser.load_timeout_secs))
                .await?;
            session
        }
        (None, Some(target_id)) => client.attach_page(target_id).await?,
        (None, None) => client.attach_first_page().await?,
    };
    debug!(
        "Attached to target {} (session {})",
        session.target_id(),
        session.session_id()
    );
    Ok(session)
}

async fn locate(session: &PageSession, selector: &str) -> Result<ElementRef, CdpError> {
    let node = session.find_node(selector).await?;
    Ok(ElementRef::new(node.backend_node_id).with_node_id(node.node_id))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
