use std::io::{self, BufRead, Write};

use anyhow::Context as _;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rusty_core::Pager;
use rusty_utils::pagination::build_page_view;

mod config;

use config::PreviewConfig;

fn main() -> anyhow::Result<()> {
    // Load the .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = PreviewConfig::from_env()?;

    let lines = io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<String>, _>>()
        .context("failed to read stdin")?;

    let mut pager = Pager::new(None);
    pager.configure_buttons(config.overrides.clone());
    let added = pager.add_dynamic_pages(&lines, config.max_per_page, Some(&config.separator))?;
    info!(lines = lines.len(), pages = added, "built pager from stdin");

    let (embed, components) = build_page_view(&pager, &config.title, config.page_index)?;
    let payload = serde_json::json!({
        "embed": embed,
        "components": components,
    });

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &payload)?;
    writeln!(stdout)?;

    Ok(())
}
