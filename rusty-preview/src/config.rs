//! Environment-driven settings for the preview host.

use anyhow::Context as _;
use rusty_core::{ButtonOverride, ButtonOverrides, ButtonRole, DEFAULT_SEPARATOR};
use rusty_utils::{pagination::parse_one_based_page, parse::parse_emoji};

const DEFAULT_MAX_PER_PAGE: usize = 10;
const DEFAULT_TITLE: &str = "Pages";

/// Settings read from the process environment (and `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewConfig {
    /// `PAGER_MAX_PER_PAGE`
    pub max_per_page: usize,
    /// `PAGER_SEPARATOR`
    pub separator: String,
    /// `PAGER_TITLE`, used for untitled pages.
    pub title: String,
    /// `PAGER_PAGE`, stored zero-based.
    pub page_index: usize,
    /// `PAGER_{PREV,NEXT,FIRST,LAST}_{LABEL,EMOJI}`
    pub overrides: ButtonOverrides,
}

impl PreviewConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let max_per_page = match lookup("PAGER_MAX_PER_PAGE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("PAGER_MAX_PER_PAGE is not a number: {raw:?}"))?,
            None => DEFAULT_MAX_PER_PAGE,
        };

        let page_raw = lookup("PAGER_PAGE");
        let page_index = parse_one_based_page(page_raw.as_deref())
            .with_context(|| format!("PAGER_PAGE must be a page number from 1: {page_raw:?}"))?;

        let mut overrides = ButtonOverrides::new();
        for role in ButtonRole::ALL {
            let key = env_key(role);
            let mut changes = ButtonOverride::new();
            let mut present = false;

            if let Some(label) = lookup(&format!("PAGER_{key}_LABEL")) {
                changes = changes.label(label);
                present = true;
            }
            if let Some(raw) = lookup(&format!("PAGER_{key}_EMOJI")) {
                let emoji = parse_emoji(&raw)
                    .with_context(|| format!("PAGER_{key}_EMOJI is not an emoji: {raw:?}"))?;
                changes = changes.emoji(emoji);
                present = true;
            }

            if present {
                overrides = overrides.with(role, changes);
            }
        }

        Ok(Self {
            max_per_page,
            separator: lookup("PAGER_SEPARATOR").unwrap_or_else(|| DEFAULT_SEPARATOR.to_owned()),
            title: lookup("PAGER_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            page_index,
            overrides,
        })
    }
}

fn env_key(role: ButtonRole) -> &'static str {
    match role {
        ButtonRole::PreviousPage => "PREV",
        ButtonRole::NextPage => "NEXT",
        ButtonRole::JumpToFirstPage => "FIRST",
        ButtonRole::JumpToLastPage => "LAST",
    }
}
