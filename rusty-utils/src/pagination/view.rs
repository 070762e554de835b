//! Embed and component composition for a single pager page.

use anyhow::Context as _;
use rusty_core::Pager;
use twilight_model::channel::message::component::Component;
use twilight_model::channel::message::embed::Embed;

use crate::embed::build_page_embed;

use super::components::build_nav_components;
use super::page::clamp_page;

/// Build the embed and navigation row for `page_index` of `pager`.
///
/// The index is clamped into range. Fails when the pager holds no pages.
pub fn build_page_view(
    pager: &Pager,
    fallback_title: &str,
    page_index: usize,
) -> anyhow::Result<(Embed, Vec<Component>)> {
    let total = pager.len();
    let index = clamp_page(page_index, total);
    let page = pager
        .page(index)
        .context("cannot build a view for a pager with no pages")?;

    let embed = build_page_embed(page, fallback_title, index, total)?;
    let components = build_nav_components(pager.buttons(), index, total);

    Ok((embed, components))
}
