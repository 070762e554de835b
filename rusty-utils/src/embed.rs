use rusty_core::Page;
use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFooterBuilder};

/// Default embed color used for paged messages.
pub const DEFAULT_EMBED_COLOR: u32 = 0x90_54_30;

/// Build the embed for one page.
///
/// Untitled pages use `fallback_title`. The footer shows `Page i/n` only when
/// there is more than one page; `index` is zero-based.
pub fn build_page_embed(
    page: &Page,
    fallback_title: &str,
    index: usize,
    total_pages: usize,
) -> anyhow::Result<Embed> {
    let total_pages = total_pages.max(1);

    let builder = EmbedBuilder::new()
        .title(page.title_or(fallback_title))
        .color(DEFAULT_EMBED_COLOR)
        .description(page.content.as_str());

    let embed = if total_pages > 1 {
        let footer = EmbedFooterBuilder::new(format!("Page {}/{}", index + 1, total_pages)).build();
        builder.footer(footer).validate()?.build()
    } else {
        builder.validate()?.build()
    };

    Ok(embed)
}
