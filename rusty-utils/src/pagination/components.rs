//! Navigation button row built from a pager's button specs.

use rusty_core::{ButtonRole, ButtonSpec, PagerButtons};
use twilight_model::channel::message::component::{ActionRow, Button, ButtonStyle, Component};

/// Style used when a spec leaves its style unset.
const FALLBACK_STYLE: ButtonStyle = ButtonStyle::Secondary;

/// Build the first/previous/next/last row for a paginated message.
///
/// `current_page` is zero-based. Returns no rows when there is nothing to page through.
pub fn build_nav_components(
    buttons: &PagerButtons,
    current_page: usize,
    total_pages: usize,
) -> Vec<Component> {
    if total_pages <= 1 {
        return vec![];
    }

    let last_page = total_pages - 1;
    let components = buttons
        .iter()
        .map(|(role, spec)| {
            let disabled = match role {
                ButtonRole::JumpToFirstPage | ButtonRole::PreviousPage => current_page == 0,
                ButtonRole::NextPage | ButtonRole::JumpToLastPage => current_page >= last_page,
            };
            Component::Button(build_button(spec, disabled))
        })
        .collect();

    vec![Component::ActionRow(ActionRow {
        id: None,
        components,
    })]
}

fn build_button(spec: &ButtonSpec, disabled: bool) -> Button {
    Button {
        id: None,
        custom_id: Some(spec.custom_id().to_owned()),
        disabled,
        emoji: spec.emoji.clone(),
        label: spec.label.clone(),
        style: spec.style.unwrap_or(FALLBACK_STYLE),
        url: None,
        sku_id: None,
    }
}
