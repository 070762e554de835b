//! Stable facade for turning pager data into twilight components.

mod components;
mod page;
mod view;

pub use components::build_nav_components;
pub use page::{clamp_page, parse_one_based_page, target_page, total_pages};
pub use view::build_page_view;
