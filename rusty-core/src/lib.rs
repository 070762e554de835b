/// Navigation button roles and presentation.
pub mod button;
/// Pager error types.
pub mod error;
/// Page records and input shapes.
pub mod page;
mod pager;

pub use button::{ButtonOverride, ButtonOverrides, ButtonRole, ButtonSpec, PagerButtons};
pub use error::PagerError;
pub use page::{Page, PageBatch, PageInput};
pub use pager::{DEFAULT_SEPARATOR, Pager};
