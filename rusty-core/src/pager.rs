//! The pager aggregate: an ordered page list plus its navigation buttons.

use tracing::{debug, warn};
use twilight_model::application::interaction::Interaction;

use crate::button::{ButtonOverrides, ButtonRole, ButtonSpec, PagerButtons};
use crate::error::{PagerError, Result};
use crate::page::{Page, PageBatch, PageInput};

/// Separator used by [`Pager::add_dynamic_pages`] when none is given.
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Ordered pages and navigation buttons for one rendering session.
///
/// A pager only prepares data. The host renders a page, wires the button
/// callbacks, and discards the pager when the session ends.
#[derive(Debug, Clone, Default)]
pub struct Pager {
    pages: Vec<Page>,
    buttons: PagerButtons,
    interaction: Option<Interaction>,
}

impl Pager {
    /// Create an empty pager with default buttons.
    ///
    /// `interaction` is kept for the host's convenience and never read here.
    pub fn new(interaction: Option<Interaction>) -> Self {
        Self {
            pages: Vec::new(),
            buttons: PagerButtons::default(),
            interaction,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn buttons(&self) -> &PagerButtons {
        &self.buttons
    }

    pub fn button(&self, role: ButtonRole) -> &ButtonSpec {
        self.buttons.get(role)
    }

    pub fn interaction(&self) -> Option<&Interaction> {
        self.interaction.as_ref()
    }

    /// Override button style, label, or emoji per role.
    ///
    /// Only `Some` fields replace stored values; custom ids never change.
    pub fn configure_buttons(&mut self, overrides: ButtonOverrides) {
        let touched = self.buttons.configure(overrides);
        debug!(roles = touched, "configured pager buttons");
    }

    /// Append one page built from bare content or a record.
    pub fn add_page(&mut self, input: impl Into<PageInput>) {
        self.pages.push(input.into().into_page());
    }

    /// Append a batch of pages in order, returning how many were added.
    pub fn add_pages(&mut self, batch: impl Into<PageBatch>) -> usize {
        let pages = batch.into().into_pages();
        let added = pages.len();
        self.pages.extend(pages);

        debug!(added, total = self.pages.len(), "added pages");
        added
    }

    /// Remove and return the page at `index`.
    ///
    /// An out-of-range index leaves the pager unchanged and returns `None`.
    pub fn remove_page(&mut self, index: usize) -> Option<Page> {
        if index >= self.pages.len() {
            debug!(index, total = self.pages.len(), "remove_page index out of range");
            return None;
        }

        Some(self.pages.remove(index))
    }

    /// Chunk `items` into pages of at most `max_per_page` entries each.
    ///
    /// Entries in a chunk are joined with `separator`, or a newline when
    /// `None`. Returns the number of pages added.
    pub fn add_dynamic_pages<S: AsRef<str>>(
        &mut self,
        items: &[S],
        max_per_page: usize,
        separator: Option<&str>,
    ) -> Result<usize> {
        if max_per_page == 0 {
            warn!("rejected add_dynamic_pages with max_per_page of 0");
            return Err(PagerError::InvalidArgument {
                name: "max_per_page",
                reason: "must be at least 1",
            });
        }

        let separator = separator.unwrap_or(DEFAULT_SEPARATOR);
        let before = self.pages.len();

        for chunk in items.chunks(max_per_page) {
            let content = chunk
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(separator);
            self.pages.push(Page::new(content));
        }

        let added = self.pages.len() - before;
        debug!(items = items.len(), max_per_page, added, "added dynamic pages");
        Ok(added)
    }
}
