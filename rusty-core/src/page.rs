//! Page records and the input shapes accepted when adding them.

use serde::{Deserialize, Serialize};

/// One unit of displayable content, addressed only by its position in a pager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Optional heading. Never `Some("")`; empty titles are stored as `None`.
    pub title: Option<String>,
    /// Page body.
    pub content: String,
}

impl Page {
    /// Create an untitled page.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: content.into(),
        }
    }

    /// Create a titled page. An empty title is normalized to no title.
    pub fn titled(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: normalize_title(Some(title.into())),
            content: content.into(),
        }
    }

    /// Title to display, falling back to `fallback` when the page has none.
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(fallback)
    }

    pub(crate) fn normalized(self) -> Self {
        Self {
            title: normalize_title(self.title),
            content: self.content,
        }
    }
}

fn normalize_title(title: Option<String>) -> Option<String> {
    title.filter(|value| !value.is_empty())
}

/// A single page to append: bare content or a full record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageInput {
    /// Content only; the page gets no title.
    Text(String),
    /// Title and content; the title is normalized on insert.
    Record(Page),
}

impl PageInput {
    pub(crate) fn into_page(self) -> Page {
        match self {
            Self::Text(content) => Page::new(content),
            Self::Record(page) => page.normalized(),
        }
    }
}

impl From<&str> for PageInput {
    fn from(content: &str) -> Self {
        Self::Text(content.to_owned())
    }
}

impl From<String> for PageInput {
    fn from(content: String) -> Self {
        Self::Text(content)
    }
}

impl From<Page> for PageInput {
    fn from(page: Page) -> Self {
        Self::Record(page)
    }
}

/// A homogeneous batch of pages to append in order.
///
/// Strings and records cannot be mixed in one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBatch {
    Texts(Vec<String>),
    Records(Vec<Page>),
}

impl PageBatch {
    pub fn len(&self) -> usize {
        match self {
            Self::Texts(texts) => texts.len(),
            Self::Records(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn into_pages(self) -> Vec<Page> {
        match self {
            Self::Texts(texts) => texts.into_iter().map(Page::new).collect(),
            Self::Records(records) => records.into_iter().map(Page::normalized).collect(),
        }
    }
}

impl From<Vec<String>> for PageBatch {
    fn from(texts: Vec<String>) -> Self {
        Self::Texts(texts)
    }
}

impl From<Vec<&str>> for PageBatch {
    fn from(texts: Vec<&str>) -> Self {
        Self::Texts(texts.into_iter().map(ToOwned::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PageBatch {
    fn from(texts: [&str; N]) -> Self {
        Self::Texts(texts.into_iter().map(ToOwned::to_owned).collect())
    }
}

impl From<Vec<Page>> for PageBatch {
    fn from(records: Vec<Page>) -> Self {
        Self::Records(records)
    }
}

impl<const N: usize> From<[Page; N]> for PageBatch {
    fn from(records: [Page; N]) -> Self {
        Self::Records(records.into())
    }
}
