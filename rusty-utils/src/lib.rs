/// Embed builders for individual pages.
pub mod embed;
/// Navigation components and page math.
pub mod pagination;
/// Pure parser helpers.
pub mod parse;
