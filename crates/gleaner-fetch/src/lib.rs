//! Gleaner Fetch
//!
//! Retrieves articles from the web and reduces them to plain readable text.
//!
//! The only public entry point is [`PageFetcher`], the production
//! implementation of the `ContentFetcher` seam from `gleaner-domain`:
//! download a page over HTTPS, strip the non-article chrome, normalize
//! whitespace, and hand back a `SourceDocument` keyed by its URL.

#![warn(missing_docs)]

mod fetcher;
mod html;

pub use fetcher::{FetchError, PageFetcher};
pub use html::extract_text;
