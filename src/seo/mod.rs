//! Social preview snippets for the page the card belongs to.

pub mod meta;

pub use meta::{MetaTags, PLACEHOLDER_IMAGE_URL, twitter_domain};
