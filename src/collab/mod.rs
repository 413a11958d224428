//! Boundaries to external services: page metadata lookup and image hosting.

pub mod hosting;
pub mod metadata;

pub use hosting::{HOSTING_DENSITY, HostedImage, ImageHost, host_surface};
pub use metadata::{MetadataOutcome, MetadataResult, MetadataSource, apply_metadata, fetch_metadata};
