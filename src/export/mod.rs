//! Export pipeline: surface to encoded raster at a chosen density and format.

pub mod encode;
pub mod pipeline;

pub use encode::{ExportFormat, encode_raster};
pub use pipeline::{
    DEFAULT_DOWNLOAD_DENSITY, ExportOptions, ExportedArtifact, InFlightGate, InFlightGuard,
    RasterEngine, export_filename,
};
