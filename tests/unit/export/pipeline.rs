use super::*;
use crate::config::model::{BackgroundKind, CardConfig, PatternKind};
use crate::render::{AssetResolver, render_surface};

fn engine() -> RasterEngine {
    RasterEngine::load(&FontSources::default())
}

fn surface() -> Surface {
    let cfg = CardConfig {
        background_kind: BackgroundKind::Solid,
        solid_color: "#336699".into(),
        pattern: PatternKind::None,
        noise_intensity: 0.0,
        ..CardConfig::default()
    };
    render_surface(&cfg, &mut AssetResolver::offline()).unwrap()
}

fn half() -> PixelDensity {
    PixelDensity::new(0.5).unwrap()
}

#[test]
fn default_options_download_png_at_density_three() {
    let opts = ExportOptions::default();
    assert_eq!(opts.format, ExportFormat::Png);
    assert_eq!(opts.density.get(), 3.0);
}

#[test]
fn pending_engine_is_not_ready() {
    let engine = RasterEngine::pending();
    assert!(!engine.is_ready());
    let err = engine
        .export(&surface(), &ExportOptions::new(ExportFormat::Png, half()))
        .unwrap_err();
    assert!(matches!(err, OgError::NotReady(_)));
    assert!(err.user_message().contains("not loaded yet"));
}

#[test]
fn png_export_matches_density_dimensions() {
    let art = engine()
        .export(&surface(), &ExportOptions::new(ExportFormat::Png, half()))
        .unwrap();
    assert_eq!((art.width, art.height), (600, 315));
    assert_eq!(art.format, ExportFormat::Png);
    assert_eq!(art.degraded_from, None);
    let decoded = image::load_from_memory(&art.bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (600, 315));
    assert_eq!(decoded.get_pixel(1, 1).0, [0x33, 0x66, 0x99, 0xff]);
}

#[test]
fn native_webp_is_tagged_webp() {
    let art = engine()
        .export(&surface(), &ExportOptions::new(ExportFormat::Webp, half()))
        .unwrap();
    assert_eq!(art.format, ExportFormat::Webp);
    assert_eq!(image::guess_format(&art.bytes).unwrap(), image::ImageFormat::WebP);
    assert!(art.filename().ends_with(".webp"));
}

#[test]
fn webp_without_native_encoder_degrades_to_png_consistently() {
    let engine = engine().without_native_webp();
    assert_eq!(engine.effective_format(ExportFormat::Webp), ExportFormat::Png);
    let art = engine
        .export(&surface(), &ExportOptions::new(ExportFormat::Webp, half()))
        .unwrap();
    assert_eq!(art.format, ExportFormat::Png);
    assert_eq!(art.degraded_from, Some(ExportFormat::Webp));
    assert_eq!(image::guess_format(&art.bytes).unwrap(), image::ImageFormat::Png);
    assert!(art.filename().ends_with(".png"));
    assert_eq!(art.mime(), "image/png");
}

#[test]
fn jpeg_export_is_opaque() {
    let art = engine()
        .export(&surface(), &ExportOptions::new(ExportFormat::Jpeg, half()))
        .unwrap();
    let decoded = image::load_from_memory(&art.bytes).unwrap();
    assert!(!decoded.color().has_alpha());
}

#[test]
fn filename_embeds_timestamp_and_extension() {
    assert_eq!(
        export_filename(ExportFormat::Jpeg, 1_700_000_000_123),
        "og-image-1700000000123.jpeg"
    );
    let art = ExportedArtifact {
        bytes: Vec::new(),
        format: ExportFormat::Png,
        width: 1,
        height: 1,
        degraded_from: None,
    };
    let name = art.filename();
    let stamp: i64 = name
        .strip_prefix("og-image-")
        .and_then(|s| s.strip_suffix(".png"))
        .unwrap()
        .parse()
        .unwrap();
    assert!(stamp > 1_600_000_000_000);
}

#[test]
fn gate_rejects_second_entry_until_released() {
    let gate = InFlightGate::new();
    let guard = gate.try_enter("export").unwrap();
    assert!(gate.is_busy());
    let err = gate.try_enter("upload").unwrap_err();
    assert!(matches!(err, OgError::Busy(_)));
    drop(guard);
    assert!(!gate.is_busy());
    assert!(gate.try_enter("export").is_ok());
}

#[test]
fn gate_releases_when_the_operation_fails() {
    let gate = InFlightGate::new();
    let run = || -> OgResult<()> {
        let _guard = gate.try_enter("export")?;
        Err(OgError::encode("boom"))
    };
    assert!(run().is_err());
    assert!(!gate.is_busy());
}
