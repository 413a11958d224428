use std::cell::Cell;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::collab::metadata::{METADATA_NOTICE, MetadataResult};
use crate::config::model::{BackgroundKind, PatternKind, TemplateId};
use crate::foundation::core::PixelDensity;
use crate::foundation::error::OgError;
use crate::layout::scene::TextRole;
use crate::render::fonts::FontSources;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
}

fn plain() -> CardConfig {
    CardConfig {
        background_kind: BackgroundKind::Solid,
        pattern: PatternKind::None,
        noise_intensity: 0.0,
        ..CardConfig::default()
    }
}

fn session() -> EditorSession {
    EditorSession::new_on(plain(), RasterEngine::load(&FontSources::default()), day())
}

fn small() -> ExportOptions {
    ExportOptions::new(ExportFormat::Png, PixelDensity::new(0.25).unwrap())
}

struct FixedMetadata(Cell<usize>);

impl MetadataSource for FixedMetadata {
    fn fetch(&self, _url: &str) -> OgResult<MetadataResult> {
        self.0.set(self.0.get() + 1);
        Ok(MetadataResult {
            title: Some("Fetched".into()),
            site_name: Some("example.com".into()),
            ..MetadataResult::default()
        })
    }
}

struct Offline;

impl MetadataSource for Offline {
    fn fetch(&self, _url: &str) -> OgResult<MetadataResult> {
        Err(OgError::metadata("network unreachable"))
    }
}

#[derive(Default)]
struct CountingFetcher(AtomicUsize);

impl RemoteAssetFetcher for CountingFetcher {
    fn fetch(&self, _url: &str) -> anyhow::Result<Vec<u8>> {
        self.0.fetch_add(1, Ordering::SeqCst);
        let mut png = Vec::new();
        image::RgbaImage::from_pixel(2, 2, image::Rgba([200, 40, 40, 255]))
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;
        Ok(png)
    }
}

struct StaticHost;

impl ImageHost for StaticHost {
    fn upload(&self, _artifact: &ExportedArtifact, _filename: &str) -> OgResult<String> {
        Ok("https://i.example.com/card.png".into())
    }
}

#[test]
fn date_stamp_formatting() {
    assert_eq!(date_stamp_for(day()), "3/7/2024");
    assert_eq!(
        date_stamp_for(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()),
        "12/31/2025"
    );
}

#[test]
fn new_session_fills_missing_date_only() {
    assert_eq!(session().config().date_stamp, "3/7/2024");
    let kept = EditorSession::new_on(
        CardConfig {
            date_stamp: "Issue 42".into(),
            ..plain()
        },
        RasterEngine::pending(),
        day(),
    );
    assert_eq!(kept.config().date_stamp, "Issue 42");
}

#[test]
fn edit_swaps_a_whole_new_value() {
    let mut s = session();
    let before = s.config().clone();
    s.edit(|c| {
        c.title = "Ship It".into();
        c.noise_intensity = 4.0;
    });
    assert_eq!(s.config().title, "Ship It");
    assert_eq!(s.config().noise_intensity, 1.0);
    assert_eq!(before.title, CardConfig::default().title);
    assert_eq!(s.scene().text(TextRole::Title).unwrap().content, "Ship It");
}

#[test]
fn scene_is_stable_across_calls() {
    let s = session();
    assert_eq!(s.scene(), s.scene());
    assert_eq!(s.scene().fingerprint(), s.scene().fingerprint());
}

#[test]
fn preset_application() {
    let mut s = session();
    assert!(s.apply_preset("polar"));
    assert_eq!(s.config().background_kind, BackgroundKind::Gradient);
    assert_eq!(s.config().text_color, "#0f172a");
    let snapshot = s.config().clone();
    assert!(!s.apply_preset("no such preset"));
    assert_eq!(s.config(), &snapshot);
}

#[test]
fn metadata_merge_and_failure_notice() {
    let mut s = session();
    let source = FixedMetadata(Cell::new(0));
    assert_eq!(s.fetch_metadata(&source), None);
    assert_eq!(source.0.get(), 1);
    assert_eq!(s.config().title, "Fetched");
    assert_eq!(s.config().site_name, "example.com");

    let snapshot = s.config().clone();
    assert_eq!(s.fetch_metadata(&Offline).as_deref(), Some(METADATA_NOTICE));
    assert_eq!(s.config(), &snapshot);
}

#[test]
fn export_and_download_dimensions() {
    let s = session();
    let art = s.export(&small()).unwrap();
    assert_eq!((art.width, art.height), (300, 158));
    assert!(!s.export_gate().is_busy());
}

#[test]
fn export_while_busy_is_rejected() {
    let s = session();
    let _held = s.export_gate().try_enter("export").unwrap();
    let err = s.export(&small()).unwrap_err();
    assert!(matches!(err, OgError::Busy(_)));
}

#[test]
fn pending_engine_reports_not_ready() {
    let mut s = EditorSession::new_on(plain(), RasterEngine::pending(), day());
    assert!(matches!(s.export(&small()), Err(OgError::NotReady(_))));
    assert!(matches!(s.upload(&StaticHost), Err(OgError::NotReady(_))));
    assert!(s.hosted_url().is_none());
    assert!(!s.upload_gate().is_busy());

    s.set_engine(RasterEngine::load(&FontSources::default()));
    assert!(s.export(&small()).is_ok());
}

#[test]
fn upload_feeds_meta_tags() {
    let mut s = session();
    assert!(s.meta_tags().open_graph.contains("yourwebsite.com"));
    let hosted = s.upload(&StaticHost).unwrap();
    assert_eq!((hosted.width, hosted.height), (2400, 1260));
    assert_eq!(s.hosted_url(), Some("https://i.example.com/card.png"));
    assert!(
        s.meta_tags()
            .twitter
            .contains("content=\"https://i.example.com/card.png\"")
    );
}

#[test]
fn remote_image_without_fetcher_fails_export() {
    let mut s = session();
    s.edit(|c| {
        c.template = TemplateId::Split;
        c.image = Some("https://cdn.example.com/x.png".into());
    });
    let err = s.export(&small()).unwrap_err();
    assert!(matches!(err, OgError::Asset(_)));
    assert!(err.user_message().contains("cross-origin"));
}

#[test]
fn preview_fit_uses_card_canvas() {
    let s = session();
    let fit = s.preview_fit(Viewport::new(1280.0, 800.0));
    assert!(fit.scale > 0.0 && fit.scale <= 1.0);
}

#[test]
fn export_and_upload_reuse_the_preview_surface() {
    let fetcher = Arc::new(CountingFetcher::default());
    let mut s = session().with_fetcher(fetcher.clone());
    s.edit(|c| {
        c.template = TemplateId::Split;
        c.image = Some("https://cdn.example.com/x.png".into());
    });
    let fetched = fetcher.0.load(Ordering::SeqCst);
    assert!(fetched > 0);
    let preview = s.preview().cloned().unwrap();

    s.export(&small()).unwrap();
    s.upload(&StaticHost).unwrap();
    assert_eq!(fetcher.0.load(Ordering::SeqCst), fetched);
    assert_eq!(s.surface().unwrap(), preview);

    s.edit(|c| c.title = "Another".into());
    assert!(fetcher.0.load(Ordering::SeqCst) > fetched);
    assert_ne!(s.preview(), Some(&preview));
}

#[test]
fn failed_preview_is_rebuilt_for_export() {
    let mut s = session();
    s.edit(|c| {
        c.template = TemplateId::Split;
        c.image = Some("https://cdn.example.com/x.png".into());
    });
    assert!(s.preview().is_none());
    assert!(matches!(s.export(&small()), Err(OgError::Asset(_))));
}
