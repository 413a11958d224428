use super::*;

fn checker() -> image::RgbaImage {
    image::RgbaImage::from_fn(8, 4, |x, y| {
        if (x + y) % 2 == 0 {
            image::Rgba([255, 0, 0, 255])
        } else {
            image::Rgba([0, 0, 255, 128])
        }
    })
}

#[test]
fn parse_accepts_known_tokens_only() {
    assert_eq!(ExportFormat::parse("PNG").unwrap(), ExportFormat::Png);
    assert_eq!(ExportFormat::parse(" jpg ").unwrap(), ExportFormat::Jpeg);
    assert_eq!("webp".parse::<ExportFormat>().unwrap(), ExportFormat::Webp);
    assert!(matches!(ExportFormat::parse("gif"), Err(OgError::Validation(_))));
}

#[test]
fn extension_and_mime_agree() {
    for f in ExportFormat::ALL {
        assert!(f.mime().ends_with(f.extension()));
        assert_eq!(f.to_string(), f.extension());
    }
}

#[test]
fn serde_uses_lowercase_tokens() {
    assert_eq!(serde_json::to_string(&ExportFormat::Jpeg).unwrap(), "\"jpeg\"");
    let f: ExportFormat = serde_json::from_str("\"webp\"").unwrap();
    assert_eq!(f, ExportFormat::Webp);
}

#[test]
fn flatten_on_white_blends_alpha() {
    let img = image::RgbaImage::from_raw(
        3,
        1,
        vec![0, 0, 0, 0, 0, 0, 0, 255, 0, 0, 0, 128],
    )
    .unwrap();
    let rgb = flatten_on_white(&img);
    assert_eq!(rgb.get_pixel(0, 0).0, [255, 255, 255]);
    assert_eq!(rgb.get_pixel(1, 0).0, [0, 0, 0]);
    assert_eq!(rgb.get_pixel(2, 0).0, [127, 127, 127]);
}

#[test]
fn png_and_webp_are_lossless() {
    let img = checker();
    for format in [ExportFormat::Png, ExportFormat::Webp] {
        let bytes = encode_raster(&img, format).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, img, "{format}");
    }
}

#[test]
fn encoded_bytes_carry_the_declared_container() {
    let img = checker();
    let expect = [
        (ExportFormat::Png, image::ImageFormat::Png),
        (ExportFormat::Jpeg, image::ImageFormat::Jpeg),
        (ExportFormat::Webp, image::ImageFormat::WebP),
    ];
    for (format, container) in expect {
        let bytes = encode_raster(&img, format).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), container, "{format}");
    }
}

#[test]
fn jpeg_is_opaque_and_keeps_dimensions() {
    let bytes = encode_raster(&checker(), ExportFormat::Jpeg).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (8, 4));
    assert!(!decoded.color().has_alpha());
}
