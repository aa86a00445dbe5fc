//! Integration tests for catalog extraction
//!
//! These tests build small photo trees in a temporary directory, run the
//! extractor and check the written catalog, thumbnails and originals.

#![cfg(feature = "extract")]

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage};
use photo_atlas::app::{self, ExtractSummary};
use photo_atlas::{DownloadPlan, ExtractConfig, PhotoCatalog, SelectionSet};

/// Append a 12-byte IFD entry whose value is an offset or inline `u32`.
fn ifd_entry(buf: &mut Vec<u8>, tag: u16, kind: u16, count: u32, value: [u8; 4]) {
    buf.extend_from_slice(&tag.to_le_bytes());
    buf.extend_from_slice(&kind.to_le_bytes());
    buf.extend_from_slice(&count.to_le_bytes());
    buf.extend_from_slice(&value);
}

/// APP1 segment holding a little-endian TIFF block with only GPS tags.
fn gps_app1_segment(lat: [u32; 3], lat_ref: u8, lon: [u32; 3], lon_ref: u8) -> Vec<u8> {
    const ASCII: u16 = 2;
    const LONG: u16 = 4;
    const RATIONAL: u16 = 5;

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes());

    // IFD0 at 8: GPS IFD pointer only.
    tiff.extend_from_slice(&1u16.to_le_bytes());
    ifd_entry(&mut tiff, 0x8825, LONG, 1, 26u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());

    // GPS IFD at 26, rational data at 80 and 104.
    tiff.extend_from_slice(&4u16.to_le_bytes());
    ifd_entry(&mut tiff, 0x0001, ASCII, 2, [lat_ref, 0, 0, 0]);
    ifd_entry(&mut tiff, 0x0002, RATIONAL, 3, 80u32.to_le_bytes());
    ifd_entry(&mut tiff, 0x0003, ASCII, 2, [lon_ref, 0, 0, 0]);
    ifd_entry(&mut tiff, 0x0004, RATIONAL, 3, 104u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());
    assert_eq!(tiff.len(), 80);

    for value in lat.into_iter().chain(lon) {
        tiff.extend_from_slice(&value.to_le_bytes());
        tiff.extend_from_slice(&1u32.to_le_bytes());
    }

    let length = u16::try_from(2 + 6 + tiff.len()).unwrap();
    let mut segment = vec![0xFF, 0xE1];
    segment.extend_from_slice(&length.to_be_bytes());
    segment.extend_from_slice(b"Exif\0\0");
    segment.extend_from_slice(&tiff);
    segment
}

fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    RgbImage::from_pixel(width, height, image::Rgb([30, 120, 200]))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .unwrap();
    bytes
}

fn write_plain_jpeg(path: &Path, width: u32, height: u32) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, jpeg_bytes(width, height)).unwrap();
}

/// JPEG at 37°48'0" N, 122°24'0" W.
fn write_geotagged_jpeg(path: &Path, width: u32, height: u32) {
    let mut bytes = jpeg_bytes(width, height);
    let segment = gps_app1_segment([37, 48, 0], b'N', [122, 24, 0], b'W');
    bytes.splice(2..2, segment);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, bytes).unwrap();
}

fn config_for(root: &Path) -> ExtractConfig {
    let public = root.join("site/public");
    let mut config = ExtractConfig::new(root.join("input"));
    config.output_path = public.join("photos.json");
    config.thumbs_dir = public.join("thumbs");
    config.originals_dir = public.join("photos");
    config
}

#[test]
fn test_reads_gps_from_geotagged_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("geo.jpg");
    write_geotagged_jpeg(&path, 16, 16);

    let coordinate = app::gps::read_gps(&path).unwrap().unwrap();
    assert!((coordinate.lat - 37.8).abs() < 1e-9);
    assert!((coordinate.lon + 122.4).abs() < 1e-9);
}

#[test]
fn test_run_writes_catalog_thumbnails_and_originals() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let input = root.join("input");
    write_geotagged_jpeg(&input.join("trip/geo.jpg"), 640, 320);
    write_plain_jpeg(&input.join("plain.jpg"), 64, 64);
    fs::write(input.join("notes.txt"), b"not a photo").unwrap();

    let config = config_for(root);
    let summary = app::run(&config).unwrap();
    assert_eq!(
        summary,
        ExtractSummary {
            scanned: 2,
            written: 1,
            skipped: 1
        }
    );

    let json = fs::read_to_string(&config.output_path).unwrap();
    let catalog = PhotoCatalog::from_json(&json).unwrap();
    assert_eq!(catalog.len(), 1);

    let photo = &catalog.photos[0];
    assert_eq!(photo.id, "trip/geo.jpg");
    assert_eq!(photo.name, "geo.jpg");
    assert_eq!(photo.thumb, "/thumbs/trip/geo.jpg");
    assert_eq!(photo.original, "/photos/trip/geo.jpg");
    assert!((photo.location.lat - 37.8).abs() < 1e-9);
    assert!((photo.location.lon + 122.4).abs() < 1e-9);

    let thumb = config.thumbs_dir.join("trip/geo.jpg");
    assert_eq!(image::image_dimensions(&thumb).unwrap(), (256, 128));
    let original = config.originals_dir.join("trip/geo.jpg");
    assert_eq!(
        fs::read(&original).unwrap(),
        fs::read(input.join("trip/geo.jpg")).unwrap()
    );

    // Photos without a position get neither a thumbnail nor a copy.
    assert!(!config.thumbs_dir.join("plain.jpg").exists());
    assert!(!config.originals_dir.join("plain.jpg").exists());
}

#[test]
fn test_run_without_geotagged_photos_writes_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_plain_jpeg(&root.join("input/a.jpg"), 8, 8);

    let config = config_for(root);
    let summary = app::run(&config).unwrap();
    assert_eq!(summary.written, 0);
    assert_eq!(summary.skipped, 1);

    let json = fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(json, "{\n  \"photos\": []\n}");
    assert!(config.thumbs_dir.is_dir());
    assert!(config.originals_dir.is_dir());
}

#[test]
fn test_run_skips_corrupt_photos() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let input = root.join("input");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("broken.jpg"), b"\xFF\xD8garbage").unwrap();
    write_geotagged_jpeg(&input.join("ok.jpeg"), 10, 10);

    let summary = app::run(&config_for(root)).unwrap();
    assert_eq!(summary.written, 1);
    assert_eq!(summary.skipped, 1);
}

#[test]
fn test_run_rejects_thumbnails_outside_public_dir() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("input")).unwrap();

    let mut config = config_for(root);
    config.thumbs_dir = root.join("elsewhere");
    assert!(app::run(&config).is_err());
    assert!(!config.output_path.exists());
}

#[test]
fn test_run_refuses_input_that_is_the_originals_dir() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let public = root.join("site/public");
    let photo = public.join("photos/geo.jpg");
    write_geotagged_jpeg(&photo, 32, 32);
    let before = fs::read(&photo).unwrap();

    let mut config = config_for(root);
    config.input_dir = public.join("photos");

    assert!(app::run(&config).is_err());
    assert_eq!(fs::read(&photo).unwrap(), before);
    assert!(!config.output_path.exists());
}

#[test]
fn test_run_refuses_input_that_is_the_thumbnail_dir() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let public = root.join("site/public");
    let photo = public.join("thumbs/geo.jpg");
    write_geotagged_jpeg(&photo, 640, 320);
    let before = fs::read(&photo).unwrap();

    let mut config = config_for(root);
    config.input_dir = public.join("thumbs");

    assert!(app::run(&config).is_err());
    assert_eq!(fs::read(&photo).unwrap(), before);
}

#[cfg(unix)]
#[test]
fn test_run_never_copies_a_photo_onto_itself() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let source = root.join("input/trip/geo.jpg");
    write_geotagged_jpeg(&source, 32, 32);
    let before = fs::read(&source).unwrap();

    let config = config_for(root);
    let linked = config.originals_dir.join("trip/geo.jpg");
    fs::create_dir_all(linked.parent().unwrap()).unwrap();
    std::os::unix::fs::symlink(&source, &linked).unwrap();

    let summary = app::run(&config).unwrap();
    assert_eq!(summary.written, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(fs::read(&source).unwrap(), before);
}

#[test]
fn test_catalog_feeds_download_plan() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let input = root.join("input");
    write_geotagged_jpeg(&input.join("a.jpg"), 10, 10);
    write_geotagged_jpeg(&input.join("b.jpg"), 10, 10);

    let config = config_for(root);
    app::run(&config).unwrap();
    let catalog =
        PhotoCatalog::from_json(&fs::read_to_string(&config.output_path).unwrap()).unwrap();

    let mut selection = SelectionSet::new();
    selection.toggle("b.jpg");
    assert!(matches!(
        DownloadPlan::from_selection(&catalog.photos, &selection),
        DownloadPlan::Single { photo } if photo.id == "b.jpg"
    ));

    selection.toggle("a.jpg");
    let plan = DownloadPlan::from_selection(&catalog.photos, &selection);
    let ids: Vec<&str> = plan.photos().into_iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a.jpg", "b.jpg"]);
}
