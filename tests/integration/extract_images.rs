//! Integration tests for extracting images from a PDF.

use lopdf::Object;
use pdfimg::extract::extract_images_from_pdf;
use pdfimg::output::OutputFormatter;
use tempfile::TempDir;

use crate::common::{FixtureImage, file_names, write_pdf_with_images};

const JPEG_A: &[u8] = b"\xFF\xD8\xFF\xE0first\xFF\xD9";
const JPEG_B: &[u8] = b"\xFF\xD8\xFF\xE0second\xFF\xD9";

#[test]
fn test_extract_pdf_without_images() {
    let temp_dir = TempDir::new().unwrap();
    let pdf = temp_dir.path().join("text.pdf");
    write_pdf_with_images(&pdf, vec![vec![], vec![]]);

    let output = temp_dir.path().join("images");
    let stats = extract_images_from_pdf(&pdf, &output, &OutputFormatter::quiet()).unwrap();

    assert_eq!(stats.pages_scanned, 2);
    assert_eq!(stats.images_exported, 0);
    assert!(output.is_dir());
    assert!(file_names(&output).is_empty());
}

#[test]
fn test_extract_dct_images_in_page_order() {
    let temp_dir = TempDir::new().unwrap();
    let pdf = temp_dir.path().join("photos.pdf");
    write_pdf_with_images(
        &pdf,
        vec![
            vec![FixtureImage::named("DCTDecode", JPEG_A)],
            vec![FixtureImage::named("DCTDecode", JPEG_B)],
        ],
    );

    let output = temp_dir.path().join("images");
    let stats = extract_images_from_pdf(&pdf, &output, &OutputFormatter::quiet()).unwrap();

    assert_eq!(stats.images_exported, 2);
    assert_eq!(file_names(&output), ["Image0.jpeg", "Image1.jpeg"]);
    assert_eq!(std::fs::read(output.join("Image0.jpeg")).unwrap(), JPEG_A);
    assert_eq!(std::fs::read(output.join("Image1.jpeg")).unwrap(), JPEG_B);
}

#[test]
fn test_extract_flate_image_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let pdf = temp_dir.path().join("flate.pdf");
    write_pdf_with_images(
        &pdf,
        vec![vec![FixtureImage::named("FlateDecode", b"compressed")]],
    );

    let output = temp_dir.path().join("images");
    let stats = extract_images_from_pdf(&pdf, &output, &OutputFormatter::quiet()).unwrap();

    assert_eq!(stats.images_seen, 1);
    assert_eq!(stats.skipped_flate, 1);
    assert!(file_names(&output).is_empty());
}

#[test]
fn test_extract_mixed_filters() {
    let temp_dir = TempDir::new().unwrap();
    let pdf = temp_dir.path().join("mixed.pdf");
    write_pdf_with_images(
        &pdf,
        vec![vec![
            FixtureImage::named("CCITTFaxDecode", b"fax"),
            FixtureImage::named("DCTDecode", JPEG_A),
            FixtureImage {
                filter: None,
                content: vec![0; 12],
            },
            FixtureImage {
                filter: Some(Object::Array(vec![
                    Object::Name(b"DCTDecode".to_vec()),
                    Object::Name(b"FlateDecode".to_vec()),
                ])),
                content: JPEG_B.to_vec(),
            },
        ]],
    );

    let output = temp_dir.path().join("images");
    let stats = extract_images_from_pdf(&pdf, &output, &OutputFormatter::quiet()).unwrap();

    assert_eq!(stats.images_seen, 4);
    assert_eq!(stats.images_exported, 2);
    assert_eq!(stats.skipped_other, 2);
    assert_eq!(file_names(&output), ["Image0.jpeg", "Image1.jpeg"]);
}

#[test]
fn test_extract_into_existing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let pdf = temp_dir.path().join("photo.pdf");
    write_pdf_with_images(&pdf, vec![vec![FixtureImage::named("DCTDecode", JPEG_A)]]);

    let output = temp_dir.path().join("images");
    std::fs::create_dir(&output).unwrap();
    std::fs::write(output.join("Image0.jpeg"), b"old").unwrap();

    extract_images_from_pdf(&pdf, &output, &OutputFormatter::quiet()).unwrap();
    assert_eq!(std::fs::read(output.join("Image0.jpeg")).unwrap(), JPEG_A);
}

#[test]
fn test_extract_filter_array_uses_first_entry() {
    let temp_dir = TempDir::new().unwrap();
    let pdf = temp_dir.path().join("array.pdf");
    write_pdf_with_images(
        &pdf,
        vec![vec![FixtureImage {
            filter: Some(Object::Array(vec![
                Object::Name(b"DCTDecode".to_vec()),
                Object::Integer(0),
            ])),
            content: JPEG_A.to_vec(),
        }]],
    );

    let output = temp_dir.path().join("images");
    let stats = extract_images_from_pdf(&pdf, &output, &OutputFormatter::quiet()).unwrap();

    assert_eq!(stats.images_exported, 1);
    assert_eq!(std::fs::read(output.join("Image0.jpeg")).unwrap(), JPEG_A);
}
