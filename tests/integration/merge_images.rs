//! Integration tests for merging JPEG directories into a PDF.

use lopdf::{Document, Object};
use pdfimg::merge::{ImageMerger, MergeResult, merge_images_to_pdf};
use pdfimg::output::OutputFormatter;
use std::path::Path;
use tempfile::TempDir;

use crate::common::{embedded_images, write_corrupt_jpeg, write_jpeg};

fn media_box(doc: &Document, page_id: lopdf::ObjectId) -> Vec<f32> {
    doc.get_dictionary(page_id)
        .unwrap()
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|value| value.as_float().unwrap())
        .collect()
}

#[test]
fn test_merge_one_page_per_image() {
    let input = TempDir::new().unwrap();
    write_jpeg(input.path(), "a.jpg", 40, 30, [255, 0, 0]);
    write_jpeg(input.path(), "b.jpg", 30, 40, [0, 255, 0]);
    write_jpeg(input.path(), "c.jpeg", 10, 10, [0, 0, 255]);

    let output_dir = TempDir::new().unwrap();
    let output = output_dir.path().join("album.pdf");

    let stats = merge_images_to_pdf(input.path(), &output, &OutputFormatter::quiet())
        .unwrap()
        .expect("images should have been merged");
    assert_eq!(stats.pages_added, 3);

    let doc = Document::load(&output).unwrap();
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 3);

    for page_id in pages.values() {
        assert_eq!(media_box(&doc, *page_id), [0.0, 0.0, 595.0, 842.0]);
    }
}

#[test]
fn test_merge_orders_pages_by_file_name() {
    let input = TempDir::new().unwrap();
    let c = write_jpeg(input.path(), "c.jpg", 8, 8, [0, 0, 255]);
    let a = write_jpeg(input.path(), "a.jpg", 8, 8, [255, 0, 0]);
    let b = write_jpeg(input.path(), "b.jpg", 8, 8, [0, 255, 0]);

    let output_dir = TempDir::new().unwrap();
    let output = output_dir.path().join("out.pdf");
    merge_images_to_pdf(input.path(), &output, &OutputFormatter::quiet()).unwrap();

    let expected: Vec<Vec<u8>> = [a, b, c]
        .iter()
        .map(|path| std::fs::read(path).unwrap())
        .collect();
    assert_eq!(embedded_images(&output), expected);
}

#[test]
fn test_merge_embeds_dct_images() {
    let input = TempDir::new().unwrap();
    write_jpeg(input.path(), "photo.jpg", 16, 9, [1, 2, 3]);

    let output_dir = TempDir::new().unwrap();
    let output = output_dir.path().join("out.pdf");
    merge_images_to_pdf(input.path(), &output, &OutputFormatter::quiet()).unwrap();

    let doc = Document::load(&output).unwrap();
    let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
    let images = pdfimg::extract::page_images(&doc, page_id);
    assert_eq!(images.len(), 1);

    let dict = &images[0].stream.dict;
    assert!(matches!(dict.get(b"Filter"), Ok(Object::Name(name)) if name == b"DCTDecode"));
    assert_eq!(dict.get(b"Width").unwrap().as_i64().unwrap(), 16);
    assert_eq!(dict.get(b"Height").unwrap().as_i64().unwrap(), 9);
}

#[test]
fn test_merge_empty_directory_creates_nothing() {
    let input = TempDir::new().unwrap();
    std::fs::write(input.path().join("notes.txt"), b"no images here").unwrap();

    let output_dir = TempDir::new().unwrap();
    let output = output_dir.path().join("out.pdf");

    let stats = merge_images_to_pdf(input.path(), &output, &OutputFormatter::quiet()).unwrap();
    assert!(stats.is_none());
    assert!(!output.exists());
}

#[test]
fn test_merge_skips_corrupt_image() {
    let input = TempDir::new().unwrap();
    let good_a = write_jpeg(input.path(), "a.jpg", 8, 8, [200, 0, 0]);
    write_corrupt_jpeg(input.path(), "b.jpg");
    let good_c = write_jpeg(input.path(), "c.jpg", 8, 8, [0, 0, 200]);

    let output_dir = TempDir::new().unwrap();
    let output = output_dir.path().join("out.pdf");

    let stats = merge_images_to_pdf(input.path(), &output, &OutputFormatter::quiet())
        .unwrap()
        .unwrap();
    assert_eq!(stats.images_found, 3);
    assert_eq!(stats.images_skipped, 1);
    assert_eq!(stats.pages_added, 2);

    let expected = vec![std::fs::read(good_a).unwrap(), std::fs::read(good_c).unwrap()];
    assert_eq!(embedded_images(&output), expected);
}

#[test]
fn test_merge_only_corrupt_images_still_writes_document() {
    let input = TempDir::new().unwrap();
    write_corrupt_jpeg(input.path(), "broken.jpg");

    let result = ImageMerger::new()
        .merge(input.path(), &OutputFormatter::quiet())
        .unwrap();

    match result {
        MergeResult::Document { statistics, .. } => {
            assert_eq!(statistics.pages_added, 0);
            assert_eq!(statistics.images_skipped, 1);
        }
        MergeResult::NoImages => panic!("a .jpg file was present"),
    }
}

#[test]
fn test_merge_creates_output_parent_directory() {
    let input = TempDir::new().unwrap();
    write_jpeg(input.path(), "a.jpg", 8, 8, [0, 0, 0]);

    let output_dir = TempDir::new().unwrap();
    let output = output_dir.path().join("nested").join("out.pdf");
    merge_images_to_pdf(input.path(), &output, &OutputFormatter::quiet()).unwrap();

    assert!(output.is_file());
    assert!(!Path::new(&format!("{}.tmp", output.display())).exists());
}
