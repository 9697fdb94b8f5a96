//! Merging images and extracting them again.

use pdfimg::extract::extract_images_from_pdf;
use pdfimg::merge::merge_images_to_pdf;
use pdfimg::output::OutputFormatter;
use tempfile::TempDir;

use crate::common::{file_names, write_jpeg};

#[test]
fn test_merge_then_extract_is_byte_identical() {
    let input = TempDir::new().unwrap();
    let sources = [
        write_jpeg(input.path(), "01.jpg", 64, 48, [12, 34, 56]),
        write_jpeg(input.path(), "02.JPG", 48, 64, [200, 100, 0]),
        write_jpeg(input.path(), "03.jpeg", 5, 5, [0, 0, 0]),
    ];

    let work = TempDir::new().unwrap();
    let pdf = work.path().join("album.pdf");
    let images = work.path().join("images");
    let formatter = OutputFormatter::quiet();

    merge_images_to_pdf(input.path(), &pdf, &formatter).unwrap();
    let stats = extract_images_from_pdf(&pdf, &images, &formatter).unwrap();

    assert_eq!(stats.images_exported, sources.len());
    assert_eq!(
        file_names(&images),
        ["Image0.jpeg", "Image1.jpeg", "Image2.jpeg"]
    );

    for (idx, source) in sources.iter().enumerate() {
        let extracted = std::fs::read(images.join(format!("Image{idx}.jpeg"))).unwrap();
        assert_eq!(extracted, std::fs::read(source).unwrap(), "image {idx}");
    }
}
