//! Integration tests for error handling and edge cases.

use pdfimg::PdfImgError;
use pdfimg::extract::extract_images_from_pdf;
use pdfimg::merge::merge_images_to_pdf;
use pdfimg::output::OutputFormatter;
use tempfile::TempDir;

#[test]
fn test_merge_missing_input_directory() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nowhere");
    let output = temp_dir.path().join("out.pdf");

    let err = merge_images_to_pdf(&missing, &output, &OutputFormatter::quiet()).unwrap_err();
    assert!(matches!(err, PdfImgError::FileNotFound { .. }));
    assert!(!output.exists());
}

#[test]
fn test_merge_input_is_a_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("photo.jpg");
    std::fs::write(&file, b"").unwrap();

    let err = merge_images_to_pdf(&file, &temp_dir.path().join("out.pdf"), &OutputFormatter::quiet())
        .unwrap_err();
    assert!(matches!(err, PdfImgError::NotADirectory { .. }));
}

#[test]
fn test_extract_missing_pdf() {
    let temp_dir = TempDir::new().unwrap();
    let err = extract_images_from_pdf(
        &temp_dir.path().join("missing.pdf"),
        &temp_dir.path().join("images"),
        &OutputFormatter::quiet(),
    )
    .unwrap_err();
    assert!(matches!(err, PdfImgError::FileNotFound { .. }));
}

#[test]
fn test_extract_malformed_pdf() {
    let temp_dir = TempDir::new().unwrap();
    let pdf = temp_dir.path().join("broken.pdf");
    std::fs::write(&pdf, b"not a pdf at all").unwrap();

    let err = extract_images_from_pdf(
        &pdf,
        &temp_dir.path().join("images"),
        &OutputFormatter::quiet(),
    )
    .unwrap_err();
    assert!(matches!(err, PdfImgError::FailedToLoadPdf { .. }));
    assert!(err.to_string().contains("broken.pdf"));
}

#[test]
fn test_extract_output_path_is_a_file() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("images");
    std::fs::write(&blocker, b"").unwrap();

    let err = extract_images_from_pdf(
        &temp_dir.path().join("any.pdf"),
        &blocker,
        &OutputFormatter::quiet(),
    )
    .unwrap_err();
    assert!(matches!(err, PdfImgError::FailedToCreateDirectory { .. }));
}

#[test]
fn test_run_reports_unknown_operation_without_error() {
    assert!(pdfimg::run_from(["pdfimg", "shrink", "a", "b"]).is_ok());
}
