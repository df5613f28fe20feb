//! End-to-end CLI tests for the pngquant-batch binary.
//!
//! pngquant itself is not assumed to be installed: the tests that exercise
//! the compression path point `--pngquant-bin` at a small shell stand-in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn bin() -> Command {
    Command::cargo_bin("pngquant-batch").unwrap()
}

fn write_png(path: &Path) {
    image::RgbImage::from_pixel(4, 4, image::Rgb([10, 20, 30]))
        .save(path)
        .unwrap();
}

fn write_jpeg(path: &Path) {
    image::RgbImage::from_pixel(4, 4, image::Rgb([200, 100, 50]))
        .save(path)
        .unwrap();
}

#[cfg(unix)]
fn write_fake_pngquant(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let bin = dir.join("fake-pngquant");
    std::fs::write(&bin, body).unwrap();
    std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755)).unwrap();
    bin
}

// Copies the source (arg 7) to the output (arg 3); matches the fixed
// argument layout the binary builds.
#[cfg(unix)]
const COPYING_PNGQUANT: &str =
    "#!/bin/sh\nif [ \"$7\" != \"$3\" ]; then cp \"$7\" \"$3\"; fi\n";
#[cfg(unix)]
const FAILING_PNGQUANT: &str = "#!/bin/sh\necho 'simulated failure' >&2\nexit 2\n";

#[test]
fn test_help() {
    bin().arg("--help").assert().success();
}

#[test]
fn test_no_files_is_a_usage_error() {
    bin()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_file_is_reported_but_exit_is_zero() {
    bin()
        .arg("definitely-missing.png")
        .assert()
        .success()
        .stdout(predicate::str::contains("File not found"));
}

#[test]
fn test_unsupported_extension_is_reported_and_file_untouched() {
    let dir = TempDir::new().unwrap();
    let gif = dir.path().join("photo.gif");
    std::fs::write(&gif, b"GIF89a").unwrap();

    bin()
        .arg(&gif)
        .assert()
        .success()
        .stdout(predicate::str::contains("Unsupported extension"));

    assert!(gif.exists());
    assert!(!dir.path().join("photo.png").exists());
}

#[cfg(unix)]
#[test]
fn test_png_compressed_in_place() {
    let dir = TempDir::new().unwrap();
    let fake = write_fake_pngquant(dir.path(), COPYING_PNGQUANT);
    let png = dir.path().join("a.png");
    write_png(&png);

    bin()
        .arg(&png)
        .arg("--pngquant-bin")
        .arg(&fake)
        .assert()
        .success()
        .stdout(predicate::str::contains("Compressed"));

    assert!(png.exists());
    assert!(!dir.path().join("a_tmp.png").exists());
}

#[cfg(unix)]
#[test]
fn test_jpeg_failure_preserves_original() {
    let dir = TempDir::new().unwrap();
    let fake = write_fake_pngquant(dir.path(), FAILING_PNGQUANT);
    let jpeg = dir.path().join("b.jpg");
    write_jpeg(&jpeg);

    bin()
        .arg(&jpeg)
        .arg("--pngquant-bin")
        .arg(&fake)
        .assert()
        .success()
        .stdout(predicate::str::contains("simulated failure"));

    assert!(jpeg.exists());
    assert!(!dir.path().join("b_tmp.png").exists());
    assert!(!dir.path().join("b.png").exists());
}

#[cfg(unix)]
#[test]
fn test_mixed_batch_end_to_end() {
    let dir = TempDir::new().unwrap();
    let fake = write_fake_pngquant(dir.path(), COPYING_PNGQUANT);

    let a = dir.path().join("a.png");
    let b = dir.path().join("b.jpg");
    write_png(&a);
    write_jpeg(&b);

    bin()
        .arg(&a)
        .arg(&b)
        .arg(dir.path().join("missing.txt"))
        .arg("--pngquant-bin")
        .arg(&fake)
        .assert()
        .success()
        .stdout(predicate::str::contains("File not found"));

    // a.png compressed in place
    assert!(a.exists());
    // b.jpg converted, compressed to b.png, originals cleaned up
    assert!(dir.path().join("b.png").exists());
    assert!(!b.exists());
    assert!(!dir.path().join("b_tmp.png").exists());
}
