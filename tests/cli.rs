extern crate assert_cmd;
extern crate image;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn mandel() -> Command {
    Command::cargo_bin("mandel").unwrap()
}

fn read_rgba(path: &Path) -> (u32, u32, Vec<u8>) {
    let rgba = image::open(path).unwrap().to_rgba();
    let (width, height) = rgba.dimensions();
    (width, height, rgba.into_raw())
}

#[test]
fn renders_an_image_of_the_requested_size() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mandel.png");
    mandel()
        .args(&["-o", path.to_str().unwrap(), "-s", "64x48", "-t", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 64x48 with 4 threads in"))
        .stdout(predicate::str::contains(" ms"));

    let (width, height, pixels) = read_rgba(&path);
    assert_eq!((width, height), (64, 48));
    assert_eq!(pixels.len(), 64 * 48 * 4);
    assert!(pixels.chunks(4).all(|p| p[1] == 0 && p[2] == 0 && p[3] == 255));

    let center = (24 * 64 + 32) * 4;
    assert_eq!(&pixels[center..center + 4], &[0, 0, 0, 255]);
}

#[test]
fn thread_count_does_not_change_the_output() {
    let dir = tempdir().unwrap();
    let one = dir.path().join("one.png");
    let many = dir.path().join("many.png");
    for &(path, threads) in &[(&one, "1"), (&many, "7")] {
        mandel()
            .args(&["-o", path.to_str().unwrap(), "-s", "50x30", "-t", threads])
            .assert()
            .success();
    }
    assert_eq!(read_rgba(&one), read_rgba(&many));
}

#[test]
fn zero_threads_is_refused() {
    let dir = tempdir().unwrap();
    mandel()
        .args(&["-o", dir.path().join("x.png").to_str().unwrap(), "-t", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread count must be between 1 and"));
}

#[test]
fn non_numeric_thread_count_is_refused() {
    let dir = tempdir().unwrap();
    mandel()
        .args(&["-o", dir.path().join("x.png").to_str().unwrap(), "-t", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse thread count"));
}

#[test]
fn more_threads_than_rows_is_refused() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("x.png");
    mandel()
        .args(&["-o", path.to_str().unwrap(), "-s", "8x4", "-t", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot split 4 rows into 5 bands"));
    assert!(!path.exists());
}

#[test]
fn bad_size_is_refused() {
    let dir = tempdir().unwrap();
    mandel()
        .args(&["-o", dir.path().join("x.png").to_str().unwrap(), "-s", "0x10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Image dimensions must be positive"));
}

#[test]
fn output_is_required() {
    mandel().assert().failure();
}
