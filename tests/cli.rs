use std::fs;
use std::process::Command;

use image::{Rgba, RgbaImage};
use tempfile::tempdir;

fn icongen() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_icongen"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_arguments_reads_logo_raw_and_writes_public() {
    let dir = tempdir().unwrap();
    RgbaImage::from_pixel(128, 128, Rgba([20, 40, 60, 255]))
        .save(dir.path().join("logo_raw.png"))
        .unwrap();

    let output = icongen().current_dir(dir.path()).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Starting icon generation from logo_raw.png..."));
    assert!(stdout.contains("Successfully generated:"));
    assert!(stdout.contains("Done!"));
    for name in ["logo192.png", "logo512.png", "favicon.ico"] {
        assert!(dir.path().join("public").join(name).is_file(), "{name} missing");
    }
}

#[test]
fn missing_input_still_exits_cleanly() {
    let dir = tempdir().unwrap();

    let output = icongen().current_dir(dir.path()).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("logo_raw.png not found"));
    assert!(!dir.path().join("public").exists());
}

#[test]
fn json_flag_prints_report() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("art.png");
    RgbaImage::from_pixel(40, 20, Rgba([1, 2, 3, 255]))
        .save(&input)
        .unwrap();
    let out = dir.path().join("dist");

    let output = icongen()
        .arg("--input")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out)
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"crop\""));
    assert!(stdout.contains("\"ico\""));
    assert!(fs::metadata(out.join("favicon.ico")).unwrap().len() > 0);
}
