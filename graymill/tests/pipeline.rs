//! End-to-end conversion tests
//!
//! Drive the full file-to-file path: decode a P6 source, run the
//! configured stages, and check the P5 output bytes.

use std::fs;
use std::path::PathBuf;

use graymill::pipeline::{PipelineConfig, PipelineError, run_file};
use tempfile::TempDir;

fn write_source(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn white_2x2_luminance_only() {
    let dir = TempDir::new().unwrap();
    let src = write_source(
        &dir,
        "white.ppm",
        b"P6\n2 2\n255\n\xff\xff\xff\xff\xff\xff\xff\xff\xff\xff\xff\xff",
    );
    let dst = dir.path().join("white.pgm");

    run_file(&src, &dst, &PipelineConfig::luminance_only()).unwrap();

    let out = fs::read(&dst).unwrap();
    assert_eq!(out, b"P5\n2 2\n255\n\xff\xff\xff\xff");
}

#[test]
fn bad_magic_fails_without_success() {
    let dir = TempDir::new().unwrap();
    let src = write_source(&dir, "ascii.ppm", b"P3\n2 2\n255\n1 2 3\n");
    let dst = dir.path().join("out.pgm");

    let err = run_file(&src, &dst, &PipelineConfig::default()).unwrap_err();
    assert!(matches!(err, PipelineError::Io(_)));
    // The destination must not have been written.
    assert!(!dst.exists());
}

#[test]
fn missing_source_fails() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("nope.ppm");
    let dst = dir.path().join("out.pgm");

    let err = run_file(&src, &dst, &PipelineConfig::default()).unwrap_err();
    assert!(matches!(err, PipelineError::Io(_)));
}

#[test]
fn truncated_payload_fails() {
    let dir = TempDir::new().unwrap();
    // Header promises 2x2 pixels (12 bytes) but only one pixel follows.
    let src = write_source(&dir, "short.ppm", b"P6\n2 2\n255\n\x10\x20\x30");
    let dst = dir.path().join("out.pgm");

    let err = run_file(&src, &dst, &PipelineConfig::default()).unwrap_err();
    assert!(matches!(err, PipelineError::Io(_)));
    assert!(!dst.exists());
}

#[test]
fn default_pipeline_produces_bilevel_output() {
    let dir = TempDir::new().unwrap();

    // 4x2 gradient with a comment line in the header.
    let mut bytes = b"P6\n# gradient fixture\n4 2\n255\n".to_vec();
    for i in 0..8u8 {
        let v = i * 30;
        bytes.extend_from_slice(&[v, v, v]);
    }
    let src = write_source(&dir, "gradient.ppm", &bytes);
    let dst = dir.path().join("gradient.pgm");

    run_file(&src, &dst, &PipelineConfig::default()).unwrap();

    let out = fs::read(&dst).unwrap();
    let header = b"P5\n4 2\n255\n";
    assert_eq!(&out[..header.len()], header);
    let payload = &out[header.len()..];
    assert_eq!(payload.len(), 8);
    assert!(payload.iter().all(|&v| v == 0 || v == 255));
}

#[test]
fn dimensions_preserved_through_full_pipeline() {
    let dir = TempDir::new().unwrap();

    let (w, h) = (5usize, 3usize);
    let mut bytes = format!("P6\n{w} {h}\n255\n").into_bytes();
    for i in 0..(w * h) {
        let v = (i * 17 % 256) as u8;
        bytes.extend_from_slice(&[v, v.wrapping_add(40), v / 2]);
    }
    let src = write_source(&dir, "in.ppm", &bytes);
    let dst = dir.path().join("out.pgm");

    run_file(&src, &dst, &PipelineConfig::default()).unwrap();

    let out = fs::read(&dst).unwrap();
    let header = format!("P5\n{w} {h}\n255\n").into_bytes();
    assert_eq!(&out[..header.len()], header.as_slice());
    assert_eq!(out.len() - header.len(), w * h);
}

#[test]
fn smoothing_only_configuration() {
    // One of the observed deployments: luminance plus mean filtering.
    let dir = TempDir::new().unwrap();
    let mut bytes = b"P6\n3 3\n255\n".to_vec();
    for _ in 0..9 {
        bytes.extend_from_slice(&[120, 120, 120]);
    }
    let src = write_source(&dir, "flat.ppm", &bytes);
    let dst = dir.path().join("flat.pgm");

    let config = PipelineConfig {
        smooth: Some(graymill::Kernel3::mean()),
        ..PipelineConfig::luminance_only()
    };
    run_file(&src, &dst, &config).unwrap();

    let out = fs::read(&dst).unwrap();
    let payload = &out[b"P5\n3 3\n255\n".len()..];
    // Constant input stays constant under the averaging kernel, borders
    // included.
    assert_eq!(payload, &[120u8; 9]);
}
