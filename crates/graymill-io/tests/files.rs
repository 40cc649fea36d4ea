//! File-based PNM I/O tests

use std::fs;

use graymill_core::{GrayRaster, Rgb};
use graymill_io::{IoError, read_ppm_file, write_pgm_file};
use tempfile::TempDir;

#[test]
fn read_ppm_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("two_by_one.ppm");
    fs::write(&path, b"P6\n# fixture\n2 1\n255\n\x01\x02\x03\xfa\xfb\xfc").unwrap();

    let raster = read_ppm_file(&path).unwrap();
    assert_eq!(raster.width(), 2);
    assert_eq!(raster.height(), 1);
    assert_eq!(raster.get(0, 0), Rgb::new(1, 2, 3));
    assert_eq!(raster.get(1, 0), Rgb::new(250, 251, 252));
}

#[test]
fn read_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = read_ppm_file(dir.path().join("absent.ppm")).unwrap_err();
    assert!(matches!(err, IoError::Io(_)));
}

#[test]
fn write_pgm_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.pgm");

    let raster = GrayRaster::from_data(3, 1, vec![0, 127, 255]).unwrap();
    write_pgm_file(&path, &raster).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes, b"P5\n3 1\n255\n\x00\x7f\xff");
}
