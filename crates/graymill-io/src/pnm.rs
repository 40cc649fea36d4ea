//! PNM (Portable Any Map) format support
//!
//! Reads binary PPM (P6) color rasters and writes binary PGM (P5)
//! grayscale rasters. ASCII variants (P1/P2/P3) are not supported.
//!
//! The P6 header is a sequence of whitespace-separated tokens (magic,
//! width, height, maximum channel value), possibly interleaved with
//! comment lines starting with `#`, which are skipped wherever a token
//! is expected. The single whitespace byte terminating the last header
//! token is followed immediately by the raw pixel payload.

use crate::{IoError, IoResult};
use graymill_core::{GrayRaster, Rgb, RgbRaster};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Largest maximum channel value this decoder accepts.
const MAX_CHANNEL_VALUE: i64 = 255;

fn read_byte<R: BufRead>(reader: &mut R) -> IoResult<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(IoError::Io(e)),
        }
    }
}

/// Scan the next header token, skipping whitespace and `#` comment lines.
///
/// Consumes the single whitespace byte that terminates the token, so a
/// payload read can start directly after the final header token.
fn next_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let first = loop {
        match read_byte(reader)? {
            None => return Err(IoError::TruncatedHeader),
            Some(b'#') => {
                // Comment runs to the end of the line.
                loop {
                    match read_byte(reader)? {
                        None => return Err(IoError::TruncatedHeader),
                        Some(b'\n') => break,
                        Some(_) => {}
                    }
                }
            }
            Some(b) if b.is_ascii_whitespace() => {}
            Some(b) => break b,
        }
    };

    let mut token = vec![first];
    loop {
        match read_byte(reader)? {
            // EOF also terminates a token; if payload bytes were still
            // required the payload read reports the shortfall.
            None => break,
            Some(b) if b.is_ascii_whitespace() => break,
            Some(b) => token.push(b),
        }
    }
    Ok(String::from_utf8_lossy(&token).into_owned())
}

/// Parse a width or height token. Values below 1 are unsupported.
fn parse_dimension(token: &str, name: &str) -> IoResult<usize> {
    let value: i64 = token
        .parse()
        .map_err(|_| IoError::InvalidHeader(format!("invalid {name} token {token:?}")))?;
    if value < 1 {
        return Err(IoError::Unsupported(format!("{name} {value} is less than 1")));
    }
    Ok(value as usize)
}

fn read_counted<R: BufRead>(reader: &mut R, expected: usize) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(expected)
        .map_err(|_| IoError::Core(graymill_core::Error::AllocationFailed))?;
    buf.resize(expected, 0);

    let mut filled = 0;
    while filled < expected {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(IoError::UnexpectedEof {
                    expected,
                    actual: filled,
                });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(IoError::Io(e)),
        }
    }
    Ok(buf)
}

/// Read a binary PPM (P6) raster from a reader.
///
/// # Errors
///
/// - [`IoError::BadMagic`] if the header does not start with `P6`
/// - [`IoError::InvalidHeader`] if a dimension or max-value token does
///   not parse as an integer
/// - [`IoError::Unsupported`] for max values above 255 or dimensions
///   below 1
/// - [`IoError::TruncatedHeader`] / [`IoError::UnexpectedEof`] for
///   short reads
pub fn read_ppm<R: BufRead>(mut reader: R) -> IoResult<RgbRaster> {
    let magic = next_token(&mut reader)?;
    if magic != "P6" {
        return Err(IoError::BadMagic(magic));
    }

    let width = parse_dimension(&next_token(&mut reader)?, "width")?;
    let height = parse_dimension(&next_token(&mut reader)?, "height")?;

    let maxval_token = next_token(&mut reader)?;
    let maxval: i64 = maxval_token.parse().map_err(|_| {
        IoError::InvalidHeader(format!("invalid max value token {maxval_token:?}"))
    })?;
    if maxval > MAX_CHANNEL_VALUE {
        return Err(IoError::Unsupported(format!(
            "max channel value {maxval} exceeds {MAX_CHANNEL_VALUE}"
        )));
    }

    let payload_len = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| IoError::Unsupported("raster dimensions overflow".into()))?;
    let payload = read_counted(&mut reader, payload_len)?;

    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(width * height)
        .map_err(|_| IoError::Core(graymill_core::Error::AllocationFailed))?;
    pixels.extend(
        payload
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2])),
    );

    Ok(RgbRaster::from_pixels(width, height, pixels)?)
}

/// Read a binary PPM (P6) raster from a file.
pub fn read_ppm_file<P: AsRef<Path>>(path: P) -> IoResult<RgbRaster> {
    let file = File::open(path)?;
    read_ppm(BufReader::new(file))
}

/// Write a grayscale raster as binary PGM (P5) to a writer.
///
/// The header is `P5\n<width> <height>\n255\n`, followed by one byte per
/// pixel in row-major order.
pub fn write_pgm<W: Write>(raster: &GrayRaster, mut writer: W) -> IoResult<()> {
    write!(writer, "P5\n{} {}\n255\n", raster.width(), raster.height())?;
    writer.write_all(raster.data())?;
    writer.flush()?;
    Ok(())
}

/// Write a grayscale raster as binary PGM (P5) to a file.
pub fn write_pgm_file<P: AsRef<Path>>(path: P, raster: &GrayRaster) -> IoResult<()> {
    let file = File::create(path)?;
    write_pgm(raster, BufWriter::new(file))
}
