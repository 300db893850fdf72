//! NPY v1.0 container reader/writer for `<f4` C-order arrays.
//!
//! Layout: the 6-byte magic `\x93NUMPY`, version bytes `\x01\x00`, a
//! little-endian `u16` header length, then the header dictionary
//! `{'descr': '<f4', 'fortran_order': False, 'shape': (R, C), }` padded with
//! spaces and terminated by `\n` so that the payload starts on a 16-byte
//! boundary, followed by the flat little-endian `f32` payload in row-major
//! order. Only the single dtype/order combination the job emits is supported.

use std::fs;
use std::path::Path;

use crate::error::JobError;
use crate::grid::Grid;

/// NPY magic prefix.
pub const NPY_MAGIC: [u8; 6] = [0x93, b'N', b'U', b'M', b'P', b'Y'];

/// Dtype descriptor for little-endian f32.
pub const DESCR_F32_LE: &str = "<f4";

const VERSION: (u8, u8) = (1, 0);
const PREAMBLE_LEN: usize = 10; // magic + 2 version bytes + u16 length field

fn header_dict(rows: usize, cols: usize) -> String {
    format!("{{'descr': '{DESCR_F32_LE}', 'fortran_order': False, 'shape': ({rows}, {cols}), }}")
}

/// Encode a grid as a complete NPY v1.0 byte stream.
pub fn encode_f32(grid: &Grid) -> Result<Vec<u8>, JobError> {
    let dict = header_dict(grid.rows(), grid.cols());
    let base_len = dict.len() + 1; // trailing newline
    let padding = (16 - ((PREAMBLE_LEN + base_len) % 16)) % 16;
    let header_len = base_len + padding;
    let header_len_u16 = u16::try_from(header_len)
        .map_err(|_| JobError::npy("header length exceeds v1.0 u16 field"))?;

    let mut buffer = Vec::with_capacity(PREAMBLE_LEN + header_len + grid.len() * 4);
    buffer.extend_from_slice(&NPY_MAGIC);
    buffer.push(VERSION.0);
    buffer.push(VERSION.1);
    buffer.extend_from_slice(&header_len_u16.to_le_bytes());
    buffer.extend_from_slice(dict.as_bytes());
    buffer.extend(std::iter::repeat(b' ').take(padding));
    buffer.push(b'\n');

    for &value in grid.as_slice() {
        buffer.extend_from_slice(&value.to_le_bytes());
    }
    Ok(buffer)
}

/// Write a grid to `path` as an NPY file.
pub fn write_f32(path: &Path, grid: &Grid) -> Result<(), JobError> {
    let bytes = encode_f32(grid)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Read an NPY file previously written by [`write_f32`].
///
/// Accepts any v1.0 `<f4` C-order file; rejects everything else.
pub fn read_f32(path: &Path) -> Result<Grid, JobError> {
    decode_f32(&fs::read(path)?)
}

/// Decode an NPY v1.0 byte stream into a grid.
pub fn decode_f32(bytes: &[u8]) -> Result<Grid, JobError> {
    if bytes.len() < PREAMBLE_LEN {
        return Err(JobError::npy("payload truncated before header length field"));
    }
    if bytes[..6] != NPY_MAGIC {
        return Err(JobError::npy("invalid NPY magic"));
    }
    if (bytes[6], bytes[7]) != VERSION {
        return Err(JobError::npy(format!(
            "unsupported NPY version {}.{}",
            bytes[6], bytes[7]
        )));
    }

    let header_len = usize::from(u16::from_le_bytes([bytes[8], bytes[9]]));
    let payload_start = PREAMBLE_LEN + header_len;
    if bytes.len() < payload_start {
        return Err(JobError::npy("payload truncated before declared header end"));
    }
    let dict = std::str::from_utf8(&bytes[PREAMBLE_LEN..payload_start])
        .map_err(|_| JobError::npy("header dictionary is not UTF-8"))?;

    if !dict.contains("'descr': '<f4'") {
        return Err(JobError::npy("unsupported dtype descriptor, expected <f4"));
    }
    if !dict.contains("'fortran_order': False") {
        return Err(JobError::npy("Fortran-order payloads are not supported"));
    }
    let (rows, cols) = parse_shape(dict)?;

    let payload = &bytes[payload_start..];
    let expected = rows * cols * 4;
    if payload.len() != expected {
        return Err(JobError::npy(format!(
            "payload length {} does not match shape ({}, {})",
            payload.len(),
            rows,
            cols
        )));
    }

    let data = payload
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();
    Grid::from_vec(rows, cols, data)
}

fn parse_shape(dict: &str) -> Result<(usize, usize), JobError> {
    let after_key = dict
        .split("'shape':")
        .nth(1)
        .ok_or_else(|| JobError::npy("header dictionary missing shape key"))?;
    let open = after_key
        .find('(')
        .ok_or_else(|| JobError::npy("shape tuple missing opening parenthesis"))?;
    let close = after_key
        .find(')')
        .ok_or_else(|| JobError::npy("shape tuple missing closing parenthesis"))?;
    let dims: Vec<usize> = after_key[open + 1..close]
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| JobError::npy(format!("invalid shape dimension '{s}'")))
        })
        .collect::<Result<_, _>>()?;

    match dims.as_slice() {
        [rows, cols] => Ok((*rows, *cols)),
        other => Err(JobError::npy(format!(
            "expected a 2-D shape, got {} dimensions",
            other.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble_and_alignment() {
        let grid = Grid::zeros(256, 256);
        let bytes = encode_f32(&grid).unwrap();

        assert_eq!(&bytes[..6], &NPY_MAGIC);
        assert_eq!((bytes[6], bytes[7]), (1, 0));

        let header_len = usize::from(u16::from_le_bytes([bytes[8], bytes[9]]));
        // Payload must start on a 16-byte boundary
        assert_eq!((PREAMBLE_LEN + header_len) % 16, 0);
        // Header dictionary ends with the newline terminator
        assert_eq!(bytes[PREAMBLE_LEN + header_len - 1], b'\n');
        // Total size: preamble + header + 256*256 f32
        assert_eq!(bytes.len(), PREAMBLE_LEN + header_len + 256 * 256 * 4);
    }

    #[test]
    fn test_header_dictionary_contents() {
        let grid = Grid::zeros(256, 256);
        let bytes = encode_f32(&grid).unwrap();
        let header_len = usize::from(u16::from_le_bytes([bytes[8], bytes[9]]));
        let dict = std::str::from_utf8(&bytes[PREAMBLE_LEN..PREAMBLE_LEN + header_len]).unwrap();

        assert!(dict.contains("'descr': '<f4'"));
        assert!(dict.contains("'fortran_order': False"));
        assert!(dict.contains("'shape': (256, 256)"));
    }

    #[test]
    fn test_payload_is_little_endian_row_major() {
        let grid = Grid::from_vec(1, 2, vec![1.0, -2.0]).unwrap();
        let bytes = encode_f32(&grid).unwrap();
        let payload = &bytes[bytes.len() - 8..];

        assert_eq!(&payload[..4], &1.0f32.to_le_bytes());
        assert_eq!(&payload[4..], &(-2.0f32).to_le_bytes());
    }

    #[test]
    fn test_decode_recovers_grid() {
        let grid = Grid::from_fn(3, 5, |r, c| r as f32 - c as f32 * 0.5);
        let decoded = decode_f32(&encode_f32(&grid).unwrap()).unwrap();
        assert_eq!(decoded, grid);
    }

    #[test]
    fn test_decode_rejects_bad_magic() {
        let mut bytes = encode_f32(&Grid::zeros(2, 2)).unwrap();
        bytes[0] = 0x00;
        let err = decode_f32(&bytes).unwrap_err();
        assert!(err.to_string().contains("magic"));
    }

    #[test]
    fn test_decode_rejects_truncated_payload() {
        let bytes = encode_f32(&Grid::zeros(2, 2)).unwrap();
        let err = decode_f32(&bytes[..bytes.len() - 4]).unwrap_err();
        assert!(matches!(err, JobError::Npy(_)));
    }

    #[test]
    fn test_decode_rejects_wrong_dtype() {
        let mut bytes = encode_f32(&Grid::zeros(2, 2)).unwrap();
        let pos = bytes.windows(3).position(|w| w == b"<f4").unwrap();
        bytes[pos + 2] = b'8';
        let err = decode_f32(&bytes).unwrap_err();
        assert!(err.to_string().contains("dtype"));
    }
}
