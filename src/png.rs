// src/png.rs
//! Structural checks for small PNG images
//!
//! Enough of the PNG container format to confirm the embedded icon is
//! well-formed: signature, chunk framing, chunk CRCs, IHDR/IEND placement,
//! and an IDAT stream that inflates to the exact scanline length. Filtering
//! and pixel values are not interpreted.

use flate2::read::ZlibDecoder;
use std::io::Read;
use thiserror::Error;

/// The 8-byte PNG file signature
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

const IHDR: [u8; 4] = *b"IHDR";
const IDAT: [u8; 4] = *b"IDAT";
const IEND: [u8; 4] = *b"IEND";

/// Errors found while checking PNG structure
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PngError {
    #[error("missing PNG signature")]
    BadSignature,

    #[error("truncated chunk at offset {0}")]
    Truncated(usize),

    #[error("CRC mismatch in {chunk} chunk (stored {stored:08x}, computed {computed:08x})")]
    CrcMismatch {
        chunk: String,
        stored: u32,
        computed: u32,
    },

    #[error("first chunk must be IHDR, found {0}")]
    MissingHeader(String),

    #[error("IHDR must be 13 bytes, found {0}")]
    BadHeaderLength(u32),

    #[error("last chunk must be IEND")]
    MissingEnd,

    #[error("data after IEND chunk")]
    TrailingData,

    #[error("no IDAT chunk")]
    MissingData,

    #[error("unsupported color type {color_type} at bit depth {bit_depth}")]
    UnsupportedFormat { color_type: u8, bit_depth: u8 },

    #[error("IDAT stream is not valid zlib: {0}")]
    Inflate(String),

    #[error("decoded image data is {actual} bytes, expected {expected}")]
    DataLength { expected: u64, actual: u64 },
}

/// What a structural check learned about an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngSummary {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    /// Chunk types in file order
    pub chunks: Vec<[u8; 4]>,
}

impl PngSummary {
    /// Number of chunks of the given type
    pub fn count(&self, chunk_type: &[u8; 4]) -> usize {
        self.chunks.iter().filter(|c| *c == chunk_type).count()
    }
}

struct Chunk<'a> {
    kind: [u8; 4],
    data: &'a [u8],
}

/// Check that `bytes` is a structurally valid PNG
pub fn inspect_png(bytes: &[u8]) -> Result<PngSummary, PngError> {
    if bytes.len() < PNG_SIGNATURE.len() || bytes[..8] != PNG_SIGNATURE {
        return Err(PngError::BadSignature);
    }

    let chunks = read_chunks(&bytes[8..])?;

    let header = chunks
        .first()
        .ok_or(PngError::Truncated(PNG_SIGNATURE.len()))?;
    if header.kind != IHDR {
        return Err(PngError::MissingHeader(chunk_name(&header.kind)));
    }
    if header.data.len() != 13 {
        return Err(PngError::BadHeaderLength(header.data.len() as u32));
    }
    if chunks.last().map(|c| c.kind) != Some(IEND) {
        return Err(PngError::MissingEnd);
    }

    let width = be_u32(&header.data[0..4]);
    let height = be_u32(&header.data[4..8]);
    let bit_depth = header.data[8];
    let color_type = header.data[9];

    if !chunks.iter().any(|c| c.kind == IDAT) {
        return Err(PngError::MissingData);
    }
    let idat: Vec<u8> = chunks
        .iter()
        .filter(|c| c.kind == IDAT)
        .flat_map(|c| c.data.iter().copied())
        .collect();

    let bits_per_pixel = u64::from(channels(color_type, bit_depth)?) * u64::from(bit_depth);
    let row_bytes = (u64::from(width) * bits_per_pixel).div_ceil(8);
    let expected = u64::from(height) * (1 + row_bytes);

    let mut decoded = Vec::new();
    ZlibDecoder::new(idat.as_slice())
        .read_to_end(&mut decoded)
        .map_err(|e| PngError::Inflate(e.to_string()))?;
    if decoded.len() as u64 != expected {
        return Err(PngError::DataLength {
            expected,
            actual: decoded.len() as u64,
        });
    }

    Ok(PngSummary {
        width,
        height,
        bit_depth,
        color_type,
        chunks: chunks.iter().map(|c| c.kind).collect(),
    })
}

fn read_chunks(mut rest: &[u8]) -> Result<Vec<Chunk<'_>>, PngError> {
    let mut chunks = Vec::new();
    let mut offset = PNG_SIGNATURE.len();

    while !rest.is_empty() {
        if rest.len() < 12 {
            return Err(PngError::Truncated(offset));
        }
        let len = be_u32(&rest[0..4]) as usize;
        if rest.len() < 12 + len {
            return Err(PngError::Truncated(offset));
        }

        let kind: [u8; 4] = [rest[4], rest[5], rest[6], rest[7]];
        let data = &rest[8..8 + len];
        let stored = be_u32(&rest[8 + len..12 + len]);

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&kind);
        hasher.update(data);
        let computed = hasher.finalize();
        if stored != computed {
            return Err(PngError::CrcMismatch {
                chunk: chunk_name(&kind),
                stored,
                computed,
            });
        }

        if chunks.last().map(|c: &Chunk<'_>| c.kind) == Some(IEND) {
            return Err(PngError::TrailingData);
        }
        chunks.push(Chunk { kind, data });

        rest = &rest[12 + len..];
        offset += 12 + len;
    }

    Ok(chunks)
}

/// Samples per pixel for a color type, rejecting invalid depth pairings
fn channels(color_type: u8, bit_depth: u8) -> Result<u8, PngError> {
    let (channels, depths): (u8, &[u8]) = match color_type {
        0 => (1, &[1, 2, 4, 8, 16][..]),
        2 => (3, &[8, 16][..]),
        3 => (1, &[1, 2, 4, 8][..]),
        4 => (2, &[8, 16][..]),
        6 => (4, &[8, 16][..]),
        _ => (0, &[][..]),
    };
    if channels == 0 || !depths.contains(&bit_depth) {
        return Err(PngError::UnsupportedFormat {
            color_type,
            bit_depth,
        });
    }
    Ok(channels)
}

fn be_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn chunk_name(kind: &[u8; 4]) -> String {
    String::from_utf8_lossy(kind).into_owned()
}
