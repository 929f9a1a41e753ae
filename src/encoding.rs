//! Content-Encoding aware body decoding
//!
//! The HTTP client is built without automatic decompression, so compressed
//! registry responses arrive as raw bytes and are inflated here.

use std::io::{self, Read};

use flate2::read::{DeflateDecoder, GzDecoder, ZlibDecoder};

/// Compression applied to a response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Gzip,
    Deflate,
    Identity,
}

impl ContentEncoding {
    /// Interprets a `Content-Encoding` header value.
    ///
    /// Unknown or missing codings are treated as identity.
    pub fn from_header(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return ContentEncoding::Identity;
        };
        let value = value.to_ascii_lowercase();
        if value.contains("gzip") {
            ContentEncoding::Gzip
        } else if value.contains("deflate") {
            ContentEncoding::Deflate
        } else {
            ContentEncoding::Identity
        }
    }
}

/// Decodes `body` according to `encoding` and returns it as UTF-8 text.
pub fn decode_body(encoding: ContentEncoding, body: &[u8]) -> io::Result<String> {
    let mut text = String::new();
    match encoding {
        ContentEncoding::Gzip => {
            GzDecoder::new(body).read_to_string(&mut text)?;
        }
        ContentEncoding::Deflate => {
            // RFC 9110 deflate is zlib-wrapped, but some servers send raw streams
            if ZlibDecoder::new(body).read_to_string(&mut text).is_err() {
                text.clear();
                DeflateDecoder::new(body).read_to_string(&mut text)?;
            }
        }
        ContentEncoding::Identity => {
            text = String::from_utf8(body.to_vec())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        }
    }
    Ok(text)
}
