//! Percent-encoding for user-supplied URL path segments.
//!
//! Report file names are interpolated into `/reports/download/{filename}`;
//! without encoding a `/` would add path levels and a `?` would start a query.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in a single path segment.
///
/// RFC 3986 reserved and unsafe characters, plus `%` so already-encoded input
/// is not decoded twice by the server.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as one URL path segment.
///
/// ```
/// use preeval_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("reporte 1.md"), "reporte%201.md");
/// assert_eq!(encode_path_segment("../secret"), "..%2Fsecret");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
