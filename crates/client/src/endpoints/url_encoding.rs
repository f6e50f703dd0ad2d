//! Percent-encoding for API path segments.
//!
//! Index, repository and snapshot names are interpolated into URL paths, so
//! characters such as `/`, `?` or `#` must be encoded to keep each name in a
//! single segment.
//!
//! ```
//! use es_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("logs/2018.11.21"), "logs%2F2018.11.21");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// RFC 3986 section 3.3 plus characters that would split or reinterpret a
/// segment. `:` is left alone since snapshot names carry RFC 3339 times.
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
    .add(b'~')
    .add(b'%') // prevents double-decoding
    .add(b'/') // prevents path traversal
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as a single URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Encode a comma-joined list of names, keeping the separating commas.
///
/// The restore endpoint accepts `snap-a,snap-b` as one path segment.
pub fn encode_snapshot_list(names: &str) -> String {
    names
        .split(',')
        .map(encode_path_segment)
        .collect::<Vec<_>>()
        .join(",")
}
