//! Helpers for `data:` URIs holding generated images.
//!
//! Generated images travel as `data:image/png;base64,<payload>`. The payload
//! after the first comma is what gets sent back to the service when an image
//! is reused as a visual reference.

/// MIME type of every generated image.
pub const PNG_MIME: &str = "image/png";

/// Wrap a base64 PNG payload in a data URI.
///
/// # Examples
///
/// ```
/// use inkwell_core::data_uri;
///
/// assert_eq!(data_uri::png("iVBOR"), "data:image/png;base64,iVBOR");
/// ```
pub fn png(base64: &str) -> String {
    format!("data:{};base64,{}", PNG_MIME, base64)
}

/// Payload after the first comma, if the URI has one and it is non-empty.
///
/// # Examples
///
/// ```
/// use inkwell_core::data_uri;
///
/// assert_eq!(data_uri::payload("data:image/png;base64,AAAA"), Some("AAAA"));
/// assert_eq!(data_uri::payload("data:image/png;base64,"), None);
/// assert_eq!(data_uri::payload("not a uri"), None);
/// ```
pub fn payload(uri: &str) -> Option<&str> {
    uri.split_once(',')
        .map(|(_, data)| data)
        .filter(|data| !data.is_empty())
}

/// Declared MIME type of a data URI.
///
/// # Examples
///
/// ```
/// use inkwell_core::data_uri;
///
/// assert_eq!(data_uri::mime("data:image/jpeg;base64,AAAA"), Some("image/jpeg"));
/// assert_eq!(data_uri::mime("image.png"), None);
/// ```
pub fn mime(uri: &str) -> Option<&str> {
    let header = uri.strip_prefix("data:")?.split_once(',')?.0;
    let mime = header.split(';').next()?;
    (!mime.is_empty()).then_some(mime)
}
