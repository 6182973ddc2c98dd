//! Shared folder URL parsing.

use url::Url;

/// Parses a folder URL; relative paths and malformed input are rejected.
pub fn parse_folder_url(raw: &str) -> Result<Url, url::ParseError> {
    Url::parse(raw.trim())
}

/// Extracts the folder id from a Google Drive folder link.
///
/// Recognizes `/drive/folders/<id>`, `/drive/u/<n>/folders/<id>` and the
/// `?id=<id>` forms (`open`, `embeddedfolderview`). Returns `None` for other hosts.
pub fn drive_folder_id(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    if host != "drive.google.com" && !host.ends_with(".drive.google.com") {
        return None;
    }

    let mut segments = url.path_segments()?;
    if segments.any(|s| s == "folders") {
        return segments
            .next()
            .filter(|id| !id.is_empty())
            .map(str::to_string);
    }

    url.query_pairs()
        .find(|(k, _)| k == "id")
        .map(|(_, v)| v.into_owned())
        .filter(|id| !id.is_empty())
}
