use reqwest::Url;

use crate::error::IngestError;

/// Resolves the URL to download the sheet as CSV.
///
/// Google Sheets editor and share links
/// (`https://docs.google.com/spreadsheets/d/<id>/edit#gid=<gid>`) are
/// rewritten to `.../d/<id>/export?format=csv&gid=<gid>`, with `gid`
/// defaulting to `0`. Export links and URLs on any other host are returned
/// unchanged.
///
/// # Errors
///
/// Returns [`IngestError::InvalidSheetUrl`] if `sheet_url` is not an absolute
/// `http(s)` URL.
pub fn csv_export_url(sheet_url: &str) -> Result<String, IngestError> {
    let invalid = |reason: String| IngestError::InvalidSheetUrl {
        url: sheet_url.to_owned(),
        reason,
    };

    let url = Url::parse(sheet_url).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme \"{}\"", url.scheme())));
    }

    if url.host_str() != Some("docs.google.com") {
        return Ok(sheet_url.to_owned());
    }

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    let (sheet_id, action) = match segments.as_slice() {
        ["spreadsheets", "d", id, rest @ ..] => (*id, rest.first().copied()),
        _ => return Ok(sheet_url.to_owned()),
    };

    if action == Some("export") {
        return Ok(sheet_url.to_owned());
    }

    let gid = find_gid(&url).unwrap_or_else(|| "0".to_owned());
    Ok(format!(
        "https://docs.google.com/spreadsheets/d/{sheet_id}/export?format=csv&gid={gid}"
    ))
}

/// `gid` from the query string, or from a `#gid=<n>` fragment.
fn find_gid(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == "gid")
        .map(|(_, v)| v.into_owned())
        .or_else(|| {
            url.fragment()?
                .split('&')
                .find_map(|pair| pair.strip_prefix("gid="))
                .map(str::to_owned)
        })
        .filter(|gid| !gid.is_empty() && gid.chars().all(|c| c.is_ascii_digit()))
}
