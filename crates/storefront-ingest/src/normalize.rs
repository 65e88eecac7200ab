//! Image reference normalization.
//!
//! Sheet editors paste whatever link their image host gave them: Imgur
//! page links, Imgur albums, Google Drive share links, or nothing at all.
//! [`normalize_image_reference`] turns each of these into something an
//! `<img src>` can load directly, falling back to fixed placeholders.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;

/// Shown when the sheet has no image for a product.
pub const NO_IMAGE_PLACEHOLDER: &str =
    "https://via.placeholder.com/400x300/6B7280/FFFFFF?text=Sem+Imagem";

/// Shown for Imgur album links, which have no single direct image.
pub const ALBUM_PLACEHOLDER: &str =
    "https://via.placeholder.com/400x300/6B7280/FFFFFF?text=Album+Imgur";

/// Shown for values that are not usable URLs.
pub const INVALID_URL_PLACEHOLDER: &str =
    "https://via.placeholder.com/400x300/6B7280/FFFFFF?text=Imagem+N%C3%A3o+Dispon%C3%ADvel";

const IMGUR_DIRECT_HOST: &str = "i.imgur.com";
const DRIVE_HOST: &str = "drive.google.com";

static DRIVE_FILE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/d/([A-Za-z0-9_-]+)").expect("valid drive file id regex"));

/// Maps a raw sheet value to a directly embeddable image URL.
///
/// Rules, first match wins:
///
/// | Input | Output |
/// |-------|--------|
/// | empty | [`NO_IMAGE_PLACEHOLDER`] |
/// | `imgur.com/a/<id>` (album) | [`ALBUM_PLACEHOLDER`] |
/// | `i.imgur.com/<file>` | parsed URL (`https://` added if schemeless) |
/// | `imgur.com/<id>` | `https://i.imgur.com/<id>.jpg` |
/// | `drive.google.com/.../d/<id>/...` | `https://drive.google.com/uc?id=<id>` |
/// | no `http(s)://` scheme, or unparseable | [`INVALID_URL_PLACEHOLDER`] |
/// | any other absolute URL | parsed URL |
///
/// Pure and total: never panics, never returns an empty string.
#[must_use]
pub fn normalize_image_reference(raw: &str) -> String {
    let cleaned = raw.replace('"', "");
    let value = cleaned.trim();

    if value.is_empty() {
        return NO_IMAGE_PLACEHOLDER.to_owned();
    }

    if let Some(url) = parse_lenient(value) {
        let host = url.host_str().unwrap_or_default().to_ascii_lowercase();

        if is_imgur_host(&host) {
            return normalize_imgur(value, &url, &host);
        }

        if host == DRIVE_HOST {
            if let Some(id) = drive_file_id(&url) {
                let direct = format!("https://{DRIVE_HOST}/uc?id={id}");
                tracing::debug!(raw = value, %direct, "rewrote drive share link");
                return direct;
            }
        }
    }

    if has_http_scheme(value) {
        if let Ok(url) = Url::parse(value) {
            if url.host_str().is_some() {
                return String::from(url);
            }
        }
    }

    tracing::debug!(raw = value, "image reference is not a usable URL");
    INVALID_URL_PLACEHOLDER.to_owned()
}

fn normalize_imgur(value: &str, url: &Url, host: &str) -> String {
    if url.path().starts_with("/a/") {
        tracing::debug!(raw = value, "imgur album links cannot be embedded");
        return ALBUM_PLACEHOLDER.to_owned();
    }

    if host == IMGUR_DIRECT_HOST {
        return url.as_str().to_owned();
    }

    match imgur_id(url) {
        Some(id) => {
            let direct = format!("https://{IMGUR_DIRECT_HOST}/{id}.jpg");
            tracing::debug!(raw = value, %direct, "rewrote imgur short link");
            direct
        }
        None => INVALID_URL_PLACEHOLDER.to_owned(),
    }
}

/// Last non-empty path segment. The query string is already split off by
/// the URL parser.
fn imgur_id(url: &Url) -> Option<&str> {
    url.path_segments()?.rfind(|s| !s.is_empty())
}

fn drive_file_id(url: &Url) -> Option<&str> {
    DRIVE_FILE_ID_RE
        .captures(url.path())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn is_imgur_host(host: &str) -> bool {
    host == "imgur.com" || host.ends_with(".imgur.com")
}

fn has_http_scheme(value: &str) -> bool {
    let lower = value.get(..8).unwrap_or(value).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Parses `value` as a URL, assuming `https://` when no scheme is present.
fn parse_lenient(value: &str) -> Option<Url> {
    let candidate: Cow<'_, str> = if has_http_scheme(value) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("https://{value}"))
    };
    Url::parse(&candidate).ok()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
