//! Image source parsing and imgur extension guessing.

use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;

/// Host serving direct imgur image files.
pub const IMGUR_IMAGE_HOST: &str = "https://i.imgur.com";

/// Extensions tried, in order, when an imgur page URL is given.
pub const EXTENSION_GUESSES: &[&str] = &[".jpg", ".jpeg", ".tif"];

/// Last path segment of an imgur link: `<id>` or `<id>.<ext>`.
static IMGUR_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9]+)(\.[a-zA-Z0-9]+)?$").expect("imgur id pattern is valid")
});

/// Where a source image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    File(PathBuf),
}

impl ImageSource {
    /// `http://` and `https://` inputs are URLs, everything else a path.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ImageSource::Url(trimmed.to_string())
        } else {
            ImageSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Url(url) => write!(f, "{}", url),
            ImageSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Direct-image URLs to try for `url`, in order.
///
/// Links on `imgur.com` or one of its subdomains (`https://imgur.com/6cf1KE0`,
/// `https://i.imgur.com/6cf1KE0.png`, gallery links) are rewritten onto
/// `image_host`, trying the link's own extension first and then
/// [`EXTENSION_GUESSES`]. Query and fragment of an imgur link are dropped.
/// Any other URL is returned as is.
pub fn candidate_urls(url: &str, image_host: &str) -> Vec<String> {
    let Some((id, own_ext)) = imgur_id(url) else {
        return vec![url.to_string()];
    };

    let host = image_host.trim_end_matches('/');
    let mut candidates: Vec<String> = Vec::new();
    for ext in own_ext.iter().map(String::as_str).chain(EXTENSION_GUESSES.iter().copied()) {
        let candidate = format!("{}/{}{}", host, id, ext);
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }
    candidates
}

/// Image id and optional extension of an imgur link, `None` for other URLs.
fn imgur_id(url: &str) -> Option<(String, Option<String>)> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    if host != "imgur.com" && !host.ends_with(".imgur.com") {
        return None;
    }

    let last = parsed.path_segments()?.filter(|s| !s.is_empty()).last()?;
    let caps = IMGUR_ID_RE.captures(last)?;
    Some((
        caps[1].to_string(),
        caps.get(2).map(|m| m.as_str().to_string()),
    ))
}
