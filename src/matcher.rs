use once_cell::sync::Lazy;
use regex::Regex;

use crate::Error;

// anchored to the whole string so a vimeo link buried in a longer string
// doesn't count as one
static VIMEO_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?xi)
        ^(?:https?://)?
        (?:www\.|player\.)?
        vimeo\.com/
        (?:
            channels/(?:\w+/)? |
            groups/[^/]+/videos/ |
            video/
        )?
        (?P<id>[0-9]+)
        (?:[/?].*)?$
    ",
    )
    .expect("vimeo url pattern must compile")
});

// looser shape check, used only to tell "not vimeo at all" apart from
// "vimeo host but no id to extract"
static VIMEO_HOST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:www\.|player\.)?vimeo\.com(?:[/?].*)?$")
        .expect("vimeo host pattern must compile")
});

/// Does this string name a vimeo video we could resolve?
pub fn is_vimeo_url(url: &str) -> bool {
    extract_video_id(url).is_some()
}

/// The decimal id embedded in a vimeo video url, if there is one.
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIMEO_URL
        .captures(url)
        .and_then(|caps| caps.name("id"))
        .map(|id| id.as_str())
        .filter(|id| !id.is_empty())
}

/// A validated vimeo video identifier.
///
/// Only obtainable via [`VideoId::parse`], so holding one proves the url
/// matched and carried a non-empty digit sequence. Config fetches take a
/// `&VideoId`, never a raw string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub fn parse(url: &str) -> Result<Self, Error> {
        match extract_video_id(url) {
            Some(id) => Ok(Self(id.to_string())),
            None if VIMEO_HOST.is_match(url) => Err(Error::NoVideoId(url.to_string())),
            None => Err(Error::InvalidUrl(url.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
