use serde::Deserialize;

/// The player-config document for a single video.
///
/// Every field is optional; the endpoint serves wildly different shapes
/// depending on the video's privacy settings, so absence anywhere must not
/// be a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerConfig {
    #[serde(default)]
    pub request: Option<RequestInfo>,

    #[serde(default)]
    pub video: Option<VideoInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestInfo {
    #[serde(default)]
    pub files: Option<Files>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Files {
    #[serde(default)]
    pub progressive: Option<Vec<ProgressiveStream>>,
}

/// One direct-download mp4 variant.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressiveStream {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub quality: Option<String>,

    #[serde(default)]
    pub width: Option<i64>,

    #[serde(default)]
    pub height: Option<i64>,

    #[serde(default)]
    pub fps: Option<f64>,
}

/// The metadata block, handy for labelling the widget.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub title: String,

    /// seconds
    #[serde(default)]
    pub duration: i64,

    #[serde(default)]
    pub width: i64,

    #[serde(default)]
    pub height: i64,

    #[serde(default)]
    pub owner: Option<Owner>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub name: String,
}

/// Pick the stream to play: the first progressive descriptor with a
/// non-empty url, in the order the server listed them. Later descriptors
/// are never consulted once one matches.
pub fn select_stream_url(config: &PlayerConfig) -> Option<&str> {
    config
        .request
        .as_ref()?
        .files
        .as_ref()?
        .progressive
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|stream| stream.url.as_deref())
        .find(|url| !url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(urls: &[&str]) -> PlayerConfig {
        PlayerConfig {
            request: Some(RequestInfo {
                files: Some(Files {
                    progressive: Some(
                        urls.iter()
                            .map(|url| ProgressiveStream {
                                url: Some(url.to_string()),
                                ..Default::default()
                            })
                            .collect(),
                    ),
                }),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn first_non_empty_wins() {
        let config = config_with(&["", "a.mp4", "b.mp4"]);
        assert_eq!(select_stream_url(&config), Some("a.mp4"));
    }

    #[test]
    fn nothing_usable() {
        assert_eq!(select_stream_url(&config_with(&[])), None);
        assert_eq!(select_stream_url(&config_with(&["", ""])), None);
        assert_eq!(select_stream_url(&PlayerConfig::default()), None);

        // descriptors may omit the url entirely
        let config = PlayerConfig {
            request: Some(RequestInfo {
                files: Some(Files {
                    progressive: Some(vec![ProgressiveStream::default()]),
                }),
            }),
            ..Default::default()
        };
        assert_eq!(select_stream_url(&config), None);
    }

    #[test]
    fn parses_a_real_shaped_document() {
        let json = serde_json::json!({
            "request": {
                "files": {
                    "progressive": [
                        { "url": "https://example.invalid/360.mp4", "quality": "360p", "width": 640, "height": 360, "fps": 25.0 },
                        { "url": "https://example.invalid/720.mp4", "quality": "720p", "width": 1280, "height": 720, "fps": 25.0 }
                    ],
                    "hls": { "cdns": {} }
                }
            },
            "video": {
                "id": 76979871,
                "title": "some title",
                "duration": 152,
                "width": 1280,
                "height": 720,
                "owner": { "name": "someone" }
            }
        });

        let config: PlayerConfig = serde_json::from_value(json).unwrap();
        assert_eq!(
            select_stream_url(&config),
            Some("https://example.invalid/360.mp4")
        );

        let video = config.video.unwrap();
        assert_eq!(video.id, 76_979_871);
        assert_eq!(video.duration, 152);
        assert_eq!(video.owner.unwrap().name, "someone");
    }
}
