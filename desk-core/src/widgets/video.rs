use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DeskError, DeskResult};

pub const MAX_RECENT: usize = 10;

static YOUTUBE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:www\.|m\.)?(?:youtube\.com/(?:watch\?(?:\S*&)?v=|embed/|shorts/)|youtu\.be/)([A-Za-z0-9_-]{11})(?:[?&#/]\S*)?$",
    )
    .expect("youtube pattern")
});

static VIMEO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.|player\.)?vimeo\.com/(?:video/)?(\d+)(?:[?#/]\S*)?$")
        .expect("vimeo pattern")
});

static DIRECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://\S+\.(?:mp4|webm|ogg|ogv|m3u8)(?:[?#]\S*)?$").expect("direct pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VideoSource {
    YouTube { id: String },
    Vimeo { id: String },
    Direct { url: String },
}

impl VideoSource {
    /// URL for an `<iframe>` (hosted players) or `<video>` (direct files).
    pub fn embed_url(&self) -> String {
        match self {
            VideoSource::YouTube { id } => format!("https://www.youtube.com/embed/{id}"),
            VideoSource::Vimeo { id } => format!("https://player.vimeo.com/video/{id}"),
            VideoSource::Direct { url } => url.clone(),
        }
    }

    pub fn is_embedded_player(&self) -> bool {
        !matches!(self, VideoSource::Direct { .. })
    }
}

pub fn parse_video_url(input: &str) -> DeskResult<VideoSource> {
    let url = input.trim();
    if url.is_empty() {
        return Err(DeskError::invalid("Paste a video link"));
    }
    if let Some(caps) = YOUTUBE_RE.captures(url) {
        return Ok(VideoSource::YouTube {
            id: caps[1].to_string(),
        });
    }
    if let Some(caps) = VIMEO_RE.captures(url) {
        return Ok(VideoSource::Vimeo {
            id: caps[1].to_string(),
        });
    }
    if DIRECT_RE.is_match(url) {
        return Ok(VideoSource::Direct {
            url: url.to_string(),
        });
    }
    Err(DeskError::invalid(format!("Unsupported video link: {url}")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogVideo {
    pub id: &'static str,
    pub title: &'static str,
    pub channel: &'static str,
}

impl CatalogVideo {
    pub fn url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

/// Built-in lofi streams shown before the user pastes anything.
pub const LOFI_CATALOG: [CatalogVideo; 6] = [
    CatalogVideo {
        id: "5qap5aO4i9A",
        title: "lofi hip hop radio - beats to relax/study to",
        channel: "Lofi Girl",
    },
    CatalogVideo {
        id: "jfKfPfyJRdk",
        title: "lofi hip hop radio - beats to sleep/chill to",
        channel: "Lofi Girl",
    },
    CatalogVideo {
        id: "lTRiuFIWV54",
        title: "Study Music Alpha Waves: Relaxing Studying Music",
        channel: "YellowBrickCinema",
    },
    CatalogVideo {
        id: "n61ULEU7CO0",
        title: "Ambient Study Music To Concentrate",
        channel: "The Relaxed Movement",
    },
    CatalogVideo {
        id: "DWcJFNfaw9c",
        title: "Chillhop Radio - jazzy & lofi hip hop beats",
        channel: "Chillhop Music",
    },
    CatalogVideo {
        id: "XULUBg_ZcAU",
        title: "lofi beats - focus music for work and study",
        channel: "Chilled Cow",
    },
];

/// Case-insensitive match on title or channel. A blank query lists everything.
pub fn search_catalog(query: &str) -> Vec<CatalogVideo> {
    let query = query.trim().to_lowercase();
    LOFI_CATALOG
        .iter()
        .filter(|video| {
            query.is_empty()
                || video.title.to_lowercase().contains(&query)
                || video.channel.to_lowercase().contains(&query)
        })
        .copied()
        .collect()
}

/// Recently played links, newest first, plus whatever was on screen last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentVideos {
    pub urls: Vec<String>,
    #[serde(default)]
    pub current: Option<String>,
}

impl RecentVideos {
    /// Records a link as played and makes it the current video.
    pub fn push(&mut self, url: &str) {
        let url = url.trim();
        self.urls.retain(|u| u != url);
        self.urls.insert(0, url.to_string());
        self.urls.truncate(MAX_RECENT);
        self.current = Some(url.to_string());
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// Forgets the history; the current video keeps playing.
    pub fn clear(&mut self) {
        self.urls.clear();
    }

    /// The saved current video, if it still parses.
    pub fn current_source(&self) -> Option<VideoSource> {
        self.current
            .as_deref()
            .and_then(|url| parse_video_url(url).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yt(id: &str) -> VideoSource {
        VideoSource::YouTube { id: id.into() }
    }

    #[test]
    fn youtube_variants() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?feature=share&v=dQw4w9WgXcQ&t=42",
            "youtu.be/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?si=abc",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://m.youtube.com/shorts/dQw4w9WgXcQ",
        ] {
            assert_eq!(parse_video_url(url).unwrap(), yt("dQw4w9WgXcQ"), "{url}");
        }
    }

    #[test]
    fn vimeo_and_direct() {
        assert_eq!(
            parse_video_url("https://vimeo.com/76979871").unwrap(),
            VideoSource::Vimeo {
                id: "76979871".into()
            }
        );
        let direct = parse_video_url(" https://cdn.example.com/clips/intro.MP4?x=1 ").unwrap();
        assert_eq!(
            direct,
            VideoSource::Direct {
                url: "https://cdn.example.com/clips/intro.MP4?x=1".into()
            }
        );
        assert!(!direct.is_embedded_player());
    }

    #[test]
    fn rejects_unknown_links() {
        assert!(parse_video_url("").is_err());
        assert!(parse_video_url("https://example.com/page.html").is_err());
        assert!(parse_video_url("ftp://host/movie.mp4").is_err());
        assert!(parse_video_url("https://youtube.com/watch?v=short").is_err());
    }

    #[test]
    fn embed_urls() {
        assert_eq!(
            yt("dQw4w9WgXcQ").embed_url(),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(
            VideoSource::Vimeo { id: "1".into() }.embed_url(),
            "https://player.vimeo.com/video/1"
        );
    }

    #[test]
    fn recent_is_deduplicated_and_capped() {
        let mut recent = RecentVideos::default();
        for i in 0..12 {
            recent.push(&format!("https://v/{i}.mp4"));
        }
        recent.push("https://v/5.mp4");
        assert_eq!(recent.urls.len(), MAX_RECENT);
        assert_eq!(recent.urls[0], "https://v/5.mp4");
        assert_eq!(recent.urls.iter().filter(|u| *u == "https://v/5.mp4").count(), 1);
    }

    #[test]
    fn catalog_search_ignores_case_and_checks_channel() {
        assert_eq!(search_catalog("").len(), LOFI_CATALOG.len());
        assert_eq!(search_catalog("   ").len(), LOFI_CATALOG.len());

        let girl = search_catalog("LOFI GIRL");
        assert_eq!(girl.len(), 2);
        assert!(girl.iter().all(|v| v.channel == "Lofi Girl"));

        let jazzy = search_catalog("Jazzy");
        assert_eq!(jazzy.len(), 1);
        assert_eq!(jazzy[0].id, "DWcJFNfaw9c");

        assert!(search_catalog("death metal").is_empty());
    }

    #[test]
    fn catalog_entries_are_playable_links() {
        for video in LOFI_CATALOG {
            assert_eq!(parse_video_url(&video.url()).unwrap(), yt(video.id));
        }
    }

    #[test]
    fn current_video_is_remembered_and_closable() {
        let mut recent = RecentVideos::default();
        assert_eq!(recent.current_source(), None);

        recent.push(" https://youtu.be/dQw4w9WgXcQ ");
        assert_eq!(recent.current.as_deref(), Some("https://youtu.be/dQw4w9WgXcQ"));
        assert_eq!(recent.current_source(), Some(yt("dQw4w9WgXcQ")));

        recent.clear();
        assert!(recent.urls.is_empty());
        assert!(recent.current.is_some());

        recent.close();
        assert_eq!(recent.current_source(), None);
    }

    #[test]
    fn history_saved_without_current_still_loads() {
        let recent: RecentVideos =
            serde_json::from_str(r#"{"urls":["https://v/1.mp4"]}"#).unwrap();
        assert_eq!(recent.urls, ["https://v/1.mp4"]);
        assert_eq!(recent.current, None);
    }
}
