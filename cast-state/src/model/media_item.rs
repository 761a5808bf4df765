//! Caller-facing media item

use serde::{Deserialize, Serialize};
use url::Url;

use super::{MediaImage, MediaInformation, MediaMetadata, StreamType};
use crate::error::{Result, StateError};

/// Kind of media, which determines the content type sent to the receiver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Audio,
    Video,
    Image,
    /// Explicit MIME type
    Other(String),
}

impl MediaKind {
    pub fn content_type(&self) -> &str {
        match self {
            MediaKind::Audio => "audio/mpeg",
            MediaKind::Video => "video/mp4",
            MediaKind::Image => "image/jpeg",
            MediaKind::Other(mime) => mime,
        }
    }
}

/// Artwork dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        DEFAULT_IMAGE_SIZE
    }
}

/// Size used for artwork when the item does not specify one
pub const DEFAULT_IMAGE_SIZE: ImageSize = ImageSize::new(200, 200);

/// An immutable description of something to cast
///
/// # Example
///
/// ```
/// use cast_state::{MediaItem, MediaKind, ImageSize};
///
/// let item = MediaItem::new("https://example.com/song.mp3", MediaKind::Audio)
///     .unwrap()
///     .with_title("Song")
///     .with_image("https://example.com/cover.jpg", None);
///
/// let info = item.to_media_information(ImageSize::default());
/// assert_eq!(info.content_type, "audio/mpeg");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    content_url: String,
    title: Option<String>,
    subtitle: Option<String>,
    image_url: Option<String>,
    image_size: Option<ImageSize>,
    kind: MediaKind,
}

impl MediaItem {
    /// Create an item. The content URL must not be blank.
    pub fn new(content_url: impl Into<String>, kind: MediaKind) -> Result<Self> {
        let content_url = content_url.into();
        if content_url.trim().is_empty() {
            return Err(StateError::MissingContentUrl);
        }

        Ok(Self {
            content_url,
            title: None,
            subtitle: None,
            image_url: None,
            image_size: None,
            kind,
        })
    }

    pub fn audio(content_url: impl Into<String>) -> Result<Self> {
        Self::new(content_url, MediaKind::Audio)
    }

    pub fn video(content_url: impl Into<String>) -> Result<Self> {
        Self::new(content_url, MediaKind::Video)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Attach artwork. `size` falls back to the caller's default when `None`.
    pub fn with_image(mut self, url: impl Into<String>, size: Option<ImageSize>) -> Self {
        self.image_url = Some(url.into());
        self.image_size = size;
        self
    }

    pub fn content_url(&self) -> &str {
        &self.content_url
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn image_size(&self) -> Option<ImageSize> {
        self.image_size
    }

    pub fn kind(&self) -> &MediaKind {
        &self.kind
    }

    pub fn content_type(&self) -> &str {
        self.kind.content_type()
    }

    /// Resolve the artwork, if any
    pub fn image(&self, default_size: ImageSize) -> Result<Option<MediaImage>> {
        let Some(raw) = self.image_url.as_deref() else {
            return Ok(None);
        };

        let url = Url::parse(raw)?;
        let size = self.image_size.unwrap_or(default_size);
        Ok(Some(MediaImage {
            url: url.to_string(),
            width: size.width,
            height: size.height,
        }))
    }

    /// Display metadata, or `None` when the item carries none
    pub fn metadata(&self, default_size: ImageSize) -> Option<MediaMetadata> {
        let images = match self.image(default_size) {
            Ok(image) => image.into_iter().collect(),
            Err(e) => {
                tracing::warn!("Skipping artwork for {}: {}", self.content_url, e);
                Vec::new()
            }
        };

        let metadata = MediaMetadata {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            images,
        };

        (!metadata.is_empty()).then_some(metadata)
    }

    /// Build the description sent to the receiver on load
    pub fn to_media_information(&self, default_size: ImageSize) -> MediaInformation {
        MediaInformation {
            content_id: self.content_url.clone(),
            stream_type: StreamType::None,
            content_type: self.content_type().to_string(),
            metadata: self.metadata(default_size),
            stream_duration: 0.0,
            tracks: Vec::new(),
        }
    }
}
