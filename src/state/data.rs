/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the API layer and the UI layer.

use iced::widget::image::Handle;

use crate::api::ImageRecord;

/// Load state of one downloaded image (thumbnail or full-size tier)
#[derive(Debug, Clone, Default)]
pub enum ImageLoad {
    /// No download started yet (full-size images wait for the viewer)
    #[default]
    NotRequested,
    /// Download in flight
    Loading,
    /// Decoded and ready to draw
    Ready(Handle),
    /// Download or decode failed; a placeholder is drawn instead
    Failed,
}

impl ImageLoad {
    /// The decoded handle, if this image is ready
    pub fn handle(&self) -> Option<&Handle> {
        match self {
            ImageLoad::Ready(handle) => Some(handle),
            _ => None,
        }
    }
}

/// One image in the gallery: the API record plus the load state of its
/// two size tiers
#[derive(Debug, Clone)]
pub struct GalleryImage {
    /// The record exactly as the API returned it
    pub record: ImageRecord,
    /// Medium-size preview for the grid; download starts on render
    pub thumbnail: ImageLoad,
    /// Full-size tier for the modal viewer; downloaded on demand
    pub full_size: ImageLoad,
}

impl GalleryImage {
    /// Wrap a fresh API record; its thumbnail download is about to start
    pub fn new(record: ImageRecord) -> Self {
        Self {
            record,
            thumbnail: ImageLoad::Loading,
            full_size: ImageLoad::NotRequested,
        }
    }
}

/// Decode downloaded image bytes into a drawable handle.
/// Returns `None` for data the decoder rejects; the caller marks the
/// tier as failed rather than crashing.
pub fn decode_image(bytes: &[u8]) -> Option<Handle> {
    let decoded = image::load_from_memory(bytes).ok()?;
    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();
    Some(Handle::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_png() {
        // 2x2 solid red PNG built in memory
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        assert!(decode_image(&bytes).is_some());
    }

    #[test]
    fn test_decode_garbage_fails_cleanly() {
        assert!(decode_image(b"definitely not an image").is_none());
        assert!(decode_image(&[]).is_none());
    }
}
