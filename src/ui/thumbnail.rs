//! Card images drawn with half-block characters.
//!
//! Each terminal cell shows two vertically stacked pixels: `▀` with the
//! foreground set to the top pixel and the background to the bottom one.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::imageops::FilterType;
use parking_lot::Mutex;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Bytes of a `data:<mime>;base64,<payload>` URI. `None` for anything else.
pub fn decode_data_uri(uri: &str) -> Option<Vec<u8>> {
    let rest = uri.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    if !meta.ends_with(";base64") {
        return None;
    }
    STANDARD.decode(payload.trim()).ok()
}

/// Rasterize an image URI into `height` lines of `width` cells.
pub fn render_thumbnail(uri: &str, width: u16, height: u16) -> Option<Vec<Line<'static>>> {
    if width == 0 || height == 0 {
        return None;
    }
    let bytes = decode_data_uri(uri)?;
    let image = image::load_from_memory(&bytes).ok()?;
    let pixels = image
        .resize_exact(width as u32, height as u32 * 2, FilterType::Triangle)
        .to_rgb8();

    let lines = (0..height as u32)
        .map(|row| {
            let spans: Vec<Span<'static>> = (0..width as u32)
                .map(|col| {
                    let top = pixels.get_pixel(col, row * 2);
                    let bottom = pixels.get_pixel(col, row * 2 + 1);
                    Span::styled(
                        "▀",
                        Style::default()
                            .fg(Color::Rgb(top[0], top[1], top[2]))
                            .bg(Color::Rgb(bottom[0], bottom[1], bottom[2])),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    Some(lines)
}

/// Memoized thumbnails keyed by image and size.
///
/// Decoding a JPEG on every frame is too slow for the tick rate.
#[derive(Default)]
pub struct ThumbnailCache {
    entries: Mutex<HashMap<(u64, u16, u16), Option<Vec<Line<'static>>>>>,
}

impl ThumbnailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, uri: &str, width: u16, height: u16) -> Option<Vec<Line<'static>>> {
        let mut hasher = DefaultHasher::new();
        uri.hash(&mut hasher);
        let key = (hasher.finish(), width, height);

        self.entries
            .lock()
            .entry(key)
            .or_insert_with(|| render_thumbnail(uri, width, height))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop everything, e.g. after the result set changes.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
