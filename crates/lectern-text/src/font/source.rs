use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use swash::{FontRef, Metrics};
use tracing::debug;

use crate::font::registry::RegistryShared;
use crate::font::{FontError, FontMetrics, Result};

/// Loaded font file (TTF/OTF) that [`Face`](crate::Face)s are created from.
///
/// Owns the font bytes and the metrics extracted from them. A source is
/// shared behind `Arc`; when the last handle drops, every
/// [`FontRegistry`](crate::FontRegistry) it was registered in forgets it.
#[derive(Debug)]
pub struct FontSource {
    /// Full font data.
    data: Arc<[u8]>,
    /// Font index within the file (for collections).
    index: u32,
    /// Offset to the table directory for this font.
    offset: u32,
    /// Cache key used internally by swash.
    key: swash::CacheKey,
    /// Extracted font metrics in font units.
    metrics: FontMetrics,
    /// Registry entries that must be evicted when this source is dropped.
    registrations: Mutex<Vec<Registration>>,
}

#[derive(Debug)]
struct Registration {
    registry: Weak<RegistryShared>,
    name: String,
}

impl FontSource {
    /// Create a font source from raw bytes and a font index within the file.
    pub fn from_bytes(data: Arc<[u8]>, index: usize) -> Result<Self> {
        let font = FontRef::from_index(&data, index).ok_or(FontError::InvalidFont)?;
        let metrics = Self::metrics_from_swash(&font);
        let (offset, key) = (font.offset, font.key);
        Ok(Self {
            data,
            index: index as u32,
            offset,
            key,
            metrics,
            registrations: Mutex::new(Vec::new()),
        })
    }

    /// Create a font source from raw bytes owned by a `Vec<u8>`.
    pub fn from_vec(data: Vec<u8>, index: usize) -> Result<Self> {
        Self::from_bytes(Arc::from(data), index)
    }

    /// Create a font source from a font file on disk.
    pub fn from_path(path: impl AsRef<std::path::Path>, index: usize) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_vec(data, index)
    }

    /// Raw font bytes, for libraries that parse the font themselves
    /// (harfrust).
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Font index within the file.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Return a transient `FontRef` for interacting with swash APIs.
    pub fn as_swash_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }

    /// Font metrics in font units.
    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    fn metrics_from_swash(font: &FontRef<'_>) -> FontMetrics {
        // Use default (no variation) coordinates.
        let Metrics {
            units_per_em,
            has_vertical_metrics,
            ascent,
            descent,
            leading,
            vertical_ascent,
            vertical_descent,
            ..
        } = font.metrics(&[]);

        // Without vhea/vmtx, center columns on the em box.
        let (vertical_ascent, vertical_descent) = if has_vertical_metrics {
            (vertical_ascent, vertical_descent)
        } else {
            let half_em = units_per_em as f32 / 2.0;
            (half_em, half_em)
        };

        FontMetrics {
            ascent,
            descent,
            line_gap: leading,
            vertical_ascent,
            vertical_descent,
            units_per_em,
        }
    }

    pub(crate) fn track_registration(&self, registry: Weak<RegistryShared>, name: &str) {
        let mut registrations = self.registrations.lock();
        let already = registrations
            .iter()
            .any(|r| r.name == name && Weak::ptr_eq(&r.registry, &registry));
        if !already {
            registrations.push(Registration {
                registry,
                name: name.to_owned(),
            });
        }
    }
}

impl Drop for FontSource {
    fn drop(&mut self) {
        for registration in self.registrations.get_mut().drain(..) {
            if let Some(registry) = registration.registry.upgrade() {
                debug!(name = %registration.name, "font source dropped, evicting registry entry");
                registry.evict_dead(&registration.name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_font_bytes() {
        let err = FontSource::from_vec(b"definitely not a font".to_vec(), 0).unwrap_err();
        assert!(matches!(err, FontError::InvalidFont));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FontSource::from_path("/nonexistent/font.ttf", 0).unwrap_err();
        assert!(matches!(err, FontError::Io(_)));
    }
}
