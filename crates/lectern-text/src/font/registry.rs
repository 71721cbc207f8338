use std::sync::{Arc, Weak};

use fontdb::{Database, Family, Query};
use hashbrown::HashMap;
use lectern_config::TextConfig;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, warn};

use crate::color::Color;
use crate::font::{Face, FontError, FontSource, Result};
use crate::styled::Style;

/// Families tried, in order, when no explicit font is requested.
pub const DEFAULT_FAMILIES: &[&str] = &[
    "Arial",
    "Helvetica",
    "Times New Roman",
    "Times",
    "Courier New",
    "Courier",
    "DejaVu Sans",
];

/// Name → font source mapping shared by every clone of a registry.
#[derive(Debug, Default)]
pub(crate) struct RegistryShared {
    sources: RwLock<HashMap<String, Weak<FontSource>>>,
    /// Lazily populated system font database.
    system: Mutex<Option<Database>>,
    /// Default source, pinned for the registry's lifetime once resolved.
    default: Mutex<Option<Arc<FontSource>>>,
}

impl RegistryShared {
    /// Remove `name` only if its entry no longer points at a live source,
    /// so a stale eviction never removes a newer registration.
    pub(crate) fn evict_dead(&self, name: &str) {
        let mut sources = self.sources.write();
        if sources.get(name).is_some_and(|weak| weak.strong_count() == 0) {
            sources.remove(name);
        }
    }
}

/// Concurrent registry of named font sources.
///
/// Entries hold their sources weakly: a source stays registered only as
/// long as some [`Face`] or caller keeps an `Arc<FontSource>` alive, and
/// is evicted automatically when the last handle is dropped. Cloning the
/// registry yields another handle to the same mapping.
#[derive(Debug, Clone, Default)]
pub struct FontRegistry {
    shared: Arc<RegistryShared>,
}

impl FontRegistry {
    /// Registry that discovers system fonts on the first lookup miss.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry backed by an explicit font database instead of the
    /// system's. An empty database disables system discovery.
    pub fn with_database(database: Database) -> Self {
        let shared = RegistryShared {
            system: Mutex::new(Some(database)),
            ..RegistryShared::default()
        };
        Self {
            shared: Arc::new(shared),
        }
    }

    /// Register `source` under `name`, replacing any previous entry.
    ///
    /// Registered names take precedence over system fonts.
    pub fn register(&self, name: impl Into<String>, source: &Arc<FontSource>) {
        let name = name.into();
        source.track_registration(Arc::downgrade(&self.shared), &name);
        debug!(%name, "registering font source");
        self.shared
            .sources
            .write()
            .insert(name, Arc::downgrade(source));
    }

    /// Look up a previously registered, still-live source.
    pub fn lookup(&self, name: &str) -> Option<Arc<FontSource>> {
        // Upgrade outside the lock: dropping a source re-enters the registry.
        let weak = self.shared.sources.read().get(name).cloned()?;
        weak.upgrade()
    }

    /// Find a source by name: registered sources first, then a fuzzy match
    /// against the system font database. System matches are loaded and
    /// registered under both the requested and the matched family name.
    pub fn find(&self, name: &str) -> Option<Arc<FontSource>> {
        if let Some(source) = self.lookup(name) {
            return Some(source);
        }

        let (family, loaded) = {
            let mut system = self.shared.system.lock();
            let database = system.get_or_insert_with(|| {
                let mut database = Database::new();
                database.load_system_fonts();
                debug!(faces = database.len(), "loaded system font database");
                database
            });
            let (id, family) = match_system_font(database, name)?;
            let loaded = match self.lookup(&family) {
                Some(source) => Ok(source),
                None => database
                    .with_face_data(id, |data, index| {
                        FontSource::from_vec(data.to_vec(), index as usize)
                    })?
                    .map(Arc::new),
            };
            (family, loaded)
        };

        match loaded {
            Ok(source) => {
                self.register(family, &source);
                self.register(name, &source);
                Some(source)
            }
            Err(error) => {
                warn!(?error, %name, %family, "failed to load system font");
                None
            }
        }
    }

    /// Source guaranteed to exist for fallback, resolved from
    /// [`DEFAULT_FAMILIES`] on first use and kept alive afterwards.
    pub fn default_source(&self) -> Result<Arc<FontSource>> {
        let mut default = self.shared.default.lock();
        if let Some(source) = default.as_ref() {
            return Ok(source.clone());
        }
        let source = DEFAULT_FAMILIES
            .iter()
            .find_map(|family| self.find(family))
            .ok_or_else(|| {
                warn!("failed to set a default font");
                FontError::NoDefaultFont
            })?;
        *default = Some(source.clone());
        Ok(source)
    }

    /// Number of registered names, including entries whose source is
    /// being dropped concurrently.
    pub fn len(&self) -> usize {
        self.shared.sources.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build the default style described by a [`TextConfig`]: an explicit
    /// `font_path` wins, then the `font` family name, then the default
    /// source.
    pub fn style_from_config(&self, config: &TextConfig, color: Color) -> Result<Style> {
        let source = if let Some(path) = &config.font_path {
            let source = Arc::new(FontSource::from_path(path, 0)?);
            self.register(path.display().to_string(), &source);
            source
        } else if let Some(name) = &config.font {
            match self.find(name) {
                Some(source) => source,
                None => {
                    warn!(%name, "configured font not found, using default");
                    self.default_source()?
                }
            }
        } else {
            self.default_source()?
        };

        let face = Face::new(source, config.size).with_direction(config.direction.into());
        Ok(Style::new(Arc::new(face), color))
    }
}

/// Match `name` against the database: exact family query first, then a
/// case-insensitive substring match on family and PostScript names.
fn match_system_font(database: &Database, name: &str) -> Option<(fontdb::ID, String)> {
    let query = Query {
        families: &[Family::Name(name)],
        ..Query::default()
    };
    let id = database.query(&query).or_else(|| {
        let needle = name.to_lowercase();
        database
            .faces()
            .find(|face| {
                face.families
                    .iter()
                    .any(|(family, _)| family.to_lowercase().contains(&needle))
                    || face.post_script_name.to_lowercase().contains(&needle)
            })
            .map(|face| face.id)
    })?;

    let face = database.face(id)?;
    let family = face
        .families
        .first()
        .map(|(family, _)| family.clone())
        .unwrap_or_else(|| face.post_script_name.clone());
    Some((id, family))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_registry() -> FontRegistry {
        FontRegistry::with_database(Database::new())
    }

    #[test]
    fn dead_entries_are_invisible_and_evictable() {
        let registry = empty_registry();
        registry
            .shared
            .sources
            .write()
            .insert("ghost".to_string(), Weak::new());

        assert_eq!(registry.len(), 1);
        assert!(registry.lookup("ghost").is_none());

        registry.shared.evict_dead("ghost");
        assert!(registry.is_empty());
    }

    #[test]
    fn evicting_unknown_name_is_noop() {
        let registry = empty_registry();
        registry.shared.evict_dead("missing");
        assert!(registry.is_empty());
    }

    #[test]
    fn empty_database_finds_nothing() {
        let registry = empty_registry();
        assert!(registry.find("Arial").is_none());
        assert!(matches!(
            registry.default_source(),
            Err(FontError::NoDefaultFont)
        ));
    }

    #[test]
    fn clones_share_the_mapping() {
        let registry = empty_registry();
        let clone = registry.clone();
        clone
            .shared
            .sources
            .write()
            .insert("ghost".to_string(), Weak::new());
        assert_eq!(registry.len(), 1);
    }
}
