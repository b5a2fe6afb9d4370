//! theme registry stuff
use {
    crate::{
        error::{Result, ThemeError},
        theme::{Theme, ThemeKey, metadata::ThemeEntry, presets::*},
    },
    hashbrown::HashMap,
    std::sync::{Arc, LazyLock},
    tracing::warn,
};

/// the process wide built-in registry
static BUILTIN: LazyLock<Arc<ThemeRegistry>> = LazyLock::new(|| Arc::new(ThemeRegistry::new()));

/// the theme registry
///
/// insertion order is cycle order. nothing is added after construction.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    /// the installed themes, in cycle order
    entries: Vec<ThemeEntry>,
    /// the keys of `entries`, same order
    keys: Vec<ThemeKey>,
    /// key to index into `entries`
    index: HashMap<ThemeKey, usize>,
}

impl ThemeRegistry {
    /// make a new registry with every built-in theme
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register::<BlueSerenity>();
        registry.register::<SummerSunset>();
        registry.register::<BrightGreen>();
        registry.register::<MutedEarthy>();
        registry.register::<RedSunburst>();
        registry.register::<PastelDream>();
        registry.register::<RusticCharm>();
        registry.register::<SummerMelody>();
        registry.register::<Nightfall>();
        registry.register::<Pastel>();
        registry.register::<AutumnHarvest>();
        registry.register::<CrimsonHues>();
        registry.register::<October>();

        registry
    }

    /// make a registry holding a subset of the built-in themes, in the given order
    ///
    /// # Errors
    ///
    /// returns an error if `keys` is empty or repeats a key
    pub fn with_keys(keys: &[ThemeKey]) -> Result<Self> {
        if keys.is_empty() {
            crate::bail!("a theme registry needs at least one theme");
        }

        let mut registry = Self::empty();
        for &key in keys {
            if registry.contains(key) {
                crate::bail!("theme {} registered twice", key);
            }
            registry.insert(ThemeEntry::builtin(key));
        }

        Ok(registry)
    }

    /// the shared built-in registry
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// a registry with nothing in it
    fn empty() -> Self {
        Self {
            entries: Vec::new(),
            keys: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// register a theme
    fn register<T: Theme>(&mut self) {
        let entry = ThemeEntry::new::<T>();

        if self.contains(entry.key) {
            warn!(theme = %entry.key, "ignoring duplicate theme registration");
            return;
        }

        self.insert(entry);
    }

    /// append an entry
    fn insert(&mut self, entry: ThemeEntry) {
        self.index.insert(entry.key, self.entries.len());
        self.keys.push(entry.key);
        self.entries.push(entry);
    }

    /// get a theme by its key
    ///
    /// # Errors
    ///
    /// returns [`ThemeError::NotFound`] if the key isn't registered
    pub fn get(&self, key: ThemeKey) -> Result<&ThemeEntry> {
        self.index
            .get(&key)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| ThemeError::NotFound(key.id().to_string()))
    }

    /// get a theme by its string id
    ///
    /// # Errors
    ///
    /// returns [`ThemeError::NotFound`] if no registered theme has that id
    pub fn lookup(&self, id: &str) -> Result<&ThemeEntry> {
        ThemeKey::from_id(id)
            .and_then(|key| self.get(key).ok())
            .ok_or_else(|| ThemeError::NotFound(id.to_string()))
    }

    /// whether a key is registered
    pub fn contains(&self, key: ThemeKey) -> bool {
        self.index.contains_key(&key)
    }

    /// the registered keys, in cycle order
    pub fn keys(&self) -> &[ThemeKey] {
        &self.keys
    }

    /// the first registered key
    pub fn first(&self) -> ThemeKey {
        self.keys.first().copied().unwrap_or(ThemeKey::DEFAULT)
    }

    /// the position of a key in cycle order
    pub fn position(&self, key: ThemeKey) -> Option<usize> {
        self.index.get(&key).copied()
    }

    /// the amount of registered themes
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// iterate the entries in cycle order
    pub fn entries(&self) -> impl Iterator<Item = &ThemeEntry> {
        self.entries.iter()
    }

    /// the display names, in cycle order
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.name).collect()
    }

    /// list themes that define deep tones
    pub fn list_with_deep(&self) -> Vec<ThemeKey> {
        self.entries
            .iter()
            .filter(|entry| entry.palette.has_deep())
            .map(|entry| entry.key)
            .collect()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registers_everything_in_order() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.count(), 13);
        assert_eq!(registry.keys(), &ThemeKey::ALL[..]);
        assert_eq!(registry.first(), ThemeKey::BlueSerenity);

        for (i, key) in ThemeKey::ALL.into_iter().enumerate() {
            assert_eq!(registry.position(key), Some(i));
            assert_eq!(registry.get(key).unwrap().key, key);
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let registry = ThemeRegistry::builtin();
        let entry = registry.lookup("nightfall").unwrap();
        assert_eq!(entry.name, "Nightfall");
        assert_eq!(entry.css_prefix, "nightfall");

        match registry.lookup("forest-green") {
            Err(ThemeError::NotFound(id)) => assert_eq!(id, "forest-green"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_subset_registry() {
        let registry =
            ThemeRegistry::with_keys(&[ThemeKey::October, ThemeKey::Nightfall]).unwrap();
        assert_eq!(registry.keys(), &[ThemeKey::October, ThemeKey::Nightfall]);
        assert_eq!(registry.first(), ThemeKey::October);
        assert!(matches!(
            registry.get(ThemeKey::BlueSerenity),
            Err(ThemeError::NotFound(_))
        ));
        assert!(registry.lookup("blue-serenity").is_err());
    }

    #[test]
    fn test_subset_registry_rejects_bad_input() {
        assert!(ThemeRegistry::with_keys(&[]).is_err());
        assert!(ThemeRegistry::with_keys(&[ThemeKey::Pastel, ThemeKey::Pastel]).is_err());
    }

    #[test]
    fn test_names_and_deep_filter() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.names()[0], "Blue Serenity");
        assert_eq!(registry.names()[12], "October");

        let deep = registry.list_with_deep();
        assert_eq!(deep.len(), 11);
        assert!(!deep.contains(&ThemeKey::BlueSerenity));
        assert!(!deep.contains(&ThemeKey::PastelDream));
    }
}
