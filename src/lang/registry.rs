//! Language profile registry.
//!
//! A registry maps language names to profile definitions and memoizes the
//! profiles built from them. Construction is construct-or-fetch: the first
//! caller for a name builds the profile, every later caller (on any thread)
//! receives the same `Arc`. Two threads racing on first use may both build a
//! profile, but only the first one inserted is ever handed out.

use crate::error::EngineError;
use crate::lang::builtin;
use crate::lang::profile::{LanguageProfile, ProfileDefinition};
use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Minimum Jaro-Winkler similarity for an "unsupported language" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

pub struct ProfileRegistry {
    definitions: BTreeMap<String, ProfileDefinition>,
    profiles: RwLock<HashMap<String, Arc<LanguageProfile>>>,
}

impl ProfileRegistry {
    /// A registry holding the builtin languages.
    pub fn builtin() -> Self {
        Self::with_definitions(builtin::definitions())
    }

    /// A registry over `definitions`; later definitions replace earlier ones
    /// with the same name.
    pub fn with_definitions(definitions: impl IntoIterator<Item = ProfileDefinition>) -> Self {
        Self {
            definitions: definitions
                .into_iter()
                .map(|def| (def.name.clone(), def))
                .collect(),
            profiles: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch the profile for `language`, building and caching it on first use.
    ///
    /// Names are matched case-insensitively.
    pub fn get(&self, language: &str) -> Result<Arc<LanguageProfile>, EngineError> {
        let key = language.trim().to_ascii_lowercase();

        if let Some(profile) = self.read_profiles().get(&key) {
            return Ok(Arc::clone(profile));
        }

        let definition =
            self.definitions
                .get(&key)
                .ok_or_else(|| EngineError::UnsupportedLanguage {
                    name: language.to_string(),
                    suggestion: self.suggest(&key),
                })?;
        let built = Arc::new(LanguageProfile::new(definition.clone())?);

        let mut profiles = self.write_profiles();
        let profile = profiles.entry(key).or_insert_with(|| {
            debug!(
                "constructed {} profile ({:?} grammar)",
                built.display_name(),
                built.grammar()
            );
            built
        });
        Ok(Arc::clone(profile))
    }

    /// Registered language names, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &ProfileDefinition> {
        self.definitions.values()
    }

    pub fn is_registered(&self, language: &str) -> bool {
        self.definitions
            .contains_key(&language.trim().to_ascii_lowercase())
    }

    /// Number of profiles constructed so far.
    pub fn cached(&self) -> usize {
        self.read_profiles().len()
    }

    fn suggest(&self, key: &str) -> Option<String> {
        self.definitions
            .keys()
            .map(|name| (name, strsim::jaro_winkler(key, name)))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| name.clone())
    }

    fn read_profiles(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<LanguageProfile>>> {
        // Profiles are inserted whole, so a poisoned map is still consistent.
        self.profiles.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_profiles(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<LanguageProfile>>> {
        self.profiles.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

static REGISTRY: OnceLock<ProfileRegistry> = OnceLock::new();

/// The process-wide registry of builtin languages.
pub fn registry() -> &'static ProfileRegistry {
    REGISTRY.get_or_init(ProfileRegistry::builtin)
}
