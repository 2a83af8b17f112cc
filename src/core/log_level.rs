//! Log levels and the per-logger level registry

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Numeric handle for a registered severity level.
///
/// The built-in levels are always present. Custom levels are obtained from
/// [`LevelRegistry::add`] (or [`Logger::add_level`](crate::Logger::add_level)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(usize);

impl Level {
    pub const INFO: Level = Level(0);
    pub const WARN: Level = Level(1);
    pub const ERROR: Level = Level(2);

    /// Wrap a raw index. The index is only checked when the level is used.
    pub const fn from_index(index: usize) -> Self {
        Level(index)
    }

    pub const fn index(&self) -> usize {
        self.0
    }
}

impl From<Level> for usize {
    fn from(level: Level) -> usize {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const BUILTIN: [&str; 3] = ["INFO", "WARN", "ERROR"];

/// Index → name and name → index mappings for severity levels.
///
/// Indices are contiguous from zero, so the next level added always receives
/// `len()` as its index. Serialized as the list of names in index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct LevelRegistry {
    names: Vec<String>,
    indices: HashMap<String, Level>,
}

impl LevelRegistry {
    /// Registry seeded with `INFO`, `WARN` and `ERROR`
    pub fn new() -> Self {
        let mut registry = Self {
            names: Vec::with_capacity(BUILTIN.len()),
            indices: HashMap::with_capacity(BUILTIN.len()),
        };
        for name in BUILTIN {
            registry.push(name.to_string());
        }
        registry
    }

    fn push(&mut self, name: String) -> Level {
        let level = Level(self.names.len());
        self.indices.insert(name.clone(), level);
        self.names.push(name);
        level
    }

    /// Register a level name, returning its index.
    ///
    /// Names are stored upper-cased. Registering a name that already exists
    /// returns the existing level and changes nothing.
    pub fn add(&mut self, name: &str) -> Result<Level> {
        let name = name.trim();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(LoggerError::InvalidLevelName(name.to_string()));
        }

        let upper = name.to_uppercase();
        if let Some(existing) = self.indices.get(&upper) {
            return Ok(*existing);
        }
        Ok(self.push(upper))
    }

    /// Case-insensitive lookup by name
    pub fn get(&self, name: &str) -> Option<Level> {
        self.indices.get(&name.trim().to_uppercase()).copied()
    }

    pub fn name(&self, level: Level) -> Result<&str> {
        self.names
            .get(level.0)
            .map(String::as_str)
            .ok_or(LoggerError::UnknownLevel(level.0))
    }

    pub fn contains(&self, level: Level) -> bool {
        level.0 < self.names.len()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Levels in index order
    pub fn iter(&self) -> impl Iterator<Item = (Level, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(idx, name)| (Level(idx), name.as_str()))
    }
}

impl TryFrom<Vec<String>> for LevelRegistry {
    type Error = LoggerError;

    /// Rebuild a registry from names in index order. The built-in levels must
    /// come first and every name must be unique.
    fn try_from(names: Vec<String>) -> Result<Self> {
        let mut registry = LevelRegistry::new();
        if names.len() < BUILTIN.len() {
            return Err(LoggerError::InvalidLevelName(names.join(",")));
        }

        // Each name must land exactly at its position in the list
        for (idx, name) in names.iter().enumerate() {
            if registry.add(name)?.index() != idx {
                return Err(LoggerError::InvalidLevelName(name.clone()));
            }
        }
        Ok(registry)
    }
}

impl From<LevelRegistry> for Vec<String> {
    fn from(registry: LevelRegistry) -> Vec<String> {
        registry.names
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
