//! Fighter move-data catalog.
//!
//! The catalog is a fixed table of movesets keyed by lowercase-hyphenated
//! character ids (`"mario"`, `"scratch-cat"`). It only covers part of the
//! in-game roster, so a lookup miss is ordinary input rather than an error.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::SiteError;

mod fighters;

pub use fighters::FIGHTERS;

/// One special move as shown in a move list, e.g. `💨 Sonic Boom - Speed dash attack`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MoveEntry {
    pub icon: &'static str,
    pub name: &'static str,
    pub effect: &'static str,
}

impl MoveEntry {
    pub const fn new(icon: &'static str, name: &'static str, effect: &'static str) -> Self {
        Self { icon, name, effect }
    }
}

impl fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.icon, self.name, self.effect)
    }
}

/// Immutable display data for one fighter. The id lives in the catalog key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharacterMoveset {
    pub display_name: &'static str,
    pub description: &'static str,
    pub special_moves: &'static [MoveEntry],
    pub combo_suggestions: &'static [&'static str],
}

/// Read-only `id -> moveset` index. No insertion or removal after construction.
#[derive(Debug)]
pub struct Catalog {
    by_id: HashMap<&'static str, &'static CharacterMoveset>,
}

impl Catalog {
    /// Shared catalog built from [`FIGHTERS`] on first use.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| Catalog {
            by_id: FIGHTERS.iter().map(|(id, set)| (*id, set)).collect(),
        })
    }

    /// Build a catalog from an explicit table. Keys must be unique.
    pub fn from_entries(
        entries: &'static [(&'static str, CharacterMoveset)],
    ) -> Result<Catalog, SiteError> {
        let mut by_id = HashMap::with_capacity(entries.len());
        for (id, set) in entries {
            if by_id.insert(*id, set).is_some() {
                return Err(SiteError::DuplicateCharacter { id: *id });
            }
        }
        Ok(Catalog { by_id })
    }

    pub fn get(&self, id: &str) -> Option<&'static CharacterMoveset> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Ids in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_id.keys().copied()
    }
}
