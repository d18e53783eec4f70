//! Administrative region hierarchy
//!
//! Province, regency (kabupaten), district (kecamatan) and village (desa). A
//! node is only meaningful under its selected ancestor one level up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Level in the administrative hierarchy, ordered from the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionLevel {
    Province,
    Regency,
    District,
    Village,
}

impl RegionLevel {
    /// All levels, top first
    pub const ALL: [Self; 4] = [Self::Province, Self::Regency, Self::District, Self::Village];

    /// The level directly below this one
    #[must_use]
    pub const fn child(self) -> Option<Self> {
        match self {
            Self::Province => Some(Self::Regency),
            Self::Regency => Some(Self::District),
            Self::District => Some(Self::Village),
            Self::Village => None,
        }
    }

    /// The level directly above this one
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Province => None,
            Self::Regency => Some(Self::Province),
            Self::District => Some(Self::Regency),
            Self::Village => Some(Self::District),
        }
    }

    /// Every level strictly below this one, top first
    pub fn descendants(self) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |level| *level > self)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Province => "Province",
            Self::Regency => "Regency",
            Self::District => "District",
            Self::Village => "Village",
        };
        f.write_str(name)
    }
}

/// An `{id, name}` pair as returned by the region lookup service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionOption {
    pub id: String,
    pub name: String,
}

impl RegionOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A region option placed at its level in the hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionNode {
    pub id: String,
    pub name: String,
    pub level: RegionLevel,
}

impl RegionNode {
    #[must_use]
    pub fn from_option(option: RegionOption, level: RegionLevel) -> Self {
        Self {
            id: option.id,
            name: option.name,
            level,
        }
    }
}

/// Resolved region names of a household
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub province: String,
    pub regency: String,
    pub district: String,
    pub village: String,
}

impl Location {
    pub fn new(
        province: impl Into<String>,
        regency: impl Into<String>,
        district: impl Into<String>,
        village: impl Into<String>,
    ) -> Self {
        Self {
            province: province.into(),
            regency: regency.into(),
            district: district.into(),
            village: village.into(),
        }
    }

    /// Name stored at the given level
    #[must_use]
    pub fn name(&self, level: RegionLevel) -> &str {
        match level {
            RegionLevel::Province => &self.province,
            RegionLevel::Regency => &self.regency,
            RegionLevel::District => &self.district,
            RegionLevel::Village => &self.village,
        }
    }

    /// Write a name at one level and clear every level below it
    pub fn set_name(&mut self, level: RegionLevel, name: impl Into<String>) {
        *self.name_mut(level) = name.into();
        for below in level.descendants() {
            self.name_mut(below).clear();
        }
    }

    /// First level whose name is blank, if any
    #[must_use]
    pub fn first_missing(&self) -> Option<RegionLevel> {
        RegionLevel::ALL
            .into_iter()
            .find(|level| self.name(*level).trim().is_empty())
    }

    fn name_mut(&mut self, level: RegionLevel) -> &mut String {
        match level {
            RegionLevel::Province => &mut self.province,
            RegionLevel::Regency => &mut self.regency,
            RegionLevel::District => &mut self.district,
            RegionLevel::Village => &mut self.village,
        }
    }
}
