//! Cascading administrative-region selection
//!
//! The resolver owns the selected id and the option set of each level. A new
//! selection at one level always clears every level below it, both ids and
//! option sets, before the next level is loaded. Clearing does not depend on
//! the load succeeding, so a stale option set is never shown.

pub mod memory;

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::Result;
use crate::models::{Location, RegionLevel, RegionNode, RegionOption};

/// Region lookup service
///
/// Each call returns the ordered option set of one level, keyed by the id
/// selected one level up.
pub trait RegionSource: Send + Sync {
    /// List all provinces
    fn provinces(&self) -> BoxFuture<'_, Result<Vec<RegionOption>>>;

    /// List the regencies of a province
    fn regencies<'a>(&'a self, province_id: &'a str) -> BoxFuture<'a, Result<Vec<RegionOption>>>;

    /// List the districts of a regency
    fn districts<'a>(&'a self, regency_id: &'a str) -> BoxFuture<'a, Result<Vec<RegionOption>>>;

    /// List the villages of a district
    fn villages<'a>(&'a self, district_id: &'a str) -> BoxFuture<'a, Result<Vec<RegionOption>>>;

    /// Dispatch to the lookup for `level`
    ///
    /// `parent_id` is ignored for provinces.
    fn options_for<'a>(
        &'a self,
        level: RegionLevel,
        parent_id: &'a str,
    ) -> BoxFuture<'a, Result<Vec<RegionOption>>> {
        match level {
            RegionLevel::Province => self.provinces(),
            RegionLevel::Regency => self.regencies(parent_id),
            RegionLevel::District => self.districts(parent_id),
            RegionLevel::Village => self.villages(parent_id),
        }
    }
}

impl<S: RegionSource + ?Sized> RegionSource for Arc<S> {
    fn provinces(&self) -> BoxFuture<'_, Result<Vec<RegionOption>>> {
        (**self).provinces()
    }

    fn regencies<'a>(&'a self, province_id: &'a str) -> BoxFuture<'a, Result<Vec<RegionOption>>> {
        (**self).regencies(province_id)
    }

    fn districts<'a>(&'a self, regency_id: &'a str) -> BoxFuture<'a, Result<Vec<RegionOption>>> {
        (**self).districts(regency_id)
    }

    fn villages<'a>(&'a self, district_id: &'a str) -> BoxFuture<'a, Result<Vec<RegionOption>>> {
        (**self).villages(district_id)
    }
}

/// An option-set load requested by a fresh selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    /// Level whose option set will be filled
    pub level: RegionLevel,
    /// Id selected one level up when the load was requested
    pub parent_id: String,
}

#[derive(Debug, Clone, Default)]
struct LevelState {
    selected_id: String,
    options: Vec<RegionNode>,
}

impl LevelState {
    fn clear(&mut self) {
        self.selected_id.clear();
        self.options.clear();
    }
}

/// Selection state of the province → regency → district → village cascade
#[derive(Debug)]
pub struct RegionCascadeResolver<S> {
    source: S,
    levels: [LevelState; 4],
}

impl<S: RegionSource> RegionCascadeResolver<S> {
    /// Create a resolver with nothing selected and no options loaded
    pub fn new(source: S) -> Self {
        Self {
            source,
            levels: Default::default(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Currently selected id at a level, empty if none
    #[must_use]
    pub fn selected_id(&self, level: RegionLevel) -> &str {
        &self.levels[level.index()].selected_id
    }

    /// Currently loaded option set of a level
    #[must_use]
    pub fn options(&self, level: RegionLevel) -> &[RegionNode] {
        &self.levels[level.index()].options
    }

    /// Resolve an id to its display name from the loaded option set
    ///
    /// Returns an empty string when the id is not among the options.
    #[must_use]
    pub fn resolve_name(&self, level: RegionLevel, id: &str) -> String {
        self.options(level)
            .iter()
            .find(|node| node.id == id)
            .map(|node| node.name.clone())
            .unwrap_or_default()
    }

    /// Load the province option set
    ///
    /// Returns the number of provinces loaded; a failed load leaves the set
    /// empty.
    pub async fn load_provinces(&mut self) -> usize {
        let pending = PendingLoad {
            level: RegionLevel::Province,
            parent_id: String::new(),
        };
        let options = self.fetch(&pending).await;
        let count = options.len();
        self.apply_options(RegionLevel::Province, "", options);
        count
    }

    /// Record a selection without touching the network
    ///
    /// Stores `id` at `level`, clears every level below it, writes the resolved
    /// name into `location` (clearing names below it) and returns the load
    /// needed for the next level, if any.
    pub fn select(
        &mut self,
        level: RegionLevel,
        id: &str,
        location: &mut Location,
    ) -> Option<PendingLoad> {
        self.levels[level.index()].selected_id = id.to_string();
        for below in level.descendants() {
            self.levels[below.index()].clear();
        }

        let name = self.resolve_name(level, id);
        if name.is_empty() && !id.is_empty() {
            log::debug!("{level} id '{id}' is not in the loaded option set");
        }
        location.set_name(level, name);

        if id.is_empty() {
            return None;
        }
        level.child().map(|child| PendingLoad {
            level: child,
            parent_id: id.to_string(),
        })
    }

    /// Run a pending load against the source
    ///
    /// Failures are logged and yield an empty option set.
    pub async fn fetch(&self, pending: &PendingLoad) -> Vec<RegionNode> {
        match self
            .source
            .options_for(pending.level, &pending.parent_id)
            .await
        {
            Ok(options) => options
                .into_iter()
                .map(|option| RegionNode::from_option(option, pending.level))
                .collect(),
            Err(e) => {
                log::error!(
                    "Failed to load {} options for '{}': {e}",
                    pending.level,
                    pending.parent_id
                );
                Vec::new()
            }
        }
    }

    /// Install a loaded option set
    ///
    /// Results for a parent that is no longer selected are dropped and `false`
    /// is returned.
    pub fn apply_options(
        &mut self,
        level: RegionLevel,
        parent_id: &str,
        options: Vec<RegionNode>,
    ) -> bool {
        if let Some(parent) = level.parent() {
            if self.selected_id(parent) != parent_id {
                log::debug!(
                    "Dropping stale {level} options for '{parent_id}', {parent} is now '{}'",
                    self.selected_id(parent)
                );
                return false;
            }
        }
        self.levels[level.index()].options = options;
        true
    }

    /// Select a level and load the level below it
    pub async fn select_level(&mut self, level: RegionLevel, id: &str, location: &mut Location) {
        if let Some(pending) = self.select(level, id, location) {
            let options = self.fetch(&pending).await;
            self.apply_options(pending.level, &pending.parent_id, options);
        }
    }

    pub async fn select_province(&mut self, id: &str, location: &mut Location) {
        self.select_level(RegionLevel::Province, id, location).await;
    }

    pub async fn select_regency(&mut self, id: &str, location: &mut Location) {
        self.select_level(RegionLevel::Regency, id, location).await;
    }

    pub async fn select_district(&mut self, id: &str, location: &mut Location) {
        self.select_level(RegionLevel::District, id, location).await;
    }

    pub async fn select_village(&mut self, id: &str, location: &mut Location) {
        self.select_level(RegionLevel::Village, id, location).await;
    }

    /// Clear every selection and every option set below the provinces
    pub fn reset(&mut self) {
        self.levels[RegionLevel::Province.index()].selected_id.clear();
        for below in RegionLevel::Province.descendants() {
            self.levels[below.index()].clear();
        }
    }
}
