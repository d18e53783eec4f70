//! In-memory region source
//!
//! Serves a fixed hierarchy. Used by the demo binary and by tests, which can
//! also make individual levels fail.

use std::sync::atomic::{AtomicUsize, Ordering};

use futures::FutureExt;
use futures::future::BoxFuture;
use rustc_hash::{FxHashMap, FxHashSet};

use super::RegionSource;
use crate::error::{RegistryError, Result};
use crate::models::{RegionLevel, RegionOption};

/// A region hierarchy held in memory
#[derive(Debug, Default)]
pub struct InMemoryRegionSource {
    provinces: Vec<RegionOption>,
    children: FxHashMap<(RegionLevel, String), Vec<RegionOption>>,
    failing: FxHashSet<RegionLevel>,
    calls: AtomicUsize,
}

impl InMemoryRegionSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a province
    #[must_use]
    pub fn with_province(mut self, id: &str, name: &str) -> Self {
        self.provinces.push(RegionOption::new(id, name));
        self
    }

    /// Add a child option at `level` under `parent_id`
    #[must_use]
    pub fn with_child(mut self, level: RegionLevel, parent_id: &str, id: &str, name: &str) -> Self {
        self.children
            .entry((level, parent_id.to_string()))
            .or_default()
            .push(RegionOption::new(id, name));
        self
    }

    /// Make every lookup at `level` fail
    #[must_use]
    pub fn with_failure(mut self, level: RegionLevel) -> Self {
        self.failing.insert(level);
        self
    }

    /// Number of lookups served so far
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn lookup(&self, level: RegionLevel, parent_id: &str) -> Result<Vec<RegionOption>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&level) {
            return Err(RegistryError::backend(format!(
                "{level} lookup unavailable"
            )));
        }
        if level == RegionLevel::Province {
            return Ok(self.provinces.clone());
        }
        Ok(self
            .children
            .get(&(level, parent_id.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}

impl RegionSource for InMemoryRegionSource {
    fn provinces(&self) -> BoxFuture<'_, Result<Vec<RegionOption>>> {
        let result = self.lookup(RegionLevel::Province, "");
        async move { result }.boxed()
    }

    fn regencies<'a>(&'a self, province_id: &'a str) -> BoxFuture<'a, Result<Vec<RegionOption>>> {
        let result = self.lookup(RegionLevel::Regency, province_id);
        async move { result }.boxed()
    }

    fn districts<'a>(&'a self, regency_id: &'a str) -> BoxFuture<'a, Result<Vec<RegionOption>>> {
        let result = self.lookup(RegionLevel::District, regency_id);
        async move { result }.boxed()
    }

    fn villages<'a>(&'a self, district_id: &'a str) -> BoxFuture<'a, Result<Vec<RegionOption>>> {
        let result = self.lookup(RegionLevel::Village, district_id);
        async move { result }.boxed()
    }
}
