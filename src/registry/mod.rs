mod cache;

use std::sync::OnceLock;

use lazy_static::lazy_static;

use crate::strategy::{ActiveStrategy, NamingStrategy, Property};
use cache::NameCache;

lazy_static! {
    static ref GLOBAL: NamingContext = NamingContext::new();
}

/// Owns one naming-strategy slot and one memoizing name cache.
///
/// Construct one per persistence-layer instance (or per test) instead of
/// relying on process-wide state; the free functions in this module wrap a
/// single global context for callers that want the ambient surface.
pub struct NamingContext {
    strategy: OnceLock<ActiveStrategy>,
    fallback: ActiveStrategy,
    cache: NameCache,
}

impl NamingContext {
    pub fn new() -> Self {
        Self {
            strategy: OnceLock::new(),
            fallback: NamingStrategy::new().into(),
            cache: NameCache::new(),
        }
    }

    /// Install `strategy` as this context's configuration, filling a missing
    /// default slot with the built-in snake_case transform.
    ///
    /// Only the first call has any effect; every later call is a silent
    /// no-op. Under concurrent first-time calls exactly one registration
    /// wins, and the losers return only after the winner's strategy is
    /// visible.
    pub fn register(&self, strategy: NamingStrategy) {
        let _ = self.strategy.set(strategy.into());
    }

    /// Rename with this context's database namer.
    pub fn to_database_name(&self, name: &str) -> String {
        self.rename(name, Property::Database)
    }

    /// Rename with this context's table namer.
    pub fn to_table_name(&self, name: &str) -> String {
        self.rename(name, Property::Table)
    }

    /// Rename with this context's column namer.
    pub fn to_column_name(&self, name: &str) -> String {
        self.rename(name, Property::Column)
    }

    /// Cache-first rename: a hit returns without re-invoking any namer.
    fn rename(&self, name: &str, property: Property) -> String {
        if let Some(renamed) = self.cache.get(name) {
            return renamed;
        }

        let renamed = self.active().namer(property)(name);
        self.cache.set(name, &renamed);
        renamed
    }

    fn active(&self) -> &ActiveStrategy {
        self.strategy.get().unwrap_or(&self.fallback)
    }
}

impl Default for NamingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Set the process-wide naming strategy. One-shot: calls after the first
/// are silently ignored.
pub fn register_naming_strategy(strategy: NamingStrategy) {
    GLOBAL.register(strategy);
}

/// Rename with the process-wide database namer.
pub fn to_database_name(name: &str) -> String {
    GLOBAL.to_database_name(name)
}

/// Rename with the process-wide table namer.
pub fn to_table_name(name: &str) -> String {
    GLOBAL.to_table_name(name)
}

/// Rename with the process-wide column namer.
pub fn to_column_name(name: &str) -> String {
    GLOBAL.to_column_name(name)
}
