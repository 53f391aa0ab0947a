//! Style registry for deduplication
//!
//! Spreadsheets typically have many cells sharing a handful of styles. The
//! registry hands out one shared, immutable [`StyleHandle`] per distinct
//! [`Style`], so equal descriptors always resolve to the same handle and, in
//! turn, to the same engine style id.

use super::{ContentHasher, Style, StyleHash};
use crate::engine::{EngineStyleId, SessionId};
use ahash::AHashMap;
use once_cell::sync::OnceCell;
use smallvec::SmallVec;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Position of a handle in its registry, in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(pub u32);

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shared, immutable flyweight for one distinct style
///
/// The only state that changes after creation is the engine style id, which is
/// recorded once by [`StyleApplier`](super::StyleApplier) on first use. That id
/// belongs to the engine session the owning registry is bound to.
#[derive(Debug)]
pub struct StyleHandle {
    id: StyleId,
    hash: StyleHash,
    style: Style,
    engine_id: OnceCell<EngineStyleId>,
    /// Shared with the owning registry
    session: Arc<OnceCell<SessionId>>,
}

impl StyleHandle {
    fn new(
        id: StyleId,
        hash: StyleHash,
        style: Style,
        session: Arc<OnceCell<SessionId>>,
    ) -> Self {
        Self {
            id,
            hash,
            style,
            engine_id: OnceCell::new(),
            session,
        }
    }

    /// Registry-assigned id
    pub fn id(&self) -> StyleId {
        self.id
    }

    /// Hash the registry filed this handle under
    pub fn hash(&self) -> StyleHash {
        self.hash
    }

    /// The style descriptor (read-only)
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Engine style id, once the handle has been applied at least once
    pub fn engine_style_id(&self) -> Option<EngineStyleId> {
        self.engine_id.get().copied()
    }

    pub(crate) fn engine_id_cell(&self) -> &OnceCell<EngineStyleId> {
        &self.engine_id
    }

    pub(crate) fn session_cell(&self) -> &OnceCell<SessionId> {
        &self.session
    }

    /// Check if two handles are the same instance
    pub fn ptr_eq(a: &Arc<StyleHandle>, b: &Arc<StyleHandle>) -> bool {
        Arc::ptr_eq(a, b)
    }
}

/// Snapshot of registry counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistryStats {
    /// Number of distinct styles held
    pub distinct_styles: usize,
    /// Lookups answered by an existing handle
    pub hits: u64,
    /// Lookups that created a new handle
    pub misses: u64,
}

impl RegistryStats {
    /// Total number of lookups
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }
}

/// Bucket of handles sharing one hash; almost always a single entry
type Bucket = SmallVec<[Arc<StyleHandle>; 2]>;

#[derive(Debug, Default)]
struct Entries {
    buckets: AHashMap<StyleHash, Bucket>,
    /// All handles in insertion order (index == StyleId)
    ordered: Vec<Arc<StyleHandle>>,
}

impl Entries {
    fn find(&self, hash: StyleHash, style: &Style) -> Option<Arc<StyleHandle>> {
        self.buckets
            .get(&hash)?
            .iter()
            .find(|handle| handle.style == *style)
            .cloned()
    }
}

/// Flyweight registry for cell styles
///
/// One registry serves one workbook-build session and may be shared across
/// threads. Lookups take a shared lock; only inserting a new style takes the
/// exclusive lock. Handles are never evicted.
///
/// The hasher is only a fast filter. Descriptors that collide are kept side
/// by side in the same bucket and told apart by full equality.
///
/// The first engine a handle is applied to binds the whole registry to that
/// engine's session; applying any of its handles to another engine fails with
/// [`Error::ForeignSession`](crate::Error::ForeignSession).
#[derive(Debug)]
pub struct StyleRegistry<S = ContentHasher> {
    entries: RwLock<Entries>,
    hasher: S,
    session: Arc<OnceCell<SessionId>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl StyleRegistry<ContentHasher> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::with_hasher(ContentHasher)
    }

    /// Create an empty registry sized for `capacity` distinct styles
    pub fn with_capacity(capacity: usize) -> Self {
        let registry = Self::new();
        {
            let mut entries = registry.write();
            entries.buckets.reserve(capacity);
            entries.ordered.reserve(capacity);
        }
        registry
    }
}

impl Default for StyleRegistry<ContentHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BuildHasher> StyleRegistry<S> {
    /// Create an empty registry using a custom hasher
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            entries: RwLock::new(Entries::default()),
            hasher,
            session: Arc::new(OnceCell::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Get the shared handle for `style`, creating it on first request
    ///
    /// Equal styles always yield the same handle instance, including when
    /// several threads race to create it.
    pub fn get_or_create(&self, style: &Style) -> Arc<StyleHandle> {
        let hash = self.hash_of(style);

        {
            let entries = self.read();
            if let Some(handle) = entries.find(hash, style) {
                // Counted while the lock is held so stats() sees a consistent total
                self.hits.fetch_add(1, Ordering::Relaxed);
                log::trace!("style cache hit: {} (hash {})", handle.id, hash);
                return handle;
            }
        }

        let mut entries = self.write();

        // Another writer may have inserted it between the two locks
        if let Some(handle) = entries.find(hash, style) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            log::trace!("style cache hit after race: {} (hash {})", handle.id, hash);
            return handle;
        }

        let id = StyleId(entries.ordered.len() as u32);
        let handle = Arc::new(StyleHandle::new(
            id,
            hash,
            style.clone(),
            Arc::clone(&self.session),
        ));

        let bucket = entries.buckets.entry(hash).or_default();
        if !bucket.is_empty() {
            log::debug!(
                "style hash collision on {}: {} distinct styles share it",
                hash,
                bucket.len() + 1
            );
        }
        bucket.push(Arc::clone(&handle));
        entries.ordered.push(Arc::clone(&handle));
        self.misses.fetch_add(1, Ordering::Relaxed);

        log::debug!("registered style {} (hash {})", id, hash);
        handle
    }

    /// Get a handle by id
    pub fn get(&self, id: StyleId) -> Option<Arc<StyleHandle>> {
        self.read().ordered.get(id.0 as usize).cloned()
    }

    /// Get the number of distinct styles
    pub fn len(&self) -> usize {
        self.read().ordered.len()
    }

    /// Check if no style has been registered yet
    pub fn is_empty(&self) -> bool {
        self.read().ordered.is_empty()
    }

    /// Snapshot of all handles in insertion order
    pub fn handles(&self) -> Vec<Arc<StyleHandle>> {
        self.read().ordered.clone()
    }

    /// Engine session this registry is bound to, once any style was applied
    pub fn session(&self) -> Option<SessionId> {
        self.session.get().copied()
    }

    /// Counter snapshot
    ///
    /// Taken under the exclusive lock, so no lookup is half-counted.
    pub fn stats(&self) -> RegistryStats {
        let entries = self.write();
        RegistryStats {
            distinct_styles: entries.ordered.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    fn hash_of(&self, style: &Style) -> StyleHash {
        let mut hasher = self.hasher.build_hasher();
        style.hash(&mut hasher);
        StyleHash(hasher.finish())
    }

    // The map is never left half-updated, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
