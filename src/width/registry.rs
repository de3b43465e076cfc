use super::Width;

use lazy_static::lazy_static;
use tracing::{debug, warn};

use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::mem;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

lazy_static! {
    static ref GLOBAL: WidthRegistry = WidthRegistry::new();
}

/// Memoized storage widths keyed by type.
///
/// Entries are written once, the first time a type is resolved, and never
/// change afterwards. Concurrent first use of the same type measures it
/// exactly once: the measurement runs under the write lock.
///
/// A resolved lookup costs one uncontended read lock.
#[derive(Debug, Default)]
pub struct WidthRegistry {
    widths: RwLock<HashMap<TypeId, usize>>,
    measurements: AtomicUsize,
}

impl WidthRegistry {
    /// An empty registry, independent of [`WidthRegistry::global`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry used by [`width_of`](super::width_of).
    pub fn global() -> &'static WidthRegistry {
        &GLOBAL
    }

    /// Returns the storage size of `T`, measuring it on first use.
    pub fn resolve<T: 'static>(&self) -> usize {
        let id = TypeId::of::<T>();

        if let Some(&bytes) = self
            .widths
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
        {
            return bytes;
        }

        // Another thread may have won the race; `entry` keeps its value.
        let mut widths = self.widths.write().unwrap_or_else(PoisonError::into_inner);

        *widths.entry(id).or_insert_with(|| {
            self.measurements.fetch_add(1, Ordering::Relaxed);
            measure::<T>()
        })
    }

    /// Whether `T` has been resolved through this registry.
    pub fn contains<T: 'static>(&self) -> bool {
        self.widths
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<T>())
    }

    /// Number of types resolved so far.
    pub fn len(&self) -> usize {
        self.widths.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// `true` until the first type is resolved.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of storage measurements performed so far.
    ///
    /// Equals [`len`](Self::len): every type is measured once.
    pub fn measurements(&self) -> usize {
        self.measurements.load(Ordering::Relaxed)
    }
}

fn measure<T>() -> usize {
    let bytes = mem::size_of::<T>();

    match Width::try_from(bytes) {
        Ok(width) => {
            debug!(type_name = type_name::<T>(), bytes, "resolved representation width {width}");
        }
        Err(err) => {
            warn!(
                type_name = type_name::<T>(),
                bytes, "{err}, conversions for this type yield zero"
            );
        }
    }

    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_once_per_type() {
        let registry = WidthRegistry::new();
        assert!(registry.is_empty());

        assert_eq!(registry.resolve::<u16>(), 2);
        assert_eq!(registry.resolve::<u16>(), 2);
        assert_eq!(registry.len(), 1);

        assert_eq!(registry.resolve::<u64>(), 8);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.measurements(), 2);
        assert!(registry.contains::<u16>());
        assert!(!registry.contains::<i16>());
    }

    #[test]
    fn records_unsupported_sizes() {
        let registry = WidthRegistry::new();

        assert_eq!(registry.resolve::<[u8; 3]>(), 3);
        assert_eq!(registry.resolve::<[u8; 3]>(), 3);
        assert!(registry.contains::<[u8; 3]>());
        assert_eq!(registry.measurements(), 1);
    }
}
