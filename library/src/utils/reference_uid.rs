use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a deferred asset reference, unique within one importer process.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display, Serialize, Deserialize)]
#[display("{}", _0)]
pub struct ReferenceUid(pub u64);

static NEXT_REFERENCE_UID: AtomicU64 = AtomicU64::new(1);

impl ReferenceUid {
    /// Mints a uid nobody else in this process has seen. Lock-free, so
    /// generation passes of unrelated materials may run in parallel.
    #[must_use]
    pub fn fresh() -> Self {
        ReferenceUid(NEXT_REFERENCE_UID.fetch_add(1, Ordering::Relaxed))
    }
}
