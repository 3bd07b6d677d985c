// ABOUTME: Injectable deployment ID generation.
// ABOUTME: UUID v4 in production, a prefixed counter when tests need predictable IDs.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::types::DeploymentId;

/// Produces a fresh, unique deployment ID on every call.
pub trait IdGenerator {
    fn next_id(&self) -> DeploymentId;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> DeploymentId {
        DeploymentId::new(Uuid::new_v4().to_string())
    }
}

/// Yields `<prefix>-1`, `<prefix>-2`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> DeploymentId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        DeploymentId::new(format!("{}-{}", self.prefix, n))
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn next_id(&self) -> DeploymentId {
        (**self).next_id()
    }
}
