use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a single worker. Unique within a [`Colony`](crate::Colony) and
/// stable for the life of the worker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WorkerId(Uuid);

impl WorkerId {
    /// Create a fresh, unique id.
    pub(crate) fn new() -> Self {
        WorkerId(Uuid::new_v4())
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single named worker and the links it holds to other workers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    id: WorkerId,
    name: String,
    /// Ids of linked workers. Ordered set so iteration and serialization are
    /// deterministic.
    links: BTreeSet<WorkerId>,
}

impl Worker {
    pub(crate) fn new(name: String) -> Self {
        Worker {
            id: WorkerId::new(),
            name,
            links: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> WorkerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of the workers this worker is linked to.
    pub fn links(&self) -> impl Iterator<Item = WorkerId> + '_ {
        self.links.iter().copied()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Record a link to `other`. Returns false if the link already existed.
    pub(crate) fn add_link(&mut self, other: WorkerId) -> bool {
        self.links.insert(other)
    }
}

/// Point-in-time report for a single worker, suitable for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerStatus {
    pub id: WorkerId,
    pub name: String,
    /// Names of linked workers, sorted.
    pub links: Vec<String>,
}

impl fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "worker {} ({})", self.name, self.id)?;
        if self.links.is_empty() {
            write!(f, ": no links")
        } else {
            write!(f, ": linked to {}", self.links.join(", "))
        }
    }
}
