use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::worker::{Worker, WorkerId, WorkerStatus};

/// Error from a [`Colony`] operation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColonyError {
    #[error("worker named {0:?} already exists")]
    DuplicateName(String),
    #[error("no worker named {0:?}")]
    UnknownWorker(String),
    #[error("a worker cannot be linked to itself")]
    SelfLink,
    #[error("worker names must not be empty")]
    EmptyName,
}

/// Registry of workers. Workers are owned by id; a name index provides lookup
/// by the names users actually type.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Colony {
    workers: HashMap<WorkerId, Worker>,
    /// Index from worker name to id. Derived from `workers`; rebuilt on load.
    #[serde(skip)]
    name_to_id: HashMap<String, WorkerId>,
}

impl<'de> Deserialize<'de> for Colony {
    fn deserialize<D>(deserializer: D) -> Result<Colony, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Stored {
            workers: HashMap<WorkerId, Worker>,
        }
        // Rebuild the name index from the stored workers.
        let stored = Stored::deserialize(deserializer)?;
        let name_to_id = stored
            .workers
            .iter()
            .map(|(&id, worker)| (worker.name().to_owned(), id))
            .collect();
        Ok(Colony {
            workers: stored.workers,
            name_to_id,
        })
    }
}

impl Colony {
    /// Create an empty colony.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new worker under `name` and return its id.
    ///
    /// Names are trimmed of surrounding whitespace and must be non-empty and
    /// unique within the colony.
    pub fn start_worker(&mut self, name: &str) -> Result<WorkerId, ColonyError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ColonyError::EmptyName);
        }
        if self.name_to_id.contains_key(name) {
            return Err(ColonyError::DuplicateName(name.to_owned()));
        }
        let worker = Worker::new(name.to_owned());
        let id = worker.id();
        self.name_to_id.insert(name.to_owned(), id);
        self.workers.insert(id, worker);
        Ok(id)
    }

    /// Link the workers named `a` and `b`. Links are symmetric; linking an
    /// already-linked pair is a no-op.
    pub fn link(&mut self, a: &str, b: &str) -> Result<(), ColonyError> {
        let a_id = self.id_of(a)?;
        let b_id = self.id_of(b)?;
        if a_id == b_id {
            return Err(ColonyError::SelfLink);
        }
        self.worker_mut(a_id).add_link(b_id);
        self.worker_mut(b_id).add_link(a_id);
        Ok(())
    }

    /// Status report for the worker named `name`.
    pub fn status(&self, name: &str) -> Result<WorkerStatus, ColonyError> {
        let worker = self
            .get(name)
            .ok_or_else(|| ColonyError::UnknownWorker(name.to_owned()))?;
        let mut links: Vec<String> = worker
            .links()
            .map(|id| self.worker(id).name().to_owned())
            .collect();
        links.sort();
        Ok(WorkerStatus {
            id: worker.id(),
            name: worker.name().to_owned(),
            links,
        })
    }

    /// Look up a worker by name.
    pub fn get(&self, name: &str) -> Option<&Worker> {
        let id = self.name_to_id.get(name)?;
        self.workers.get(id)
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// All workers, sorted by name.
    pub fn workers_by_name(&self) -> impl Iterator<Item = &Worker> {
        let mut workers: Vec<_> = self.workers.values().collect();
        workers.sort_by(|a, b| a.name().cmp(b.name()));
        workers.into_iter()
    }

    fn id_of(&self, name: &str) -> Result<WorkerId, ColonyError> {
        self.name_to_id
            .get(name)
            .copied()
            .ok_or_else(|| ColonyError::UnknownWorker(name.to_owned()))
    }

    fn worker(&self, id: WorkerId) -> &Worker {
        self.workers
            .get(&id)
            .expect("name index refers to a missing worker")
    }

    fn worker_mut(&mut self, id: WorkerId) -> &mut Worker {
        self.workers
            .get_mut(&id)
            .expect("name index refers to a missing worker")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_worker_registers_by_name() {
        let mut colony = Colony::new();
        let id = colony.start_worker("miner").unwrap();
        assert_eq!(colony.len(), 1);
        let worker = colony.get("miner").unwrap();
        assert_eq!(worker.id(), id);
        assert_eq!(worker.name(), "miner");
        assert_eq!(worker.link_count(), 0);
    }

    #[test]
    fn start_worker_trims_whitespace() {
        let mut colony = Colony::new();
        colony.start_worker("  miner  ").unwrap();
        assert!(colony.get("miner").is_some());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut colony = Colony::new();
        colony.start_worker("miner").unwrap();
        assert_eq!(
            colony.start_worker("miner"),
            Err(ColonyError::DuplicateName("miner".to_owned()))
        );
        assert_eq!(colony.len(), 1);
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut colony = Colony::new();
        assert_eq!(colony.start_worker(""), Err(ColonyError::EmptyName));
        assert_eq!(colony.start_worker("   "), Err(ColonyError::EmptyName));
        assert!(colony.is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let mut colony = Colony::new();
        let a = colony.start_worker("a").unwrap();
        let b = colony.start_worker("b").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn link_is_symmetric() {
        let mut colony = Colony::new();
        let miner = colony.start_worker("miner").unwrap();
        let hauler = colony.start_worker("hauler").unwrap();
        colony.link("miner", "hauler").unwrap();
        assert_eq!(
            colony.get("miner").unwrap().links().collect::<Vec<_>>(),
            vec![hauler]
        );
        assert_eq!(
            colony.get("hauler").unwrap().links().collect::<Vec<_>>(),
            vec![miner]
        );
    }

    #[test]
    fn relinking_is_a_noop() {
        let mut colony = Colony::new();
        colony.start_worker("miner").unwrap();
        colony.start_worker("hauler").unwrap();
        colony.link("miner", "hauler").unwrap();
        colony.link("hauler", "miner").unwrap();
        assert_eq!(colony.get("miner").unwrap().link_count(), 1);
        assert_eq!(colony.get("hauler").unwrap().link_count(), 1);
    }

    #[test]
    fn self_links_are_rejected() {
        let mut colony = Colony::new();
        colony.start_worker("miner").unwrap();
        assert_eq!(colony.link("miner", "miner"), Err(ColonyError::SelfLink));
        assert_eq!(colony.get("miner").unwrap().link_count(), 0);
    }

    #[test]
    fn linking_unknown_workers_fails() {
        let mut colony = Colony::new();
        colony.start_worker("miner").unwrap();
        assert_eq!(
            colony.link("miner", "ghost"),
            Err(ColonyError::UnknownWorker("ghost".to_owned()))
        );
        assert_eq!(
            colony.link("ghost", "miner"),
            Err(ColonyError::UnknownWorker("ghost".to_owned()))
        );
    }

    #[test]
    fn status_reports_sorted_link_names() {
        let mut colony = Colony::new();
        let miner = colony.start_worker("miner").unwrap();
        colony.start_worker("smelter").unwrap();
        colony.start_worker("hauler").unwrap();
        colony.link("miner", "smelter").unwrap();
        colony.link("miner", "hauler").unwrap();

        let status = colony.status("miner").unwrap();
        assert_eq!(status.id, miner);
        assert_eq!(status.name, "miner");
        assert_eq!(status.links, vec!["hauler".to_owned(), "smelter".to_owned()]);
    }

    #[test]
    fn status_of_unknown_worker_fails() {
        let colony = Colony::new();
        assert_eq!(
            colony.status("ghost"),
            Err(ColonyError::UnknownWorker("ghost".to_owned()))
        );
    }

    #[test]
    fn workers_by_name_is_sorted() {
        let mut colony = Colony::new();
        colony.start_worker("smelter").unwrap();
        colony.start_worker("hauler").unwrap();
        colony.start_worker("miner").unwrap();
        let names: Vec<_> = colony.workers_by_name().map(Worker::name).collect();
        assert_eq!(names, vec!["hauler", "miner", "smelter"]);
    }

    #[test]
    fn round_trips_through_json_with_name_index() {
        let mut colony = Colony::new();
        let miner = colony.start_worker("miner").unwrap();
        colony.start_worker("hauler").unwrap();
        colony.link("miner", "hauler").unwrap();

        let json = serde_json::to_string(&colony).unwrap();
        let loaded: Colony = serde_json::from_str(&json).unwrap();

        // The name index is rebuilt on load, so lookup by name still works.
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.get("miner").unwrap().id(), miner);
        assert_eq!(
            loaded.status("hauler").unwrap().links,
            vec!["miner".to_owned()]
        );
    }
}
