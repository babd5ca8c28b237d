mod registry;
mod worker;

pub use registry::{Colony, ColonyError};
pub use worker::{Worker, WorkerId, WorkerStatus};
