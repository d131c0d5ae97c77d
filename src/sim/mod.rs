pub mod driver;
pub mod job;
pub mod workload;

pub use driver::{SimulationReport, SimulationRunner};
pub use job::ProcessSpec;
