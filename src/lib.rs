pub mod core;
pub mod error;
pub mod metrics;
pub mod report;
pub mod scheduler;
pub mod sim;

pub use error::SimError;
pub use metrics::{MetricsCalculator, MetricsResult};
pub use scheduler::{Algorithm, DEFAULT_QUANTUM, Scheduler};
pub use sim::{ProcessSpec, SimulationReport, SimulationRunner};
