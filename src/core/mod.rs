pub mod event;
pub mod observer;
pub mod state;
pub mod timeline;

pub use event::SchedEvent;
pub use observer::Observer;
pub use state::{Pid, ProcessRecord, ProcessState, Ticks};
pub use timeline::{TimelineBuilder, TimelineSegment};
