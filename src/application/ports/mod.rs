//! Ports - Interfaces the application layer needs from the outside world

pub mod geometry_port;
pub mod scheduler_port;

pub use geometry_port::{GeometryPort, NullGeometryPort};
pub use scheduler_port::{ManualScheduler, SchedulerPort, TickHandle};
