//! Port traits the accessors depend on.

mod environment_port;

pub use environment_port::EnvironmentPort;

#[cfg(any(test, feature = "testing"))]
pub use environment_port::MockEnvironmentPort;
