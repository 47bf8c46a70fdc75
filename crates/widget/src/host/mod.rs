pub mod gateway;
pub mod mock_data;
pub mod readiness;

pub use gateway::{HostError, HostGateway};
pub use readiness::{PageLoadOutcome, ReadinessProbe};
