pub mod executor;

pub use executor::{SubmitExecutor, SubmitOutcome, SubmitPhase};
