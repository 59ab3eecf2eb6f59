//! In-memory port adapters for tests and local development.

pub mod fixture_store;
pub mod recording_sink;

pub use fixture_store::FixtureStore;
pub use recording_sink::{RecordedReassignment, RecordingSink};
