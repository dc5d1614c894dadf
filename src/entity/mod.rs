pub mod state;
pub mod vitals;

pub use state::{ActiveAction, HealthState, VisualAction, VisualMode};
pub use vitals::Vitals;
