pub mod pet;
pub mod snapshot;

pub use pet::PetSimulation;
pub use snapshot::PetSnapshot;
