pub mod catalog;

pub use catalog::PetAction;
