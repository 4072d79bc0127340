mod repertoire;

pub use repertoire::{AddRepertoireEntry, RepertoireQuery};
