pub mod alphabet;
pub mod descriptors;
pub mod sequence;
