//! Struct `Sample` represents a batch of labeled boolean instances.

// Provides instance struct.
pub(crate) mod instance;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use sample_reader::SampleReader;
pub use sample_struct::Sample;
pub use instance::Instance;
