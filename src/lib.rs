#[macro_use]
extern crate serde_derive;

/// The injectable random-number source.
pub mod randutil;
/// Picking and shuffling elements of a slice.
pub mod sampling;

pub mod seq_ext;
pub mod set_ext;
pub mod str_ext;

/// JSON-in, JSON-out front end for sampling requests.
pub mod json_api;

/// Sans-IO client for the DigiSigner e-signature service.
pub mod digisigner;
/// Frequency histograms and chi-square checks.
pub mod stats;

pub use randutil::RandomSource;
pub use sampling::{SampleError, SampleOptions, SampleResult, SequenceSampler, Shuffled};
pub use seq_ext::{SliceExt, VecExt};
pub use set_ext::SetExt;
pub use str_ext::StrExt;
