//! The generation pipeline: artifact kinds, the generator registry, profiles
//! and the executor that runs them over a blueprint.

pub mod executor;
pub mod generators;
mod kind;
pub mod model;
pub mod registry;

pub use executor::PipelineExecutor;
pub use generators::standard_registry;
pub use kind::ArtifactKind;
pub use registry::{ArtifactGenerator, ArtifactRegistry, GenerationProfile, ProfileCatalog};
