pub mod generation_service;
pub mod materializer;

pub use generation_service::{GeneratedFileSummary, GenerationResult, GenerationService, Preview};
pub use materializer::{ExistencePolicy, ResourceMaterializer};
