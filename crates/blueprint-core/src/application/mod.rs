//! Application layer for Blueprint.
//!
//! This layer contains:
//! - **Generation**: artifact kinds, generators, registry, profiles and the
//!   pipeline executor
//! - **Services**: use case orchestration (`GenerationService`) and the
//!   resource materializer
//! - **Ports**: traits for templates, filesystem and archiving
//! - **Errors**: configuration, generation and I/O failures
//!
//! Business rules live in `crate::domain`; this layer only coordinates.

pub mod error;
pub mod generation;
pub mod ports;
pub mod services;

pub use error::{ConfigurationError, GenerationError, IoError};
pub use generation::{
    ArtifactGenerator, ArtifactKind, ArtifactRegistry, PipelineExecutor, ProfileCatalog,
    standard_registry,
};
pub use ports::{Archiver, Filesystem, TemplateRenderer, TemplateScanner};
pub use services::{
    ExistencePolicy, GeneratedFileSummary, GenerationResult, GenerationService, Preview,
    ResourceMaterializer,
};
