//! Blueprint Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers of the Blueprint Spring Boot project
//! generator.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          blueprint-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerationService, PipelineExecutor)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Renderer, Scanner, Filesystem, Archiver)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     blueprint-adapters (Infrastructure) │
//! │   (MiniJinja, include_dir, zip, std::fs)│
//! └─────────────────────────────────────────┘
//!
//!   Domain layer (pure logic): ProjectBlueprint, validators, capabilities
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use blueprint_core::prelude::*;
//!
//! # fn run(service: GenerationService) -> BlueprintResult<()> {
//! let request = ProjectRequest::new(
//!     "com.example",
//!     "order-service",
//!     "Order Service",
//!     "Handles orders and billing",
//! );
//! let result = service.generate(&request, Path::new("./out"))?;
//! println!("archived to {}", result.archive_path.display());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

pub mod prelude {
    pub use crate::application::{
        ArtifactKind, GenerationResult, GenerationService, PipelineExecutor, ProfileCatalog,
        ports::{Archiver, Filesystem, TemplateRenderer, TemplateScanner},
    };
    pub use crate::domain::{
        DependencyRequest, GeneratedResource, PlatformTarget, ProjectBlueprint, ProjectRequest,
    };
    pub use crate::error::{BlueprintError, BlueprintResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
