//! # Temporal Resolve
//!
//! A host-agnostic temporal anti-aliasing (TAA) core for real-time renderers:
//! deterministic sub-pixel jitter sequencing, jittered projection matrices for
//! mono and stereo views, and a double-buffered history resolve protocol.
//!
//! ## Features
//!
//! - **Jitter sequencing**: repeating radix-2/radix-3 Halton offset pairs
//! - **Projection jitter**: perspective, orthographic, and externally
//!   supplied (device stereo) projections, with tangent reconstruction
//! - **History resolve**: per-view double buffering with automatic re-seeding
//!   on reset, resize, and re-enable
//! - **Host seam**: the surrounding pipeline is reached only through the
//!   [`RenderHost`] trait
//!
//! ## Quick Start
//!
//! ```
//! use temporal_resolve::prelude::*;
//!
//! let mut host = NullHost::new();
//! let mut taa = TaaController::new();
//! let camera = CameraDescriptor {
//!     projection: ProjectionKind::Perspective {
//!         fov_y: 60f32.to_radians(),
//!         aspect: 16.0 / 9.0,
//!     },
//!     near: 0.1,
//!     far: 100.0,
//!     pixel_width: 1920,
//!     pixel_height: 1080,
//! };
//!
//! // Per frame: prepare, render through the host, resolve.
//! let prepared = taa.prepare_frame(&mut host, ViewTarget::Mono, &camera);
//! assert!(prepared.is_some());
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into two tiers:
//!
//! - **`jitter` / `projection`**: pure sequence and matrix math
//! - **`controller` / `history`**: the per-frame driver and per-view state
//!   machine, talking to the pipeline through **`host`**

#![warn(clippy::all)]

pub mod config;
pub mod controller;
mod error;
pub mod history;
pub mod host;
pub mod jitter;
pub mod projection;

// Re-export public API
pub use error::{Result, TaaError};

pub use controller::{
    CameraDescriptor, JitteredProjection, ProjectionKind, TaaController, TaaSettings,
};
pub use history::{HistoryResolver, ResolveParams};
pub use host::{Eye, NullHost, PixelFormat, RenderHost, ResolvePass, SurfaceDesc, ViewTarget};
pub use jitter::{halton, JitterSequence};
pub use projection::FrustumTangents;

pub use glam::{Mat4, Vec2};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CameraDescriptor, Eye, NullHost, PixelFormat, ProjectionKind, RenderHost, Result,
        SurfaceDesc, TaaController, TaaError, TaaSettings, ViewTarget,
    };
}
