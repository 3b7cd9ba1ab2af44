//! Host pipeline seam.
//!
//! The core never talks to a graphics API directly. Buffer lifetime, the
//! resolve submission, shader parameters, and camera installation all go
//! through [`RenderHost`], implemented by the surrounding pipeline.

use glam::{Mat4, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Pixel format of a 2D render buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelFormat {
    Rgba8Unorm,
    Bgra8Unorm,
    Rgba16Float,
    Rgb10A2Unorm,
}

/// Descriptor of a 2D render buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceDesc {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
}

impl SurfaceDesc {
    /// Creates a descriptor.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            format,
        }
    }
}

/// Stereo eye selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eye {
    Left,
    Right,
}

/// View the current frame is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTarget {
    Mono,
    Stereo(Eye),
}

impl ViewTarget {
    /// History slot backing this view. Mono shares slot 0 with the left eye.
    pub fn index(self) -> usize {
        match self {
            ViewTarget::Mono | ViewTarget::Stereo(Eye::Left) => 0,
            ViewTarget::Stereo(Eye::Right) => 1,
        }
    }
}

/// One resolve submission: two inputs, two simultaneous outputs.
///
/// `output` receives the user-visible antialiased frame; `next_history`
/// receives the blended copy kept for the following frame.
pub struct ResolvePass<'a, B> {
    pub source: &'a B,
    pub history: &'a B,
    pub output: &'a B,
    pub next_history: &'a B,
}

/// Trait implemented by rendering pipelines that drive the resolve core.
///
/// All methods are synchronous. [`submit_resolve`](Self::submit_resolve) is
/// fire-and-forget; GPU completion is the pipeline's concern.
pub trait RenderHost {
    /// Owned 2D image buffer handle.
    type Buffer;

    /// Returns the descriptor backing `buffer`.
    fn buffer_desc(&self, buffer: &Self::Buffer) -> SurfaceDesc;

    /// Allocates a buffer matching `desc`.
    fn allocate_buffer(&mut self, desc: SurfaceDesc) -> Result<Self::Buffer>;

    /// Releases a buffer previously handed out by
    /// [`allocate_buffer`](Self::allocate_buffer).
    fn release_buffer(&mut self, buffer: Self::Buffer);

    /// Pass-through copy of `source` into `destination`.
    fn copy_buffer(&mut self, source: &Self::Buffer, destination: &Self::Buffer);

    /// Submits the blend pass.
    fn submit_resolve(&mut self, pass: ResolvePass<'_, Self::Buffer>);

    /// Sets a scalar shader parameter by name.
    fn set_float(&mut self, name: &str, value: f32);

    /// Sets a 2D vector shader parameter by name.
    fn set_vec2(&mut self, name: &str, value: Vec2);

    /// Installs the jittered projection on the active view. The non-jittered
    /// matrix stays with the host for consumers that need it (motion-vector
    /// reconstruction elsewhere in the pipeline).
    fn install_projection(&mut self, view: ViewTarget, projection: Mat4);

    /// Whether the pipeline produces per-pixel motion vectors.
    fn supports_motion_vectors(&self) -> bool {
        true
    }

    /// Whether the pipeline can write two render targets in one pass.
    fn supports_multiple_render_targets(&self) -> bool {
        true
    }

    /// Whether the current frame is interrupted (e.g. mid-resize).
    fn is_interrupted(&self) -> bool {
        false
    }
}

/// Default host that keeps everything on the CPU and discards submissions.
///
/// Buffers are bare descriptors. Useful for tests, demos, and pipelines that
/// want the jitter math without the resolve pass.
#[derive(Debug, Default)]
pub struct NullHost;

impl NullHost {
    pub fn new() -> Self {
        Self
    }
}

impl RenderHost for NullHost {
    type Buffer = SurfaceDesc;

    fn buffer_desc(&self, buffer: &SurfaceDesc) -> SurfaceDesc {
        *buffer
    }

    fn allocate_buffer(&mut self, desc: SurfaceDesc) -> Result<SurfaceDesc> {
        Ok(desc)
    }

    fn release_buffer(&mut self, _buffer: SurfaceDesc) {}

    fn copy_buffer(&mut self, _source: &SurfaceDesc, _destination: &SurfaceDesc) {}

    fn submit_resolve(&mut self, _pass: ResolvePass<'_, SurfaceDesc>) {}

    fn set_float(&mut self, _name: &str, _value: f32) {}

    fn set_vec2(&mut self, _name: &str, _value: Vec2) {}

    fn install_projection(&mut self, _view: ViewTarget, _projection: Mat4) {}
}
