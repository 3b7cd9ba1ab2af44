//! Frame orchestration: jitter draw, projection install, resolve dispatch.

use glam::{Mat4, Vec2};
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_JITTER_SPREAD, DEFAULT_MOTION_BLENDING, DEFAULT_SHARPEN, DEFAULT_STATIONARY_BLENDING,
    UNIFORM_JITTER,
};
use crate::error::Result;
use crate::history::{HistoryResolver, ResolveParams};
use crate::host::{RenderHost, ViewTarget};
use crate::jitter::JitterSequence;
use crate::projection;

/// Tunable jitter/blend parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TaaSettings {
    /// Multiplier applied to raw jitter offsets before they reach the projection.
    pub jitter_spread: f32,
    /// Sharpening strength passed through to the resolve kernel.
    pub sharpen: f32,
    /// History weight for pixels with little motion.
    pub stationary_blending: f32,
    /// History weight for pixels in motion.
    pub motion_blending: f32,
}

impl Default for TaaSettings {
    fn default() -> Self {
        Self {
            jitter_spread: DEFAULT_JITTER_SPREAD,
            sharpen: DEFAULT_SHARPEN,
            stationary_blending: DEFAULT_STATIONARY_BLENDING,
            motion_blending: DEFAULT_MOTION_BLENDING,
        }
    }
}

/// Projection strategy for the frame, selected by the caller.
#[derive(Debug, Clone, Copy)]
pub enum ProjectionKind {
    /// Derive the matrix from a vertical field of view (radians) and aspect ratio.
    Perspective { fov_y: f32, aspect: f32 },
    /// Derive the matrix from a vertical half-extent and aspect ratio.
    Orthographic { size: f32, aspect: f32 },
    /// The host supplies its own per-eye matrix (device-driven stereo rigs);
    /// its bounds are reconstructed and the matrix rebuilt shifted.
    External { projection: Mat4 },
}

/// Camera state for one prepared view.
#[derive(Debug, Clone, Copy)]
pub struct CameraDescriptor {
    pub projection: ProjectionKind,
    pub near: f32,
    pub far: f32,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

/// Output of [`TaaController::prepare_frame`].
#[derive(Debug, Clone, Copy)]
pub struct JitteredProjection {
    /// Matrix installed on the view for this frame.
    pub matrix: Mat4,
    /// Spread-scaled offset in pixel units.
    pub offset: Vec2,
    /// Offset divided by the viewport dimensions (shader form).
    pub normalized: Vec2,
}

/// Temporal anti-aliasing frame driver.
///
/// Owns the jitter sequence and the per-view history state; everything else
/// is delegated to the host. Call order per frame is
/// [`prepare_frame`](Self::prepare_frame), render, then
/// [`resolve`](Self::resolve); the caller's frame loop enforces this, the
/// controller itself never blocks.
pub struct TaaController<H: RenderHost> {
    settings: TaaSettings,
    sequence: JitterSequence,
    resolver: HistoryResolver<H>,
    jitter_vector: Vec2,
    orthographic: bool,
    enabled: bool,
}

impl<H: RenderHost> TaaController<H> {
    pub fn new() -> Self {
        Self::with_settings(TaaSettings::default())
    }

    pub fn with_settings(settings: TaaSettings) -> Self {
        Self {
            settings,
            sequence: JitterSequence::new(),
            resolver: HistoryResolver::new(),
            jitter_vector: Vec2::ZERO,
            orthographic: false,
            enabled: true,
        }
    }

    /// Whether the effect runs this frame: enabled, the host can produce
    /// motion vectors and write two targets at once, and the frame is not
    /// interrupted.
    pub fn is_active(&self, host: &H) -> bool {
        self.enabled
            && host.supports_motion_vectors()
            && host.supports_multiple_render_targets()
            && !host.is_interrupted()
    }

    /// Draws the next jitter offset and installs the jittered projection for
    /// `view`, recording the normalized jitter vector for shaders.
    ///
    /// Returns `None` without touching any state when the effect is inactive.
    pub fn prepare_frame(
        &mut self,
        host: &mut H,
        view: ViewTarget,
        camera: &CameraDescriptor,
    ) -> Option<JitteredProjection> {
        if !self.is_active(host) {
            return None;
        }

        let offset = self.sequence.next() * self.settings.jitter_spread;
        let width = camera.pixel_width as f32;
        let height = camera.pixel_height as f32;

        let matrix = match camera.projection {
            ProjectionKind::Perspective { fov_y, aspect } => projection::jittered_perspective(
                fov_y,
                aspect,
                camera.near,
                camera.far,
                offset,
                width,
                height,
            ),
            ProjectionKind::Orthographic { size, aspect } => projection::jittered_orthographic(
                size,
                aspect,
                camera.near,
                camera.far,
                offset,
                width,
                height,
            ),
            ProjectionKind::External {
                projection: supplied,
            } => projection::jittered_external(&supplied, camera.near, camera.far, offset, width, height),
        };
        self.orthographic = matches!(camera.projection, ProjectionKind::Orthographic { .. });

        let normalized = offset / Vec2::new(width, height);
        self.jitter_vector = normalized;
        host.set_vec2(UNIFORM_JITTER, normalized);
        host.install_projection(view, matrix);

        Some(JitteredProjection {
            matrix,
            offset,
            normalized,
        })
    }

    /// Blends `source` with the view's history into `destination` and swaps
    /// in the freshly produced history.
    ///
    /// Returns `Ok(false)` without touching any state when the effect is
    /// inactive. On allocation failure the error surfaces and the frame's
    /// effect is skipped; retrying next frame re-enters the seed path if
    /// history was lost.
    pub fn resolve(
        &mut self,
        host: &mut H,
        view: ViewTarget,
        source: &H::Buffer,
        destination: &H::Buffer,
    ) -> Result<bool> {
        if !self.is_active(host) {
            return Ok(false);
        }

        let params = ResolveParams {
            sharpen: self.settings.sharpen,
            stationary_blending: self.settings.stationary_blending,
            motion_blending: self.settings.motion_blending,
            orthographic: self.orthographic,
        };
        self.resolver.resolve(host, view, source, destination, params)?;
        Ok(true)
    }

    /// Discards accumulated history: the next resolve per view re-seeds and
    /// the jitter sequence restarts. Idempotent.
    pub fn reset_history(&mut self) {
        self.resolver.request_reset();
        self.sequence.reset();
    }

    /// Enables or disables the effect. Disabling releases every history
    /// buffer and restarts the jitter sequence so re-enabling starts clean.
    pub fn set_enabled(&mut self, host: &mut H, enabled: bool) {
        if self.enabled && !enabled {
            self.resolver.release_all(host);
            self.sequence.reset();
        }
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Normalized jitter of the most recently prepared frame (shader form).
    pub fn jitter_vector(&self) -> Vec2 {
        self.jitter_vector
    }

    /// Whether `view` currently holds blend history.
    pub fn has_history(&self, view: ViewTarget) -> bool {
        self.resolver.has_history(view)
    }

    pub fn settings(&self) -> &TaaSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut TaaSettings {
        &mut self.settings
    }
}

impl<H: RenderHost> Default for TaaController<H> {
    fn default() -> Self {
        Self::new()
    }
}
