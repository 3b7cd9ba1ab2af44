//! Global configuration constants for the temporal resolve core.

/// Number of jitter samples emitted before the sequence repeats.
pub const JITTER_PERIOD: u32 = 8;

/// Window the sample index is folded into before Halton evaluation.
/// Inert while [`JITTER_PERIOD`] stays below 1024; bounds the Halton loop
/// if the period is ever raised.
pub const HALTON_INDEX_MASK: u32 = 1023;

/// Number of independent history slots (mono/left eye and right eye).
pub const VIEW_COUNT: usize = 2;

/// Converts per-pixel motion magnitude into the blend-weight curve
/// (100 units at a 60 Hz reference rate).
pub const MOTION_AMPLIFICATION: f32 = 100.0 * 60.0;

/// Default spread multiplier applied to raw jitter offsets.
pub const DEFAULT_JITTER_SPREAD: f32 = 0.75;

/// Default sharpening strength fed to the resolve kernel.
pub const DEFAULT_SHARPEN: f32 = 0.3;

/// Default history weight for pixels with little motion.
pub const DEFAULT_STATIONARY_BLENDING: f32 = 0.95;

/// Default history weight for pixels in motion.
pub const DEFAULT_MOTION_BLENDING: f32 = 0.85;

/// Shader parameter name for the normalized jitter vector.
pub const UNIFORM_JITTER: &str = "taa_jitter";

/// Shader parameter name for the sharpening strength.
pub const UNIFORM_SHARPEN: &str = "taa_sharpen";

/// Shader parameter name for the stationary blend factor.
pub const UNIFORM_STATIONARY_BLENDING: &str = "taa_stationary_blending";

/// Shader parameter name for the motion blend factor.
pub const UNIFORM_MOTION_BLENDING: &str = "taa_motion_blending";

/// Shader parameter name for the motion amplification constant.
pub const UNIFORM_MOTION_AMPLIFICATION: &str = "taa_motion_amplification";

/// Shader parameter name for the orthographic-projection flag (0.0 or 1.0).
pub const UNIFORM_ORTHOGRAPHIC: &str = "taa_orthographic";
