//! Jittered projection construction and reconstruction.
//!
//! All functions here are pure matrix algebra (right-handed, OpenGL clip
//! conventions). Degenerate camera parameters such as a zero near plane or
//! zero aspect ratio are not validated; callers own their camera state and
//! NaN/Inf simply propagate into the result.

use glam::{Mat4, Vec2, Vec4};

/// Half-angle tangent bounds of a view frustum.
///
/// Each bound is the frustum edge at the near plane divided by the near
/// plane distance, so symmetric frusta satisfy `right == -left` and
/// `top == -bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumTangents {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl FrustumTangents {
    /// Symmetric bounds for a vertical field of view (radians) and aspect ratio.
    pub fn symmetric(fov_y: f32, aspect: f32) -> Self {
        let vertical = (0.5 * fov_y).tan();
        let horizontal = vertical * aspect;
        Self {
            left: -horizontal,
            right: horizontal,
            bottom: -vertical,
            top: vertical,
        }
    }

    /// Shifts all four bounds by a tangent-space offset.
    pub fn shifted(self, offset: Vec2) -> Self {
        Self {
            left: self.left + offset.x,
            right: self.right + offset.x,
            bottom: self.bottom + offset.y,
            top: self.top + offset.y,
        }
    }

    /// Total horizontal field of view as the sum of absolute tangent magnitudes.
    pub fn horizontal_span(&self) -> f32 {
        self.left.abs() + self.right.abs()
    }

    /// Total vertical field of view as the sum of absolute tangent magnitudes.
    pub fn vertical_span(&self) -> f32 {
        self.bottom.abs() + self.top.abs()
    }
}

/// Off-axis perspective matrix from tangent bounds and clip planes.
///
/// With symmetric bounds this reproduces `Mat4::perspective_rh_gl`.
pub fn off_axis_perspective(tangents: FrustumTangents, near: f32, far: f32) -> Mat4 {
    let left = tangents.left * near;
    let right = tangents.right * near;
    let bottom = tangents.bottom * near;
    let top = tangents.top * near;

    let x = 2.0 * near / (right - left);
    let y = 2.0 * near / (top - bottom);
    let a = (right + left) / (right - left);
    let b = (top + bottom) / (top - bottom);
    let c = -(far + near) / (far - near);
    let d = -2.0 * far * near / (far - near);

    Mat4::from_cols(
        Vec4::new(x, 0.0, 0.0, 0.0),
        Vec4::new(0.0, y, 0.0, 0.0),
        Vec4::new(a, b, c, -1.0),
        Vec4::new(0.0, 0.0, d, 0.0),
    )
}

/// Reconstructs the tangent bounds from an existing perspective matrix.
///
/// Works for any matrix produced by [`off_axis_perspective`], including
/// asymmetric device-supplied stereo projections: building, reconstructing,
/// and rebuilding reproduces the same bounds up to floating-point rounding.
pub fn reconstruct_tangents(projection: &Mat4) -> FrustumTangents {
    let right = (1.0 + projection.z_axis.x) / projection.x_axis.x;
    let left = right - 2.0 / projection.x_axis.x;
    let top = (1.0 + projection.z_axis.y) / projection.y_axis.y;
    let bottom = top - 2.0 / projection.y_axis.y;
    FrustumTangents {
        left,
        right,
        bottom,
        top,
    }
}

/// Jittered perspective projection.
///
/// `offset` is the spread-scaled jitter in pixel units; it is mapped into
/// tangent space against half the viewport before shifting the bounds.
pub fn jittered_perspective(
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    offset: Vec2,
    pixel_width: f32,
    pixel_height: f32,
) -> Mat4 {
    let tangents = FrustumTangents::symmetric(fov_y, aspect);
    let tangent_offset = Vec2::new(
        offset.x * tangents.right / (0.5 * pixel_width),
        offset.y * tangents.top / (0.5 * pixel_height),
    );
    off_axis_perspective(tangents.shifted(tangent_offset), near, far)
}

/// Jittered orthographic projection. `size` is the vertical half-extent.
pub fn jittered_orthographic(
    size: f32,
    aspect: f32,
    near: f32,
    far: f32,
    offset: Vec2,
    pixel_width: f32,
    pixel_height: f32,
) -> Mat4 {
    let vertical = size;
    let horizontal = vertical * aspect;
    let shift = Vec2::new(
        offset.x * horizontal / (0.5 * pixel_width),
        offset.y * vertical / (0.5 * pixel_height),
    );
    Mat4::orthographic_rh_gl(
        shift.x - horizontal,
        shift.x + horizontal,
        shift.y - vertical,
        shift.y + vertical,
        near,
        far,
    )
}

/// Jittered rebuild of an externally supplied projection.
///
/// Used when the host provides its own per-eye matrix (device-driven stereo
/// rigs): the tangent bounds are reconstructed from the matrix itself and the
/// offset is scaled against the full per-axis field of view.
pub fn jittered_external(
    projection: &Mat4,
    near: f32,
    far: f32,
    offset: Vec2,
    pixel_width: f32,
    pixel_height: f32,
) -> Mat4 {
    let tangents = reconstruct_tangents(projection);
    let tangent_offset = Vec2::new(
        offset.x * tangents.horizontal_span() / pixel_width,
        offset.y * tangents.vertical_span() / pixel_height,
    );
    off_axis_perspective(tangents.shifted(tangent_offset), near, far)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_bounds_mirror_each_other() {
        let tangents = FrustumTangents::symmetric(60f32.to_radians(), 16.0 / 9.0);
        assert_eq!(tangents.right, -tangents.left);
        assert_eq!(tangents.top, -tangents.bottom);
        assert!(tangents.right > tangents.top, "wide aspect spans more horizontally");
    }

    #[test]
    fn test_off_axis_matches_glam_for_symmetric_bounds() {
        let fov_y = 60f32.to_radians();
        let tangents = FrustumTangents::symmetric(fov_y, 16.0 / 9.0);
        let ours = off_axis_perspective(tangents, 0.1, 100.0);
        let reference = Mat4::perspective_rh_gl(fov_y, 16.0 / 9.0, 0.1, 100.0);
        assert!(
            ours.abs_diff_eq(reference, 1e-5),
            "ours = {ours}, reference = {reference}"
        );
    }
}
