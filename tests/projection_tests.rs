use approx::assert_relative_eq;
use temporal_resolve::projection::{
    jittered_external, jittered_orthographic, jittered_perspective, off_axis_perspective,
    reconstruct_tangents, FrustumTangents,
};
use temporal_resolve::{Mat4, Vec2};

#[test]
fn zero_jitter_matches_symmetric_projection() {
    let fov_y = 60f32.to_radians();
    let jittered = jittered_perspective(fov_y, 16.0 / 9.0, 0.1, 100.0, Vec2::ZERO, 1920.0, 1080.0);
    let symmetric = Mat4::perspective_rh_gl(fov_y, 16.0 / 9.0, 0.1, 100.0);
    assert!(
        jittered.abs_diff_eq(symmetric, 1e-5),
        "jittered = {jittered}, symmetric = {symmetric}"
    );
}

#[test]
fn reconstruction_round_trips_shifted_tangents() {
    let fov_y = 72f32.to_radians();
    let aspect = 1.8;
    let offset = Vec2::new(0.37, -0.22);
    let (width, height) = (2160.0, 1200.0);

    let matrix = jittered_perspective(fov_y, aspect, 0.05, 250.0, offset, width, height);
    let tangents = reconstruct_tangents(&matrix);

    let vertical = (0.5 * fov_y).tan();
    let expected = FrustumTangents::symmetric(fov_y, aspect).shifted(Vec2::new(
        offset.x * vertical * aspect / (0.5 * width),
        offset.y * vertical / (0.5 * height),
    ));

    assert_relative_eq!(tangents.left, expected.left, epsilon = 1e-5);
    assert_relative_eq!(tangents.right, expected.right, epsilon = 1e-5);
    assert_relative_eq!(tangents.bottom, expected.bottom, epsilon = 1e-5);
    assert_relative_eq!(tangents.top, expected.top, epsilon = 1e-5);
}

#[test]
fn rebuild_from_reconstructed_tangents_is_stable() {
    let matrix = jittered_perspective(
        90f32.to_radians(),
        16.0 / 10.0,
        0.01,
        2000.0,
        Vec2::new(0.5, 0.5),
        1920.0,
        1080.0,
    );
    let rebuilt = off_axis_perspective(reconstruct_tangents(&matrix), 0.01, 2000.0);
    assert!(
        matrix.abs_diff_eq(rebuilt, 1e-5),
        "matrix = {matrix}, rebuilt = {rebuilt}"
    );
}

#[test]
fn reconstruction_handles_asymmetric_stereo_matrices() {
    // A typical HMD eye frustum: wider toward the nose than the temple.
    let eye = FrustumTangents {
        left: -1.05,
        right: 0.78,
        bottom: -1.12,
        top: 1.08,
    };
    let device_projection = off_axis_perspective(eye, 0.1, 500.0);
    let tangents = reconstruct_tangents(&device_projection);

    assert_relative_eq!(tangents.left, eye.left, epsilon = 1e-5);
    assert_relative_eq!(tangents.right, eye.right, epsilon = 1e-5);
    assert_relative_eq!(tangents.bottom, eye.bottom, epsilon = 1e-5);
    assert_relative_eq!(tangents.top, eye.top, epsilon = 1e-5);
}

#[test]
fn external_rebuild_with_zero_offset_preserves_matrix() {
    let eye = FrustumTangents {
        left: -0.9,
        right: 1.1,
        bottom: -1.0,
        top: 1.0,
    };
    let device_projection = off_axis_perspective(eye, 0.1, 500.0);
    let rebuilt = jittered_external(&device_projection, 0.1, 500.0, Vec2::ZERO, 1600.0, 1600.0);
    assert!(
        device_projection.abs_diff_eq(rebuilt, 1e-5),
        "device = {device_projection}, rebuilt = {rebuilt}"
    );
}

#[test]
fn external_jitter_shifts_bounds_by_full_fov_fraction() {
    let eye = FrustumTangents {
        left: -1.0,
        right: 0.8,
        bottom: -1.1,
        top: 1.1,
    };
    let device_projection = off_axis_perspective(eye, 0.1, 500.0);
    let offset = Vec2::new(0.4, -0.3);
    let (width, height) = (1440.0, 1600.0);

    let jittered = jittered_external(&device_projection, 0.1, 500.0, offset, width, height);
    let tangents = reconstruct_tangents(&jittered);

    let expected_x = offset.x * (eye.left.abs() + eye.right.abs()) / width;
    let expected_y = offset.y * (eye.bottom.abs() + eye.top.abs()) / height;
    assert_relative_eq!(tangents.left, eye.left + expected_x, epsilon = 1e-5);
    assert_relative_eq!(tangents.right, eye.right + expected_x, epsilon = 1e-5);
    assert_relative_eq!(tangents.bottom, eye.bottom + expected_y, epsilon = 1e-5);
    assert_relative_eq!(tangents.top, eye.top + expected_y, epsilon = 1e-5);
}

#[test]
fn orthographic_jitter_translates_without_rescaling() {
    let plain = jittered_orthographic(5.0, 16.0 / 9.0, 0.1, 100.0, Vec2::ZERO, 1920.0, 1080.0);
    let shifted = jittered_orthographic(
        5.0,
        16.0 / 9.0,
        0.1,
        100.0,
        Vec2::new(1.0, 0.0),
        1920.0,
        1080.0,
    );

    // Scale terms untouched, translation moved by one pixel over the half-width.
    assert_relative_eq!(plain.x_axis.x, shifted.x_axis.x, epsilon = 1e-6);
    assert_relative_eq!(plain.y_axis.y, shifted.y_axis.y, epsilon = 1e-6);
    assert_relative_eq!(shifted.w_axis.x, plain.w_axis.x - 1.0 / 960.0, epsilon = 1e-6);
    assert_relative_eq!(shifted.w_axis.y, plain.w_axis.y, epsilon = 1e-6);
}
