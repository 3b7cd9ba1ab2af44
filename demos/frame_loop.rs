use temporal_resolve::prelude::*;
use temporal_resolve::projection::off_axis_perspective;
use temporal_resolve::FrustumTangents;

fn main() -> Result<()> {
    let mut host = NullHost::new();
    let mut taa = TaaController::new();

    let camera = CameraDescriptor {
        projection: ProjectionKind::Perspective {
            fov_y: 60f32.to_radians(),
            aspect: 16.0 / 9.0,
        },
        near: 0.1,
        far: 500.0,
        pixel_width: 1920,
        pixel_height: 1080,
    };
    let frame = SurfaceDesc::new(1920, 1080, PixelFormat::Rgba16Float);

    println!("mono, ten frames of jitter:");
    for index in 0..10 {
        let prepared = taa
            .prepare_frame(&mut host, ViewTarget::Mono, &camera)
            .expect("effect should be active");
        let source = host.allocate_buffer(frame)?;
        let destination = host.allocate_buffer(frame)?;
        taa.resolve(&mut host, ViewTarget::Mono, &source, &destination)?;
        println!(
            "  frame {index}: offset = ({:+.4}, {:+.4}) px, shader jitter = ({:+.6}, {:+.6})",
            prepared.offset.x,
            prepared.offset.y,
            taa.jitter_vector().x,
            taa.jitter_vector().y
        );
    }

    // Device-driven stereo: the rig supplies asymmetric per-eye projections
    // and the core rebuilds them shifted.
    taa.reset_history();
    let eye_frame = SurfaceDesc::new(1600, 1600, PixelFormat::Rgba16Float);
    let eyes = [
        (
            Eye::Left,
            FrustumTangents {
                left: -1.05,
                right: 0.78,
                bottom: -1.12,
                top: 1.08,
            },
        ),
        (
            Eye::Right,
            FrustumTangents {
                left: -0.78,
                right: 1.05,
                bottom: -1.12,
                top: 1.08,
            },
        ),
    ];

    println!("stereo, one frame per eye:");
    for (eye, tangents) in eyes {
        let device_projection = off_axis_perspective(tangents, 0.1, 500.0);
        let eye_camera = CameraDescriptor {
            projection: ProjectionKind::External {
                projection: device_projection,
            },
            near: 0.1,
            far: 500.0,
            pixel_width: 1600,
            pixel_height: 1600,
        };
        let prepared = taa
            .prepare_frame(&mut host, ViewTarget::Stereo(eye), &eye_camera)
            .expect("effect should be active");
        let source = host.allocate_buffer(eye_frame)?;
        let destination = host.allocate_buffer(eye_frame)?;
        taa.resolve(&mut host, ViewTarget::Stereo(eye), &source, &destination)?;
        println!(
            "  {eye:?}: offset = ({:+.4}, {:+.4}) px, history = {}",
            prepared.offset.x,
            prepared.offset.y,
            taa.has_history(ViewTarget::Stereo(eye))
        );
    }

    Ok(())
}
