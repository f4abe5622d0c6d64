use crate::core::registry::Registry;
use crate::components::body::BodyKind;
use crate::renderer::instance::{GuidePath, RenderBuffer, RenderInstance};

/// Snapshot the registry into the render buffer, in registry order.
/// Sphere-like bodies become instances; orbit guides become stroked paths.
/// Read-only over the registry: rendering never mutates simulation state.
pub fn build_render_buffer(registry: &Registry, buffer: &mut RenderBuffer) {
    buffer.clear();

    for body in registry.iter() {
        if body.kind == BodyKind::OrbitGuide {
            if let Some(path) = &body.path {
                buffer.guides.push(GuidePath {
                    points: path.clone(),
                    r: body.visuals.color.r,
                    g: body.visuals.color.g,
                    b: body.visuals.color.b,
                });
            }
            continue;
        }

        buffer.instances.push(RenderInstance {
            x: body.position.x,
            y: body.position.y,
            z: body.position.z,
            radius: body.visuals.radius,
            r: body.visuals.color.r,
            g: body.visuals.color.g,
            b: body.visuals.color.b,
            emissive: body.visuals.emissive,
            shininess: body.visuals.shininess,
            kind: body.kind.render_code(),
            hazard: if body.visuals.hazard { 1.0 } else { 0.0 },
            _pad: 0.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::body::Body;
    use glam::Vec3;

    #[test]
    fn guides_become_paths_not_instances() {
        let mut registry = Registry::new();
        registry.upsert(Body::new("sun", BodyKind::Star));
        registry.upsert(Body::new("earth", BodyKind::Planet).with_orbit(8.0, 0.02, 0.0));
        registry.upsert(
            Body::new("earth:orbit", BodyKind::OrbitGuide)
                .with_path(vec![Vec3::ZERO, Vec3::X, Vec3::ZERO]),
        );

        let mut buffer = RenderBuffer::new();
        build_render_buffer(&registry, &mut buffer);

        assert_eq!(buffer.instance_count(), 2);
        assert_eq!(buffer.guides.len(), 1);
        assert_eq!(buffer.guides[0].points.len(), 3);
    }

    #[test]
    fn instances_keep_registry_order() {
        let mut registry = Registry::new();
        registry.upsert(Body::new("sun", BodyKind::Star));
        registry.upsert(Body::new("mercury", BodyKind::Planet).with_orbit(5.0, 0.04, 0.0));
        registry.upsert(Body::new("venus", BodyKind::Planet).with_orbit(7.0, 0.03, 0.0));

        let mut buffer = RenderBuffer::new();
        build_render_buffer(&registry, &mut buffer);

        assert_eq!(buffer.instances[0].kind, BodyKind::Star.render_code());
        assert!((buffer.instances[1].x - 5.0).abs() < 1e-4);
        assert!((buffer.instances[2].x - 7.0).abs() < 1e-4);
    }

    #[test]
    fn snapshot_is_rebuilt_from_scratch() {
        let mut registry = Registry::new();
        registry.upsert(Body::new("sun", BodyKind::Star));

        let mut buffer = RenderBuffer::new();
        build_render_buffer(&registry, &mut buffer);
        build_render_buffer(&registry, &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
    }
}
