//! # 3D Dispatcher
//!
//! Solid commands. Every solid is placed with the current offset as its
//! local origin and produces one mesh plus wireframe edges.
//!
//! | Command | Arguments | Builder |
//! |---------|-----------|---------|
//! | `BLOCK`, `BRICK` | `dx, dy, dz` | box |
//! | `CYLIND` | `h, r` | frustum |
//! | `CONE` | `h, r1, r2` | frustum |
//! | `SPHERE` | `r` | lat/long sphere |
//! | `PRISM_` | `n, h, [status,] x, y, ...` | extruded polygon |

use super::points::{extract_points, vertex_count};
use super::{CommandContext, CommandSpec, Outcome};
use config::constants::DEGENERATE_EPSILON;
use gdl_mesh::primitives::{create_block, create_frustum, create_prism, create_sphere};
use gdl_mesh::{MeshError, Shape};
use glam::DVec3;

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec::new("BLOCK", 3, block),
    CommandSpec::new("BRICK", 3, block),
    CommandSpec::new("CYLIND", 2, cylind),
    CommandSpec::new("CONE", 3, cone),
    CommandSpec::new("SPHERE", 1, sphere),
    CommandSpec::new("PRISM_", 4, prism),
];

/// Turns a builder result into an outcome, naming the mesh after `name`.
fn solid(built: Result<Shape, MeshError>, name: &str, ctx: &CommandContext<'_>) -> Outcome {
    match built {
        Ok(mut shape) => {
            if shape.mesh.name() != name {
                shape.mesh = shape.mesh.named(name);
            }
            Outcome::Solid(shape)
        }
        Err(err) => Outcome::Warning(format!("{} skipped: {err}", ctx.keyword)),
    }
}

fn block(v: &[f64], ctx: &CommandContext<'_>) -> Outcome {
    let size = DVec3::new(v[0], v[1], v[2]);
    Outcome::Solid(create_block(size, ctx.offset))
}

fn cylind(v: &[f64], ctx: &CommandContext<'_>) -> Outcome {
    let (h, r) = (v[0], v[1].abs());
    if r <= DEGENERATE_EPSILON || h.abs() <= DEGENERATE_EPSILON {
        return Outcome::Warning("CYLIND radius or height is zero, skipped".to_string());
    }
    let built = create_frustum(h, r, r, ctx.config.frustum_segments, ctx.offset);
    solid(built, "CYLIND", ctx)
}

fn cone(v: &[f64], ctx: &CommandContext<'_>) -> Outcome {
    let (h, r1, r2) = (v[0], v[1].abs(), v[2].abs());
    if h.abs() <= DEGENERATE_EPSILON || (r1 <= DEGENERATE_EPSILON && r2 <= DEGENERATE_EPSILON) {
        return Outcome::Warning("CONE geometry is degenerate, skipped".to_string());
    }
    let built = create_frustum(h, r1, r2, ctx.config.frustum_segments, ctx.offset);
    solid(built, "CONE", ctx)
}

fn sphere(v: &[f64], ctx: &CommandContext<'_>) -> Outcome {
    let r = v[0].abs();
    if r <= DEGENERATE_EPSILON {
        return Outcome::Warning("SPHERE radius is zero, skipped".to_string());
    }
    let config = ctx.config;
    let built = create_sphere(r, config.sphere_lat_steps, config.sphere_lon_steps, ctx.offset);
    solid(built, "SPHERE", ctx)
}

fn prism(v: &[f64], ctx: &CommandContext<'_>) -> Outcome {
    let n = vertex_count(v[0]);
    let h = v[1];
    if n <= 2 {
        return Outcome::Warning(format!("PRISM_ needs at least 3 vertices, got {n}"));
    }
    let n = usize::try_from(n).unwrap_or(usize::MAX);

    match extract_points(&v[2..], n) {
        Some(points) => solid(create_prism(&points, h, ctx.offset), "PRISM_", ctx),
        None => Outcome::Warning("PRISM_ not enough vertex data, skipped".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{lookup, Mode};
    use config::constants::PreviewConfig;

    fn run(keyword: &str, values: &[f64], offset: DVec3) -> Outcome {
        let config = PreviewConfig::default();
        let ctx = CommandContext {
            keyword,
            offset,
            config: &config,
        };
        let spec = lookup(Mode::Model3D, keyword).unwrap();
        (spec.handler)(values, &ctx)
    }

    fn shape(outcome: Outcome) -> Shape {
        match outcome {
            Outcome::Solid(shape) => shape,
            other => panic!("expected solid, got {:?}", other),
        }
    }

    #[test]
    fn test_brick_is_block() {
        let shape = shape(run("BRICK", &[1.0, 1.0, 1.0], DVec3::ZERO));
        assert_eq!(shape.mesh.name(), "BLOCK");
        assert_eq!(shape.mesh.vertex_count(), 8);
    }

    #[test]
    fn test_block_zero_size_is_flat_plate() {
        let shape = shape(run("BLOCK", &[1.0, 0.0, 1.0], DVec3::ZERO));
        assert_eq!(shape.mesh.vertex_count(), 8);
        assert_eq!(shape.mesh.bounding_box().1, DVec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_prism_zero_height_is_kept() {
        let shape = shape(run(
            "PRISM_",
            &[3.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            DVec3::ZERO,
        ));
        assert_eq!(shape.mesh.vertex_count(), 6);
        assert_eq!(shape.mesh.bounding_box().1.z, 0.0);
    }

    #[test]
    fn test_cylind_named_and_placed() {
        let shape = shape(run("CYLIND", &[2.0, -0.5], DVec3::new(0.0, 0.0, 1.0)));
        assert_eq!(shape.mesh.name(), "CYLIND");
        let (min, max) = shape.mesh.bounding_box();
        assert_eq!(min.z, 1.0);
        assert_eq!(max.z, 3.0);
    }

    #[test]
    fn test_cylind_degenerate() {
        assert!(matches!(
            run("CYLIND", &[2.0, 0.0], DVec3::ZERO),
            Outcome::Warning(_)
        ));
        assert!(matches!(
            run("CYLIND", &[0.0, 1.0], DVec3::ZERO),
            Outcome::Warning(_)
        ));
    }

    #[test]
    fn test_cone_pointed() {
        let shape = shape(run("CONE", &[1.0, 1.0, 0.0], DVec3::ZERO));
        assert_eq!(shape.mesh.name(), "CONE");
        // sides plus bottom cap only
        assert_eq!(shape.mesh.triangle_count(), 48 + 24);
    }

    #[test]
    fn test_cone_degenerate() {
        assert!(matches!(
            run("CONE", &[1.0, 0.0, 0.0], DVec3::ZERO),
            Outcome::Warning(_)
        ));
    }

    #[test]
    fn test_sphere_zero_radius() {
        assert_eq!(
            run("SPHERE", &[0.0], DVec3::ZERO),
            Outcome::Warning("SPHERE radius is zero, skipped".to_string())
        );
    }

    #[test]
    fn test_sphere_negative_radius_is_absolute() {
        let shape = shape(run("SPHERE", &[-1.0], DVec3::ZERO));
        let (_, max) = shape.mesh.bounding_box();
        assert!((max.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_prism_pairs() {
        let shape = shape(run(
            "PRISM_",
            &[3.0, 2.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            DVec3::ZERO,
        ));
        assert_eq!(shape.mesh.vertex_count(), 6);
        assert_eq!(shape.mesh.triangle_count(), 6 + 2);
    }

    #[test]
    fn test_prism_triplets() {
        let shape = shape(run(
            "PRISM_",
            &[3.0, 1.0, 15.0, 0.0, 0.0, 15.0, 2.0, 0.0, 15.0, 0.0, 2.0],
            DVec3::ZERO,
        ));
        let (min, max) = shape.mesh.bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(2.0, 2.0, 1.0));
    }

    #[test]
    fn test_prism_too_few_vertices() {
        assert!(matches!(
            run("PRISM_", &[2.0, 1.0, 0.0, 0.0, 1.0, 0.0], DVec3::ZERO),
            Outcome::Warning(m) if m.contains("at least 3")
        ));
    }
}
