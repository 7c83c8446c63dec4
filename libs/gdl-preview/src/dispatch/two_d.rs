//! # 2D Dispatcher
//!
//! Plan drawing commands. Points are moved by the X/Y part of the current
//! offset; radii are taken as absolute values; arc angles are not
//! transformed.
//!
//! | Command | Arguments | Output |
//! |---------|-----------|--------|
//! | `LINE2` | `x1, y1, x2, y2` | segment |
//! | `RECT2` | `x1, y1, x2, y2` | 4-point polygon |
//! | `POLY2` | `n, [mask,] vertices...` | polygon |
//! | `CIRCLE2` | `cx, cy, r` | circle |
//! | `ARC2` | `cx, cy, r, a0, a1` | arc |
//! | `PROJECT2` | ignored | warning |

use super::points::{extract_points, vertex_count};
use super::{CommandContext, CommandSpec, Outcome};
use crate::result::{Arc2D, Circle2D};

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec::new("LINE2", 4, line2),
    CommandSpec::new("RECT2", 4, rect2),
    CommandSpec::new("POLY2", 3, poly2),
    CommandSpec::new("CIRCLE2", 3, circle2),
    CommandSpec::new("ARC2", 5, arc2),
    CommandSpec::unevaluated("PROJECT2", project2),
];

fn line2(v: &[f64], ctx: &CommandContext<'_>) -> Outcome {
    Outcome::Line((ctx.place_2d(v[0], v[1]), ctx.place_2d(v[2], v[3])))
}

fn rect2(v: &[f64], ctx: &CommandContext<'_>) -> Outcome {
    let (x1, y1, x2, y2) = (v[0], v[1], v[2], v[3]);
    Outcome::Polygon(vec![
        ctx.place_2d(x1, y1),
        ctx.place_2d(x2, y1),
        ctx.place_2d(x2, y2),
        ctx.place_2d(x1, y2),
    ])
}

fn poly2(v: &[f64], ctx: &CommandContext<'_>) -> Outcome {
    let n = vertex_count(v[0]);
    if n <= 0 {
        return Outcome::Warning(format!("POLY2 vertex count must be positive, got {n}"));
    }
    let n = usize::try_from(n).unwrap_or(usize::MAX);

    let rest = &v[1..];
    // A leading mask is present when there is room for it.
    let with_mask = n.checked_mul(2).and_then(|pairs| pairs.checked_add(1));
    let data = if with_mask.is_some_and(|needed| rest.len() >= needed) {
        &rest[1..]
    } else {
        rest
    };

    match extract_points(data, n) {
        Some(points) => Outcome::Polygon(
            points
                .into_iter()
                .map(|p| ctx.place_2d(p.x, p.y))
                .collect(),
        ),
        None => Outcome::Warning("POLY2 not enough vertex data, skipped".to_string()),
    }
}

fn circle2(v: &[f64], ctx: &CommandContext<'_>) -> Outcome {
    Outcome::Circle(Circle2D {
        center: ctx.place_2d(v[0], v[1]),
        radius: v[2].abs(),
    })
}

fn arc2(v: &[f64], ctx: &CommandContext<'_>) -> Outcome {
    Outcome::Arc(Arc2D {
        center: ctx.place_2d(v[0], v[1]),
        radius: v[2].abs(),
        start_angle: v[3],
        end_angle: v[4],
    })
}

fn project2(_: &[f64], _: &CommandContext<'_>) -> Outcome {
    Outcome::Warning("PROJECT2 is a placeholder in preview, no projection drawn".to_string())
}
