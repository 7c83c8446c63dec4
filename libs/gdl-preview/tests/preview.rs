//! End-to-end behavior of the preview entry points.

use approx::assert_relative_eq;
use gdl_preview::params::parse_parameters;
use gdl_preview::{preview_2d, preview_3d, preview_both, Mode, ParamValue, Parameters, Runtime};
use glam::{DVec2, DVec3};

fn no_params() -> Parameters {
    Parameters::new()
}

// =============================================================================
// LOOPS
// =============================================================================

#[test]
fn test_one_mesh_per_block_in_loop() {
    let result = preview_3d("FOR i = 1 TO 4\nBLOCK 1, 1, 1\nNEXT i", &no_params(), 500);
    assert_eq!(result.meshes.len(), 4);
    assert_eq!(result.wires.len(), 4 * 12);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_loop_sum() {
    let mut runtime = Runtime::new(&no_params(), 500).unwrap();
    runtime.execute("S = 0\nFOR i = 1 TO 20\nS = S + i\nNEXT i", Mode::Model3D);
    assert_eq!(runtime.environment().get("S"), Some(210.0));
    assert_eq!(runtime.loop_iterations(), 20);
}

#[test]
fn test_for_limit_reported_once_per_loop() {
    let result = preview_3d("FOR i = 1 TO 1000\nBLOCK 1, 1, 1\nNEXT i", &no_params(), 5);
    assert_eq!(result.meshes.len(), 5);
    assert_eq!(
        result.warnings,
        ["line 1: FOR iterations exceeded limit 5, stopped early"]
    );
}

#[test]
fn test_nonpositive_limit_clamps_to_one() {
    for limit in [0, -3] {
        let result = preview_3d("FOR i = 1 TO 3\nBLOCK 1, 1, 1\nNEXT i", &no_params(), limit);
        assert_eq!(result.meshes.len(), 1);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("limit 1"));
    }
}

// =============================================================================
// TRANSFORMS
// =============================================================================

#[test]
fn test_add_del_places_blocks() {
    let result = preview_3d(
        "ADD 1, 2, 3\nBLOCK 1, 1, 1\nDEL 1\nBLOCK 1, 1, 1",
        &no_params(),
        500,
    );
    assert!(result.warnings.is_empty());
    assert_eq!(result.meshes[0].bounding_box().0, DVec3::new(1.0, 2.0, 3.0));
    assert_eq!(result.meshes[1].bounding_box().0, DVec3::ZERO);
}

#[test]
fn test_unbalanced_add_reported_once() {
    let mut runtime = Runtime::new(&no_params(), 500).unwrap();
    runtime.execute("ADD 5, 0, 0", Mode::Model3D);
    runtime.finish();
    assert_eq!(runtime.offset(), DVec3::ZERO);

    let result = runtime.into_result_3d();
    let unbalanced: Vec<_> = result
        .warnings
        .iter()
        .filter(|w| w.contains("unbalanced ADD/DEL"))
        .collect();
    assert_eq!(unbalanced, ["unbalanced ADD/DEL stack, auto DEL 1"]);
}

#[test]
fn test_fractional_offsets_return_to_zero() {
    let script = "FOR i = 1 TO 10\nADDX 0.1\nNEXT i\nDEL 10\nSPHERE 1";
    let result = preview_3d(script, &no_params(), 500);
    let (min, max) = result.meshes[0].bounding_box();
    assert_relative_eq!(min.x, -1.0, epsilon = 1e-12);
    assert_relative_eq!(max.x, 1.0, epsilon = 1e-12);
}

// =============================================================================
// 2D
// =============================================================================

#[test]
fn test_circle_radius_is_absolute() {
    let result = preview_2d("CIRCLE2 0, 0, -3", &no_params(), 500);
    assert_eq!(result.circles.len(), 1);
    assert_eq!(result.circles[0].radius, 3.0);
    assert_eq!(result.circles[0].center, DVec2::ZERO);
}

#[test]
fn test_plan_drawing() {
    let script = "\
! plan symbol
RECT2 0, 0, 2, 1
POLY2 3, 7, 0,0, 1,0, 0,1
ARC2 1, 1, 0.5, 0, 90
";
    let result = preview_2d(script, &no_params(), 500);
    assert!(result.warnings.is_empty());
    assert_eq!(result.polygons.len(), 2);
    assert_eq!(result.polygons[0].len(), 4);
    assert_eq!(result.polygons[1][2], DVec2::new(0.0, 1.0));
    assert_eq!(result.arcs[0].end_angle, 90.0);
}

#[test]
fn test_project2_placeholder() {
    let result = preview_2d("PROJECT2 3, 270, 2", &no_params(), 500);
    assert_eq!(
        result.warnings,
        ["line 1: PROJECT2 is a placeholder in preview, no projection drawn"]
    );
}

// =============================================================================
// 3D
// =============================================================================

#[test]
fn test_triangular_prism() {
    let result = preview_3d("PRISM_ 3, 2.0, 0,0, 1,0, 0,1", &no_params(), 500);
    assert!(result.warnings.is_empty());
    let mesh = &result.meshes[0];
    assert_eq!(mesh.name(), "PRISM_");
    assert_eq!(mesh.vertex_count(), 6);
    // 6 side triangles plus one per cap
    assert_eq!(mesh.triangle_count(), 8);
    assert_eq!(mesh.bounding_box().1.z, 2.0);
}

#[test]
fn test_every_solid_is_valid() {
    let script = "BLOCK 1, 2, 3\nBRICK -1, 1, 1\nCYLIND 2, 0.5\nCONE 1, 1, 0\nSPHERE 2\nPRISM_ 4, 1, 0,0, 1,0, 1,1, 0,1";
    let result = preview_3d(script, &no_params(), 500);
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    assert_eq!(result.meshes.len(), 6);
    for mesh in &result.meshes {
        assert!(mesh.validate().is_ok(), "{} is invalid", mesh.name());
    }
}

#[test]
fn test_zero_sphere_warns() {
    let result = preview_3d("SPHERE 0", &no_params(), 500);
    assert!(result.meshes.is_empty());
    assert_eq!(result.warnings, ["line 1: SPHERE radius is zero, skipped"]);
}

#[test]
fn test_flat_solids_are_kept() {
    let result = preview_3d("BLOCK 1, 1, 0\nPRISM_ 3, 0, 0,0, 1,0, 0,1", &no_params(), 500);
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    assert_eq!(result.meshes.len(), 2);
    assert_eq!(result.meshes[0].vertex_count(), 8);
    assert_eq!(result.meshes[1].vertex_count(), 6);
}

#[test]
fn test_deeply_nested_argument_skips_only_its_line() {
    let script = format!(
        "BLOCK {}1{}, 1, 1\nBLOCK 1, 1, 1",
        "(".repeat(200_000),
        ")".repeat(200_000)
    );
    let result = preview_3d(&script, &no_params(), 500);
    assert_eq!(result.meshes.len(), 1);
    assert_eq!(result.warnings.len(), 2);
    assert!(result.warnings[0].starts_with("line 1: expression failed"));
    assert!(result.warnings[0].ends_with("nested deeper than 256"));
    assert_eq!(result.warnings[1], "line 1: BLOCK arguments missing or invalid, skipped");
}

#[test]
fn test_unknown_command_warns() {
    let result = preview_3d("BLOCK 1, 1, 1\nFOOBAR 1, 2", &no_params(), 500);
    assert_eq!(result.meshes.len(), 1);
    assert_eq!(result.warnings, ["line 2: unsupported command FOOBAR, skipped"]);
}

#[test]
fn test_repeated_runs_are_identical() {
    let script = "FOR i = 0 TO 3\nADDX i * 1.1\nCONE 1, 0.3, 0.1\nSPHERE 0.2\nDEL 1\nNEXT i";
    let first = preview_3d(script, &no_params(), 500);
    let second = preview_3d(script, &no_params(), 500);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

// =============================================================================
// COMBINED RUNS AND PARAMETERS
// =============================================================================

#[test]
fn test_preview_both_merges_2d_first() {
    let result = preview_both("FOO2", "ADD 1, 1\nBAR3", &no_params(), 500);
    assert_eq!(
        result.warnings,
        [
            "line 1: unsupported command FOO2, skipped",
            "line 2: unsupported command BAR3, skipped",
            "unbalanced ADD/DEL stack, auto DEL 1",
        ]
    );
}

#[test]
fn test_preview_both_runs_are_independent() {
    let result = preview_both("A = 5", "B = A", &no_params(), 500);
    assert_eq!(result.preview_3d.warnings.len(), 1);
    assert!(result.preview_3d.warnings[0].contains("`A`"));
}

#[test]
fn test_parameters_seed_variables() {
    let params = parse_parameters(r#"{"A": 2, "b": "3", "zzz": "oak"}"#).unwrap();
    let result = preview_3d("BLOCK a, B, 1", &params, 500);
    assert!(result.warnings.is_empty());
    assert_eq!(result.meshes[0].bounding_box().1, DVec3::new(2.0, 3.0, 1.0));
}

#[test]
fn test_boolean_parameter() {
    let mut params = Parameters::new();
    params.insert("on".to_string(), ParamValue::Bool(true));
    let result = preview_2d("LINE2 0, 0, ON, ON", &params, 500);
    assert_eq!(result.lines[0].1, DVec2::ONE);
}

#[test]
fn test_strict_constructor_rejects_negative_limit() {
    assert!(Runtime::new(&no_params(), -5).is_err());
}
