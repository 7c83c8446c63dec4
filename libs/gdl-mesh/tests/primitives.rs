use config::constants::{FRUSTUM_SEGMENTS, SPHERE_LAT_STEPS, SPHERE_LON_STEPS};
use gdl_mesh::primitives::{create_block, create_frustum, create_prism, create_sphere};
use gdl_mesh::Shape;
use glam::{DVec2, DVec3};

fn all_shapes(origin: DVec3) -> Vec<Shape> {
    let hexagon: Vec<DVec2> = (0..6)
        .map(|i| {
            let a = f64::from(i) * std::f64::consts::PI / 3.0;
            DVec2::new(a.cos(), a.sin())
        })
        .collect();
    vec![
        create_block(DVec3::new(1.0, 2.0, 3.0), origin),
        create_frustum(2.0, 1.0, 0.25, FRUSTUM_SEGMENTS, origin).unwrap(),
        create_frustum(2.0, 0.0, 1.0, FRUSTUM_SEGMENTS, origin).unwrap(),
        create_sphere(1.5, SPHERE_LAT_STEPS, SPHERE_LON_STEPS, origin).unwrap(),
        create_prism(&hexagon, 0.5, origin).unwrap(),
    ]
}

#[test]
fn every_primitive_has_valid_indices() {
    for shape in all_shapes(DVec3::new(-3.0, 4.0, 0.25)) {
        assert!(shape.mesh.validate().is_ok(), "{}", shape.mesh.name());
        assert!(!shape.wires.is_empty());
    }
}

#[test]
fn builders_are_deterministic() {
    let origin = DVec3::new(0.1, 0.2, 0.3);
    assert_eq!(all_shapes(origin), all_shapes(origin));
}

#[test]
fn mesh_names_identify_builder() {
    let names: Vec<String> = all_shapes(DVec3::ZERO)
        .iter()
        .map(|s| s.mesh.name().to_string())
        .collect();
    assert_eq!(names, ["BLOCK", "FRUSTUM", "FRUSTUM", "SPHERE", "PRISM_"]);
}

#[test]
fn shape_serializes_for_plotting() {
    let shape = create_block(DVec3::ONE, DVec3::ZERO);
    let json = serde_json::to_value(&shape.mesh).unwrap();
    assert_eq!(json["x"].as_array().unwrap().len(), 8);
    assert_eq!(json["i"].as_array().unwrap().len(), 12);
    let wire = serde_json::to_value(&shape.wires[0]).unwrap();
    assert_eq!(wire, serde_json::json!([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]));
}
