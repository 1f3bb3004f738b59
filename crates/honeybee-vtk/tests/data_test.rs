//! Writing model files and loading result data onto sensor grids.

use std::fs;
use std::path::Path;

use honeybee_vtk::*;
use serde_json::json;

fn square(z: f64) -> Vec<DVec3> {
    vec![
        DVec3::new(0.0, 0.0, z),
        DVec3::new(1.0, 0.0, z),
        DVec3::new(1.0, 1.0, z),
        DVec3::new(0.0, 1.0, z),
    ]
}

fn grids() -> Vec<SensorGrid> {
    let mesh = SensorGrid {
        mesh: Some(Mesh3D {
            vertices: square(0.8),
            faces: vec![vec![0, 1, 2], vec![0, 2, 3]],
        }),
        ..SensorGrid::from_sensors("room1", Vec::new())
    };
    let points = SensorGrid::from_sensors(
        "room2",
        (0..3u32)
            .map(|i| Sensor {
                pos: DVec3::new(f64::from(i), 2.0, 0.8),
                dir: DVec3::Z,
            })
            .collect(),
    );
    vec![mesh, points]
}

fn write_results(dir: &Path, room1_count: usize) {
    let info = json!([
        {"identifier": "room1", "count": room1_count},
        {"identifier": "room2", "count": 3}
    ]);
    fs::write(dir.join("grids_info.json"), info.to_string()).unwrap();
    fs::write(dir.join("room1.res"), "1.0\n2.0\n").unwrap();
    fs::write(dir.join("room2.res"), "3.0\n4.0\n5.0\n").unwrap();
}

fn data_config(dir: &Path, object_type: &str, hide: bool) -> DataConfig {
    let config_file = dir.join("config.json");
    let body = json!({
        "daylight": {
            "identifier": "DF",
            "object_type": object_type,
            "unit": "%",
            "path": dir,
            "hide": hide
        }
    });
    fs::write(&config_file, body.to_string()).unwrap();
    load_config(&config_file).unwrap().remove(0)
}

fn grid_field(model: &Model, grid: &str) -> Vec<f64> {
    let data = model
        .actors()
        .get(grid)
        .and_then(|a| a.as_any().downcast_ref::<PolyData>())
        .unwrap();
    assert_eq!(data.color_by(), Some("DF"));
    data.field("DF").unwrap().values.clone()
}

#[test]
fn test_write_model() {
    let dir = tempfile::tempdir().unwrap();
    let mut grouped = GroupedPoints::new();
    grouped
        .add(FaceType::Wall, square(0.0))
        .add(FaceType::Aperture, square(1.0));

    let names = write_model(&grouped, &grids(), true, dir.path()).unwrap();
    assert_eq!(
        names,
        vec![
            "Wall",
            "Aperture",
            "grid mesh",
            "grid points",
            "Aperture vectors",
            "grid mesh vectors"
        ]
    );
    for name in &names {
        let text = fs::read_to_string(dir.path().join(format!("{name}.vtk"))).unwrap();
        assert!(text.starts_with("# vtk DataFile Version 3.0\n"));
    }

    let mesh = fs::read_to_string(dir.path().join("grid mesh.vtk")).unwrap();
    assert!(mesh.contains("POINTS 6 double\n"));
    assert!(mesh.contains("POLYGONS 2 8\n"));
}

#[test]
fn test_load_data_onto_grids() {
    let dir = tempfile::tempdir().unwrap();
    write_results(dir.path(), 2);

    let mut model = Model::new("office");
    add_sensor_grids(&mut model, &grids()).unwrap();
    assert_eq!(
        model.sensor_grids(),
        &[GridInfo::new("room1", 2), GridInfo::new("room2", 3)]
    );

    let config = data_config(dir.path(), "grid", false);
    let legend = load_data(&mut model, &config).unwrap().unwrap();
    assert_eq!(legend.title, "DF (%)");
    assert_eq!(legend.min, 1.0);
    assert_eq!(legend.max, 5.0);

    assert_eq!(grid_field(&model, "room1"), vec![1.0, 2.0]);
    assert_eq!(grid_field(&model, "room2"), vec![3.0, 4.0, 5.0]);
}

#[test]
fn test_hidden_data_has_no_legend() {
    let dir = tempfile::tempdir().unwrap();
    write_results(dir.path(), 2);

    let mut model = Model::new("office");
    add_sensor_grids(&mut model, &grids()).unwrap();
    let config = data_config(dir.path(), "grid", true);
    assert!(load_data(&mut model, &config).unwrap().is_none());

    let data = model
        .actors()
        .get("room1")
        .and_then(|a| a.as_any().downcast_ref::<PolyData>())
        .unwrap();
    assert!(data.field("DF").is_some());
    assert_eq!(data.color_by(), None);
}

#[test]
fn test_load_data_rejects_mismatched_results() {
    let dir = tempfile::tempdir().unwrap();
    write_results(dir.path(), 4);

    let mut model = Model::new("office");
    add_sensor_grids(&mut model, &grids()).unwrap();
    let config = data_config(dir.path(), "grid", false);
    let err = load_data(&mut model, &config).unwrap_err();
    match err {
        HbVtkError::GridMismatch(message) => assert!(message.contains("room1")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_data_only_for_grids() {
    let dir = tempfile::tempdir().unwrap();
    write_results(dir.path(), 2);

    let mut model = Model::new("office");
    add_sensor_grids(&mut model, &grids()).unwrap();
    let config = data_config(dir.path(), "wall", false);
    assert!(matches!(
        load_data(&mut model, &config),
        Err(HbVtkError::InvalidField {
            field: "object_type",
            ..
        })
    ));
}

#[test]
fn test_load_data_onto_base_geometry_grid() {
    let dir = tempfile::tempdir().unwrap();
    let sensors = (0..4u32)
        .map(|i| Sensor {
            pos: DVec3::new(0.25 + 0.5 * f64::from(i % 2), 0.25 + 0.5 * f64::from(i / 2), 0.8),
            dir: DVec3::Z,
        })
        .collect();
    let floor = SensorGrid {
        base_geometry: Some(vec![Face3D {
            boundary: square(0.8),
        }]),
        ..SensorGrid::from_sensors("floor", sensors)
    };

    let info = json!([{"identifier": "floor", "count": 4}]);
    fs::write(dir.path().join("grids_info.json"), info.to_string()).unwrap();
    fs::write(dir.path().join("floor.res"), "0.5\n1.5\n2.5\n3.5\n").unwrap();

    let mut model = Model::new("office");
    add_sensor_grids(&mut model, &[floor]).unwrap();
    let config = data_config(dir.path(), "grid", false);
    let legend = load_data(&mut model, &config).unwrap().unwrap();

    assert_eq!(grid_field(&model, "floor"), vec![0.5, 1.5, 2.5, 3.5]);
    assert_eq!(legend.max, 3.5);
}
