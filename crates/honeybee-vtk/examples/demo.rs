//! Demo showing basic honeybee-vtk-rs usage.
//!
//! Builds a single room, prints the toolkit camera for a few views and writes
//! the room geometry as `.vtk` files to a temporary folder.

use honeybee_vtk::*;

fn rectangle(z: f64) -> Vec<DVec3> {
    vec![
        DVec3::new(0.0, 0.0, z),
        DVec3::new(8.0, 0.0, z),
        DVec3::new(8.0, 6.0, z),
        DVec3::new(0.0, 6.0, z),
    ]
}

fn main() -> Result<()> {
    init();

    let mut grouped = GroupedPoints::new();
    grouped
        .add(FaceType::Floor, rectangle(0.0))
        .add(FaceType::RoofCeiling, rectangle(3.0))
        .add(
            FaceType::Aperture,
            vec![
                DVec3::new(2.0, 0.0, 1.0),
                DVec3::new(6.0, 0.0, 1.0),
                DVec3::new(6.0, 0.0, 2.5),
                DVec3::new(2.0, 0.0, 2.5),
            ],
        );

    // A 4 x 3 sensor grid at work plane height
    let sensors = (0..12u32)
        .map(|i| Sensor {
            pos: DVec3::new(1.0 + f64::from(i % 4) * 2.0, 1.0 + f64::from(i / 4) * 2.0, 0.8),
            dir: DVec3::Z,
        })
        .collect();
    let grids = vec![SensorGrid::from_sensors("room", sensors)];

    let mut model = Model::new("demo");
    add_model_geometry(&mut model, &grouped);
    add_sensor_grids(&mut model, &grids)?;
    model
        .add_view(
            View::new("plan", DVec3::new(4.0, 3.0, 50.0), DVec3::NEG_Z)
                .with_view_type(Projection::Parallel),
        )
        .add_view(
            View::new("south", DVec3::new(4.0, -30.0, 1.5), DVec3::Y)
                .with_view_type(Projection::Parallel),
        )
        .add_view(View::new(
            "corner",
            DVec3::new(-6.0, -6.0, 4.0),
            DVec3::new(1.0, 1.0, -0.3),
        ));

    for (view, camera) in model.views().iter().zip(render_cameras(&model)?) {
        println!(
            "{}: position {} focal point {} parallel {}",
            view.identifier, camera.position, camera.focal_point, camera.parallel_projection
        );
    }

    let dir = std::env::temp_dir().join("honeybee-vtk-demo");
    std::fs::create_dir_all(&dir)?;
    let names = write_model(&grouped, &grids, true, &dir)?;
    println!("wrote {} files to {}", names.len(), dir.display());

    Ok(())
}
