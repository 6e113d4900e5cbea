/// Example: Show a shear instead of the default map
///
/// Usage: cargo run --example shear -- [k]

use lavis_core::{LinearMap2, VectorsDemo};
use lavis_terminal::TerminalApp;
use nalgebra::Matrix2;
use std::env;
use std::io;

fn main() -> io::Result<()> {
    let k = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<f64>().ok())
        .unwrap_or(1.0);

    let demo = VectorsDemo::new()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    let demo = VectorsDemo {
        map: LinearMap2::new(Matrix2::new(1.0, k, 0.0, 1.0)),
        show_image_triangle: true,
        ..demo
    };

    let image = demo.transformed();
    println!(
        "Shear by {k}: ({}, {}) -> ({}, {})",
        demo.vector.x, demo.vector.y, image.x, image.y
    );

    let mut app = TerminalApp::new(demo.plot())?;
    app.run()
}
