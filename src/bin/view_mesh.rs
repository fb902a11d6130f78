use anyhow::Result;
use numlab::draw_triangles;
use numlab::io::csv::read_triangles;
use std::env;
use std::path::Path;

const DEFAULT_INPUT: &str = "sphere.csv";

fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let triangles = read_triangles(Path::new(&path))?;
    println!("Loaded {} triangles from {path}", triangles.len());

    // Show the mesh in a 3D window, blocking until it is closed
    draw_triangles(&triangles)?;
    Ok(())
}
