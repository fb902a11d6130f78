use anyhow::Result;
use numlab::io::csv::write_triangles;
use numlab::sphere_mesh;
use std::path::Path;

const RESOLUTION: usize = 10;
const OUTPUT: &str = "sphere.csv";

fn main() -> Result<()> {
    let triangles = sphere_mesh(RESOLUTION);
    write_triangles(Path::new(OUTPUT), &triangles)?;
    println!("Wrote {} triangles to {}", triangles.len(), OUTPUT);
    Ok(())
}
