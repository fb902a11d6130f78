//! Delimited triangle tables.
//!
//! Each row stores one triangle as nine comma-separated coordinates, three
//! vertices in row-major order. Extra columns are ignored on input so that
//! tables carrying additional per-triangle data still load.

use crate::Triangle;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Reads triangles from a delimited text table.
///
/// One triangle per non-blank row; the first nine numeric fields become the
/// three vertices. Row order defines the triangle order. A missing file,
/// a row with fewer than nine fields or a non-numeric field is an error.
pub fn read_triangles(path: &Path) -> Result<Vec<Triangle>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut triangles: Vec<Triangle> = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let values =
            parse_row(trimmed).with_context(|| format!("Row {} in {}", i + 1, path.display()))?;
        let tri = Triangle::from_row(&values)
            .with_context(|| format!("Row {} in {}", i + 1, path.display()))?;
        triangles.push(tri);
    }

    Ok(triangles)
}

/// Writes one row per triangle, nine comma-separated coordinates.
///
/// The output is accepted by [`read_triangles`].
pub fn write_triangles(path: &Path, triangles: &[Triangle]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for tri in triangles {
        let [p0, p1, p2] = tri.vertices();
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{}",
            p0.x, p0.y, p0.z, p1.x, p1.y, p1.z, p2.x, p2.y, p2.z
        )?;
    }

    Ok(())
}

/// Parses one comma-delimited row into numbers.
///
/// Empty trailing fields are dropped since some generators end every row
/// with a delimiter.
fn parse_row(line: &str) -> Result<Vec<f64>> {
    let mut fields: Vec<&str> = line.split(',').map(str::trim).collect();
    while fields.last() == Some(&"") {
        fields.pop();
    }
    fields
        .iter()
        .map(|f| {
            f.parse::<f64>()
                .with_context(|| format!("Invalid numeric field: {f:?}"))
        })
        .collect()
}
