use anyhow::Result;
use numlab::spectral::eigen::{dominant_eigenpair, rayleigh_quotient};
use numlab::spectral::laplacian::second_difference;

const N: usize = 100;

fn main() -> Result<()> {
    let m = second_difference(N);

    let (value, vector) = dominant_eigenpair(&m)?;
    let rayleigh = rayleigh_quotient(&m, &vector);

    println!("Max eigenvalue: {value}");
    println!("Rayleigh quotient: {rayleigh}");
    println!("Eigenvector: {}", vector.transpose());
    Ok(())
}
