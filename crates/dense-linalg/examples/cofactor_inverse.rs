//! Invert a small matrix through its adjoint and check the result.
//!
//! Run with `DENSE_LINALG_LOG=debug` to see the logged intermediate matrices.
use anyhow::Result;
use log::{Level, LevelFilter};

use dense_linalg::prelude::*;
use dense_linalg::utils::logging::log_matrix;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DENSE_LINALG_LOG", "info"))
        .init();

    let options = FormatOptions::new(3, Notation::Fixed);
    let m = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![0.0, 4.0, 5.0],
        vec![1.0, 0.0, 6.0],
    ])?;

    log::info!("det(M) = {}", m.determinant()?);
    log_matrix(Level::Debug, "cofactors", &m.cofactor_matrix()?, &options);
    log_matrix(Level::Debug, "adjoint", &m.adjoint()?, &options);

    let inverse = m.inverse()?;
    println!("M^-1 =\n{}", inverse.display_with(&options));
    println!("M * M^-1 =\n{}", m.matmul(&inverse)?.display_with(&options));

    let singular = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]])?;
    if let Err(err) = singular.inverse() {
        log::warn!("{}", err);
    }

    let a = Vector3D::new(1.0, 2.0, 3.0);
    let b = Vector3D::new(4.0, 5.0, 6.0);
    println!("a x b = {}", a.cross(&b));
    println!("a . (b x a) = {}", Vector3D::triple_product(&a, &b, &a));

    Ok(())
}
