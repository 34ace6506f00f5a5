//! Walks the full densemat surface: construction, arithmetic, operator
//! aliases, identity, clone, transpose, iteration, and every error case.
//!
//! Run with `RUST_LOG=info cargo run --example matrix_tour` to see the
//! narration alongside the printed matrices.

use anyhow::Result;
use densemat::Matrix;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let m1 = Matrix::from_elem(3, 4, 10i64)?;
    let m2 = Matrix::from_elem(3, 4, 20)?;
    let m3 = Matrix::from_elem(4, 5, 30)?;
    let m4 = Matrix::from_elem(3, 5, 40)?;

    info!("constructed sample matrices: 3x4, 3x4, 4x5, 3x5");
    println!("m1:\n{}", m1);
    println!("m2:\n{}", m2);
    println!("m3:\n{}", m3);
    println!("m4:\n{}", m4);

    println!("m1.add(m2):\n{}", m1.add(&m2)?);
    println!("m1.subtract(m2):\n{}", m1.subtract(&m2)?);
    println!("m1.dot(m3):\n{}", m1.dot(&m3)?);
    println!("m2.scalar_mul(5):\n{}", m2.scalar_mul(5));
    println!("identity(5):\n{}", Matrix::<i64>::identity(5)?);

    info!("operator aliases and chained expressions");
    println!("&m1 + &m2:\n{}", &m1 + &m2);
    println!("&m2 - &m1:\n{}", &m2 - &m1);
    println!("&m1 * &m3:\n{}", &m1 * &m3);
    println!("&(&m1 + &m2) - &m1:\n{}", &(&m1 + &m2) - &m1);
    println!("&m4 + &(&m2 * &m3):\n{}", &m4 + &(&m2 * &m3));

    println!("m1.clone():\n{}", m1.clone());
    println!("m1.transpose():\n{}", m1.transpose());

    println!("m1 == m2? {}", m1 == m2);
    println!("m1 == m4? {}", m1 == m4);
    println!("m1 == m1.clone()? {}", m1 == m1.clone());

    info!("row-major (row, col, value) iteration over m1");
    for (row, col, value) in m1.indexed_iter() {
        println!("({}, {}, {})", row, col, value);
    }

    info!("provoking each error case");
    if let Err(e) = m1.get(4, 4) {
        println!("get failed: {}", e);
    }
    let mut scratch = m1.clone();
    if let Err(e) = scratch.set(4, 5, 10) {
        println!("set failed: {}", e);
    }
    if let Err(e) = m1.add(&m3) {
        println!("add failed: {}", e);
    }
    if let Err(e) = m2.subtract(&m3) {
        println!("subtract failed: {}", e);
    }
    if let Err(e) = m1.dot(&m2) {
        println!("dot failed: {}", e);
    }
    if let Err(e) = Matrix::<i64>::from_elem(0, 4, 1) {
        println!("construction failed: {}", e);
    }

    Ok(())
}
