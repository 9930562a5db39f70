#![allow(dead_code)]

use nalgebra::SVector;

pub const EPSILON: f32 = 1e-4;

pub fn near(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
}

#[track_caller]
pub fn assert_near(a: f32, b: f32) {
    assert!(near(a, b), "{a} ≉ {b}");
}

pub fn vec_near<const D: usize>(a: &SVector<f32, D>, b: &SVector<f32, D>) -> bool {
    a.iter().zip(b.iter()).all(|(&a, &b)| near(a, b))
}

#[track_caller]
pub fn assert_vec_near<const D: usize>(a: &SVector<f32, D>, b: &SVector<f32, D>) {
    assert!(vec_near(a, b), "{a:?} ≉ {b:?}");
}

/// Map an arbitrary byte to a dimension in 0.25..=10.
pub fn dim(n: u8) -> f32 {
    0.25 + (n % 40) as f32 / 4.0
}

/// Map an arbitrary byte to a subdivision count in 1..=24.
pub fn subdiv(n: u8) -> u32 {
    1 + (n % 24) as u32
}
