#[cfg(feature = "bls12_381")]
pub mod bls12381;
