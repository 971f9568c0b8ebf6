mod bls;
pub use bls::{BLSError, G2Scheme, Verification};

#[allow(clippy::module_inception)]
mod sig;
pub use sig::*;
