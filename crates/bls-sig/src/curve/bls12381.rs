use crate::group::{Element, PairingCurve as PC, Point, Scalar as Sc};
use ff::{Field, PrimeField};
use groupy::CurveProjective;
use paired::bls12_381::{Bls12, Fq12, Fr, FrRepr, G1 as PG1, G2 as PG2};
use paired::Engine;
use rand_core::RngCore;
use std::result::Result;

pub type Scalar = Fr;
pub type G1 = PG1;
pub type G2 = PG2;
pub type GT = Fq12;

impl Element for Scalar {
    type RHS = Fr;

    fn new() -> Self {
        ff::Field::zero()
    }

    fn one() -> Self {
        ff::Field::one()
    }
    fn add(&mut self, s2: &Self) {
        self.add_assign(s2);
    }
    fn mul(&mut self, mul: &Fr) {
        self.mul_assign(mul)
    }
    fn rand<R: RngCore>(rng: &mut R) -> Self {
        Fr::random(rng)
    }
}

/// Implementation of Scalar using field elements used in BLS12-381
impl Sc for Scalar {
    fn set_int(&mut self, i: u64) {
        // every u64 is below the field modulus
        if let Ok(s) = Fr::from_repr(FrRepr::from(i)) {
            *self = s;
        }
    }
}

/// G1 points can be multiplied by Fr elements
impl Element for G1 {
    type RHS = Scalar;

    fn new() -> Self {
        groupy::CurveProjective::zero()
    }

    fn one() -> Self {
        groupy::CurveProjective::one()
    }

    fn rand<R: RngCore>(rng: &mut R) -> Self {
        G1::random(rng)
    }

    fn add(&mut self, s2: &Self) {
        self.add_assign(s2);
    }

    fn mul(&mut self, mul: &Scalar) {
        self.mul_assign(FrRepr::from(*mul))
    }
}

impl Element for G2 {
    type RHS = Scalar;

    fn new() -> Self {
        groupy::CurveProjective::zero()
    }

    fn one() -> Self {
        groupy::CurveProjective::one()
    }

    fn rand<R: RngCore>(rng: &mut R) -> Self {
        G2::random(rng)
    }

    fn add(&mut self, s2: &Self) {
        self.add_assign(s2);
    }

    fn mul(&mut self, mul: &Scalar) {
        self.mul_assign(FrRepr::from(*mul))
    }
}

/// Implementation of Point using G1 from BLS12-381
impl Point for G1 {
    type Error = ();

    fn map(&mut self, data: &[u8]) -> Result<(), ()> {
        *self = G1::hash(data);
        Ok(())
    }
}

impl Element for GT {
    type RHS = GT;

    fn new() -> Self {
        ff::Field::zero()
    }

    fn one() -> Self {
        ff::Field::one()
    }
    fn add(&mut self, s2: &Self) {
        self.add_assign(s2);
    }
    fn mul(&mut self, mul: &GT) {
        self.mul_assign(mul)
    }

    fn rand<R: RngCore>(rng: &mut R) -> Self {
        ff::Field::random(rng)
    }
}

#[derive(Clone, Debug)]
pub struct PairingCurve;

impl PC for PairingCurve {
    const NAME: &'static str = "bls12_381";
    const ORDER_BITS: usize = 255;
    const BASE_FIELD_BITS: usize = 381;
    const EMBEDDING_DEGREE: usize = 12;

    type Scalar = Scalar;
    type G1 = G1;
    type G2 = G2;
    type GT = Fq12;

    fn pair(a: &Self::G1, b: &Self::G2) -> Self::GT {
        Bls12::pairing(a.into_affine(), b.into_affine())
    }
}
