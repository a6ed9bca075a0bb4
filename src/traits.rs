use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for the component type of the analytic value types.
///
/// [`Complex`](crate::Complex) and [`Quaternion`](crate::Quaternion) are
/// generic over this trait, so the double and single precision variants
/// share one implementation. Also required by the epsilon-tolerant matrix
/// predicates (`is_zero`, `is_identity`).
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}
