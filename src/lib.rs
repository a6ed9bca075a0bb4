//! # cayley
//!
//! Small pure-Rust library of hypercomplex and matrix value types, no-std
//! compatible. Provides immutable complex numbers and quaternions with full
//! analytic operations (power, root, exponential, logarithm, trigonometric
//! and hyperbolic functions), and a dense heap-backed matrix with basic
//! linear-algebra predicates.
//!
//! ## Quick start
//!
//! ```
//! use cayley::{Complex64, Quaternion};
//!
//! let a = Complex64::new(3.0, 4.0);       // 3 + 4i
//! let b = Complex64::new(1.0, -2.0);      // 1 - 2i
//! assert_eq!(a + b, Complex64::new(4.0, 2.0));
//! assert_eq!(a.norm(), 5.0);
//!
//! // Hamilton product is non-commutative
//! let p = Quaternion::new(1.0, 2.0, 3.0, 4.0);
//! let q = Quaternion::new(5.0, 6.0, 7.0, 8.0);
//! assert_ne!(p * q, q * p);
//! ```
//!
//! ## Modules
//!
//! - [`complex`] — `Complex<T>` with the field operations as operator
//!   impls and the analytic functions in polar form. [`Complex64`] and
//!   [`Complex32`] are the double and single precision aliases.
//!
//! - [`quaternion`] — `Quaternion<T>` with the Hamilton product,
//!   conjugation, inversion, and polar-form `exp`/`ln`/`powf`/`root`
//!   generalizing the complex case along the vector-part direction.
//!
//! - [`matrix`] — `Matrix<T>`, a dense row-major matrix with runtime
//!   dimensions, bounds-checked indexing, sub-matrix extraction, and the
//!   `is_zero`/`is_identity` epsilon predicates. Requires the `alloc`
//!   feature (included with `std`).
//!
//! - [`traits`] — element trait seam: [`Scalar`](traits::Scalar) for
//!   matrix elements, [`FloatScalar`](traits::FloatScalar) for the
//!   analytic types, blanket-implemented for `f32` and `f64`.
//!
//! ## Error handling
//!
//! Arithmetic never panics or errors: division by zero and logarithms of
//! zero produce IEEE infinity sentinels. Fallible construction and
//! invalid-argument cases (`Matrix::new`, `Quaternion::root`) return
//! `Result` with small descriptive error types; out-of-bounds indexing
//! panics with a descriptive message like any Rust indexing.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc` | via std  | Heap-backed `Matrix` type |
//! | `libm`  | no       | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod complex;
#[cfg(feature = "alloc")]
pub mod matrix;
pub mod quaternion;
pub mod traits;

pub use complex::{Complex, Complex32, Complex64};
#[cfg(feature = "alloc")]
pub use matrix::{Matrix, MatrixError};
pub use quaternion::{InvalidRootOrder, Quaternion};
