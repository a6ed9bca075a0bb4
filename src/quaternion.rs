use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::complex::round5;
use crate::traits::FloatScalar;
use crate::Complex;

/// Quaternion `r + i·i + j·j + k·k`.
///
/// Immutable hypercomplex value with scalar part `r` and vector part
/// `(i, j, k)`. Multiplication is the Hamilton product and is
/// non-commutative. The analytic operations (`exp`, `ln`, `powf`, `root`)
/// generalize the complex polar form using the vector norm as the
/// imaginary-axis direction.
///
/// # Examples
///
/// ```
/// use cayley::Quaternion;
///
/// let a = Quaternion::new(3.0, 4.0, 7.0, 1.0);
/// let b = Quaternion::new(1.0, -2.0, 9.2, -6.0);
/// let sum = a + b;
/// assert_eq!(sum, Quaternion::new(4.0, 2.0, 16.2, -5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T> {
    pub r: T,
    pub i: T,
    pub j: T,
    pub k: T,
}

/// Root order passed to [`Quaternion::root`] was zero or negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidRootOrder<T> {
    /// The offending order.
    pub order: T,
}

impl<T: fmt::Display> fmt::Display for InvalidRootOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root order must be positive, got {}", self.order)
    }
}

#[cfg(feature = "std")]
impl<T: fmt::Display + fmt::Debug> std::error::Error for InvalidRootOrder<T> {}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Create a quaternion from components.
    #[inline]
    pub fn new(r: T, i: T, j: T, k: T) -> Self {
        Self { r, i, j, k }
    }

    /// Quaternion with complex part `c` and the given `j`, `k` components.
    #[inline]
    pub fn from_complex(c: Complex<T>, j: T, k: T) -> Self {
        Self {
            r: c.re,
            i: c.im,
            j,
            k,
        }
    }
}

impl<T: FloatScalar> Default for Quaternion<T> {
    /// Zero quaternion.
    fn default() -> Self {
        Self {
            r: T::zero(),
            i: T::zero(),
            j: T::zero(),
            k: T::zero(),
        }
    }
}

// Promote a real value
impl<T: FloatScalar> From<T> for Quaternion<T> {
    #[inline]
    fn from(r: T) -> Self {
        Self {
            r,
            i: T::zero(),
            j: T::zero(),
            k: T::zero(),
        }
    }
}

// Embed a complex number in the (1, i) plane
impl<T: FloatScalar> From<Complex<T>> for Quaternion<T> {
    #[inline]
    fn from(c: Complex<T>) -> Self {
        Self::from_complex(c, T::zero(), T::zero())
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Conjugate: `(r, -i, -j, -k)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            r: self.r,
            i: T::zero() - self.i,
            j: T::zero() - self.j,
            k: T::zero() - self.k,
        }
    }

    /// Squared norm: `r² + i² + j² + k²`.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.r * self.r + self.i * self.i + self.j * self.j + self.k * self.k
    }

    /// Norm (length in 4D space).
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Versor: the unit quaternion in the same direction.
    ///
    /// ```
    /// use cayley::Quaternion;
    /// let q = Quaternion::new(1.0_f64, 2.0, 3.0, 4.0);
    /// assert!((q.versor().norm() - 1.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn versor(&self) -> Self {
        *self / self.norm()
    }

    /// Multiplicative inverse: `conjugate / norm²`.
    ///
    /// For unit quaternions this equals the conjugate.
    #[inline]
    pub fn inverse(&self) -> Self {
        let inv_n2 = T::one() / self.norm_squared();
        Self {
            r: self.r * inv_n2,
            i: (T::zero() - self.i) * inv_n2,
            j: (T::zero() - self.j) * inv_n2,
            k: (T::zero() - self.k) * inv_n2,
        }
    }

    /// Dot product of two quaternions.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.r * rhs.r + self.i * rhs.i + self.j * rhs.j + self.k * rhs.k
    }

    /// Euclidean distance to another quaternion in 4D space.
    #[inline]
    pub fn distance(&self, rhs: &Self) -> T {
        (*self - *rhs).norm()
    }

    /// Norm of the vector part `(i, j, k)`.
    #[inline]
    fn vector_norm(&self) -> T {
        (self.i * self.i + self.j * self.j + self.k * self.k).sqrt()
    }
}

// ── Analytic functions ───────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Exponential: `e^r · (cos |v| + (v/|v|) sin |v|)` where `v` is the
    /// vector part.
    ///
    /// A zero vector part reduces to the real exponential `e^r`.
    pub fn exp(&self) -> Self {
        let vn = self.vector_norm();
        let er = self.r.exp();

        if vn < T::epsilon() {
            return Self {
                r: er,
                i: T::zero(),
                j: T::zero(),
                k: T::zero(),
            };
        }

        let s = er * vn.sin() / vn;
        Self {
            r: er * vn.cos(),
            i: s * self.i,
            j: s * self.j,
            k: s * self.k,
        }
    }

    /// Principal natural logarithm: `(ln |q|, (v/|v|) · acos(r/|q|))`.
    ///
    /// The logarithm of the zero quaternion is the sentinel
    /// `(-∞, 0, 0, 0)`, consistent with the complex `ln(0)`; no error is
    /// raised. A zero vector part reduces to the real logarithm `ln |q|`.
    pub fn ln(&self) -> Self {
        if self.is_zero() {
            return Self {
                r: T::neg_infinity(),
                i: T::zero(),
                j: T::zero(),
                k: T::zero(),
            };
        }

        let n = self.norm();
        let vn = self.vector_norm();
        if vn < T::epsilon() {
            return Self {
                r: n.ln(),
                i: T::zero(),
                j: T::zero(),
                k: T::zero(),
            };
        }

        let coeff = (self.r / n).acos() / vn;
        Self {
            r: n.ln(),
            i: coeff * self.i,
            j: coeff * self.j,
            k: coeff * self.k,
        }
    }

    /// Raise to a real power via polar form:
    /// `|q|^s · (cos sθ + (v/|v|) sin sθ)` with `θ = acos(r/|q|)`.
    ///
    /// A zero vector part reduces to the scalar-only result.
    pub fn powf(&self, s: T) -> Self {
        let n = self.norm();
        let theta = (self.r / n).acos();
        let np = n.powf(s);
        let angle = s * theta;

        let vn = self.vector_norm();
        if vn < T::epsilon() {
            return Self {
                r: np * angle.cos(),
                i: T::zero(),
                j: T::zero(),
                k: T::zero(),
            };
        }

        let coeff = np * angle.sin() / vn;
        Self {
            r: np * angle.cos(),
            i: coeff * self.i,
            j: coeff * self.j,
            k: coeff * self.k,
        }
    }

    /// Raise to a quaternion power: `e^(ln q · w)`.
    pub fn powq(&self, w: Self) -> Self {
        (self.ln() * w).exp()
    }

    /// Principal `n`-th root.
    ///
    /// Fails when `n` is zero or negative.
    ///
    /// ```
    /// use cayley::Quaternion;
    /// let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    /// let r = q.root(3.0).unwrap();
    /// assert!(r.powf(3.0).approx_eq(&q, 1e-9));
    ///
    /// assert!(q.root(-1.0).is_err());
    /// ```
    pub fn root(&self, n: T) -> Result<Self, InvalidRootOrder<T>> {
        if n <= T::zero() {
            return Err(InvalidRootOrder { order: n });
        }
        Ok(self.powf(T::one() / n))
    }
}

// ── Predicates ───────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Component-wise approximate equality within `epsilon`.
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.i - other.i).abs() < epsilon
            && (self.j - other.j).abs() < epsilon
            && (self.k - other.k).abs() < epsilon
    }

    /// Whether all components are exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.r == T::zero()
            && self.i == T::zero()
            && self.j == T::zero()
            && self.k == T::zero()
    }

    /// Whether the norm is 1 within a few machine epsilons (versor test).
    ///
    /// The tolerance admits the output of [`versor`](Self::versor), whose
    /// norm lands within a few ulps of 1.
    #[inline]
    pub fn is_unit(&self) -> bool {
        let tol = T::epsilon() * T::from(8.0).unwrap();
        (self.norm() - T::one()).abs() < tol
    }
}

// ── Operators ────────────────────────────────────────────────────────

impl<T: FloatScalar> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            r: self.r + rhs.r,
            i: self.i + rhs.i,
            j: self.j + rhs.j,
            k: self.k + rhs.k,
        }
    }
}

impl<T: FloatScalar> Add<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self {
        Self {
            r: self.r + rhs,
            ..self
        }
    }
}

impl<T: FloatScalar> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            r: self.r - rhs.r,
            i: self.i - rhs.i,
            j: self.j - rhs.j,
            k: self.k - rhs.k,
        }
    }
}

impl<T: FloatScalar> Sub<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self {
        Self {
            r: self.r - rhs,
            ..self
        }
    }
}

// Hamilton product: q1 * q2
impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            r: self.r * rhs.r - self.i * rhs.i - self.j * rhs.j - self.k * rhs.k,
            i: self.r * rhs.i + self.i * rhs.r + self.j * rhs.k - self.k * rhs.j,
            j: self.r * rhs.j - self.i * rhs.k + self.j * rhs.r + self.k * rhs.i,
            k: self.r * rhs.k + self.i * rhs.j - self.j * rhs.i + self.k * rhs.r,
        }
    }
}

// Reference variants for the Hamilton product
impl<T: FloatScalar> Mul<Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: Quaternion<T>) -> Quaternion<T> {
        (*self).mul(rhs)
    }
}

impl<T: FloatScalar> Mul<&Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        self.mul(*rhs)
    }
}

impl<T: FloatScalar> Mul<&Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        (*self).mul(*rhs)
    }
}

impl<T: FloatScalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self {
            r: self.r * rhs,
            i: self.i * rhs,
            j: self.j * rhs,
            k: self.k * rhs,
        }
    }
}

// Right division: q / p = q · p⁻¹. Division by the zero quaternion yields
// IEEE non-finite components, never a panic.
impl<T: FloatScalar> Div for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl<T: FloatScalar> Div<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self {
            r: self.r / rhs,
            i: self.i / rhs,
            j: self.j / rhs,
            k: self.k / rhs,
        }
    }
}

impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            r: T::zero() - self.r,
            i: T::zero() - self.i,
            j: T::zero() - self.j,
            k: T::zero() - self.k,
        }
    }
}

// ── Display ──────────────────────────────────────────────────────────

impl<T: FloatScalar + fmt::Display> fmt::Display for Quaternion<T> {
    /// Canonical notation rounded to 5 decimals, collapsing exact-zero
    /// terms, e.g. `(1 + 2i + 3j + 4k)`, `(2i - 4k)`, `0`. A single
    /// surviving term prints bare (`3`, `-2.5i`), like the complex form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zero = T::zero();
        let parts = [
            (round5(self.r), ""),
            (round5(self.i), "i"),
            (round5(self.j), "j"),
            (round5(self.k), "k"),
        ];

        let live = parts.iter().filter(|&&(v, _)| v != zero).count();
        if live == 0 {
            return write!(f, "0");
        }

        if live > 1 {
            write!(f, "(")?;
        }
        let mut first = true;
        for &(v, suffix) in &parts {
            if v == zero {
                continue;
            }
            if first {
                write!(f, "{}{}", v, suffix)?;
                first = false;
            } else if v < zero {
                write!(f, " - {}{}", zero - v, suffix)?;
            } else {
                write!(f, " + {}{}", v, suffix)?;
            }
        }
        if live > 1 {
            write!(f, ")")?;
        }
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────
