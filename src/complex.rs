use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::traits::FloatScalar;

/// Complex number `re + im·i`.
///
/// Immutable value type: every operation returns a new value. Generic over
/// the component width, so [`Complex64`] and [`Complex32`] share one
/// implementation.
///
/// # Examples
///
/// ```
/// use cayley::Complex64;
///
/// let a = Complex64::new(3.0, 4.0);
/// let b = Complex64::new(1.0, -2.0);
/// let sum = a + b;
/// assert_eq!(sum, Complex64::new(4.0, 2.0));
/// assert_eq!(a.norm(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

/// Double-precision complex number.
pub type Complex64 = Complex<f64>;

/// Single-precision complex number.
pub type Complex32 = Complex<f32>;

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> Complex<T> {
    /// Create a complex number from real and imaginary parts.
    #[inline]
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Purely imaginary number `0 + im·i`.
    #[inline]
    pub fn from_imaginary(im: T) -> Self {
        Self { re: T::zero(), im }
    }

    /// The imaginary unit `i`.
    #[inline]
    pub fn i() -> Self {
        Self {
            re: T::zero(),
            im: T::one(),
        }
    }
}

impl<T: FloatScalar> Default for Complex<T> {
    /// Zero complex number `0 + 0i`.
    fn default() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }
}

// Promote a real value
impl<T: FloatScalar> From<T> for Complex<T> {
    #[inline]
    fn from(re: T) -> Self {
        Self { re, im: T::zero() }
    }
}

// Lossy precision conversions between the two widths
impl From<Complex<f32>> for Complex<f64> {
    #[inline]
    fn from(c: Complex<f32>) -> Self {
        Self {
            re: c.re as f64,
            im: c.im as f64,
        }
    }
}

impl From<Complex<f64>> for Complex<f32> {
    #[inline]
    fn from(c: Complex<f64>) -> Self {
        Self {
            re: c.re as f32,
            im: c.im as f32,
        }
    }
}

// ── Magnitude and argument ───────────────────────────────────────────

impl<T: FloatScalar> Complex<T> {
    /// Squared magnitude: `re² + im²`.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// Magnitude (modulus): `√(re² + im²)`.
    ///
    /// ```
    /// use cayley::Complex64;
    /// let z = Complex64::new(3.0, 4.0);
    /// assert_eq!(z.norm(), 5.0);
    /// ```
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Argument (angle relative to the positive real axis), in radians.
    ///
    /// Computed as `atan2(im, re)`, so the result lies in `(-π, π]`.
    #[inline]
    pub fn arg(&self) -> T {
        self.im.atan2(self.re)
    }

    /// Conjugate: `re - im·i`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            re: self.re,
            im: T::zero() - self.im,
        }
    }

    /// Projection onto the real axis: `re + 0i`.
    #[inline]
    pub fn project_real(&self) -> Self {
        Self {
            re: self.re,
            im: T::zero(),
        }
    }

    /// Projection onto the imaginary axis: `0 + im·i`.
    #[inline]
    pub fn project_imaginary(&self) -> Self {
        Self {
            re: T::zero(),
            im: self.im,
        }
    }
}

// ── Analytic functions ───────────────────────────────────────────────

impl<T: FloatScalar> Complex<T> {
    /// Raise to a real power via polar form: `|z|^p · e^(i·p·arg z)`.
    ///
    /// ```
    /// use cayley::Complex64;
    /// let z = Complex64::new(0.0, 1.0); // i
    /// let w = z.powf(2.0);              // i² = -1
    /// assert!(w.approx_eq(&Complex64::new(-1.0, 0.0), 1e-12));
    /// ```
    pub fn powf(&self, p: T) -> Self {
        let m = self.norm().powf(p);
        let phi = self.arg() * p;
        Self {
            re: m * phi.cos(),
            im: m * phi.sin(),
        }
    }

    /// Raise to a complex power: `e^(w · ln z)`.
    pub fn powc(&self, w: Self) -> Self {
        (self.ln() * w).exp()
    }

    /// Principal `n`-th root: `|z|^(1/n) · e^(i·arg z / n)`.
    ///
    /// `root(2.0)` is the principal square root.
    pub fn root(&self, n: T) -> Self {
        let m = self.norm().powf(T::one() / n);
        let phi = self.arg() / n;
        Self {
            re: m * phi.cos(),
            im: m * phi.sin(),
        }
    }

    /// Exponential, by Euler's formula: `e^re · (cos im + i sin im)`.
    pub fn exp(&self) -> Self {
        let m = self.re.exp();
        Self {
            re: m * self.im.cos(),
            im: m * self.im.sin(),
        }
    }

    /// Principal natural logarithm: `(ln |z|, arg z)`.
    ///
    /// The logarithm of zero is the sentinel `(-∞, 0)`; no error is raised.
    pub fn ln(&self) -> Self {
        Self {
            re: self.norm().ln(),
            im: self.arg(),
        }
    }

    /// Sine: `sin re · cosh im + i · cos re · sinh im`.
    pub fn sin(&self) -> Self {
        Self {
            re: self.re.sin() * self.im.cosh(),
            im: self.re.cos() * self.im.sinh(),
        }
    }

    /// Cosine: `cos re · cosh im - i · sin re · sinh im`.
    pub fn cos(&self) -> Self {
        Self {
            re: self.re.cos() * self.im.cosh(),
            im: T::zero() - self.re.sin() * self.im.sinh(),
        }
    }

    /// Tangent: `sin z / cos z`.
    pub fn tan(&self) -> Self {
        self.sin() / self.cos()
    }

    /// Hyperbolic sine: `sinh re · cos im + i · cosh re · sin im`.
    pub fn sinh(&self) -> Self {
        Self {
            re: self.re.sinh() * self.im.cos(),
            im: self.re.cosh() * self.im.sin(),
        }
    }

    /// Hyperbolic cosine: `cosh re · cos im + i · sinh re · sin im`.
    pub fn cosh(&self) -> Self {
        Self {
            re: self.re.cosh() * self.im.cos(),
            im: self.re.sinh() * self.im.sin(),
        }
    }

    /// Hyperbolic tangent: `sinh z / cosh z`.
    pub fn tanh(&self) -> Self {
        self.sinh() / self.cosh()
    }
}

// ── Predicates ───────────────────────────────────────────────────────

impl<T: FloatScalar> Complex<T> {
    /// Component-wise approximate equality within `epsilon`.
    ///
    /// ```
    /// use cayley::Complex64;
    /// let a = Complex64::new(1.0, 2.0);
    /// let b = Complex64::new(1.0 + 1e-9, 2.0);
    /// assert!(a.approx_eq(&b, 1e-6));
    /// assert!(!a.approx_eq(&b, 1e-12));
    /// ```
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        (self.re - other.re).abs() < epsilon && (self.im - other.im).abs() < epsilon
    }

    /// Whether both components are exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.re == T::zero() && self.im == T::zero()
    }

    /// Whether the magnitude is 1 within a few machine epsilons.
    ///
    /// The tolerance admits values produced by normalization, whose norm
    /// lands within a few ulps of 1.
    #[inline]
    pub fn is_unit(&self) -> bool {
        let tol = T::epsilon() * T::from(8.0).unwrap();
        (self.norm() - T::one()).abs() < tol
    }
}

// ── Operators ────────────────────────────────────────────────────────

impl<T: FloatScalar> Add for Complex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl<T: FloatScalar> Add<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self {
        Self {
            re: self.re + rhs,
            im: self.im,
        }
    }
}

impl<T: FloatScalar> Sub for Complex<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl<T: FloatScalar> Sub<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self {
        Self {
            re: self.re - rhs,
            im: self.im,
        }
    }
}

impl<T: FloatScalar> Mul for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl<T: FloatScalar> Mul<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self {
            re: self.re * rhs,
            im: self.im * rhs,
        }
    }
}

// Division by zero produces IEEE infinity/NaN components, never a panic.
impl<T: FloatScalar> Div for Complex<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        let d = rhs.norm_squared();
        Self {
            re: (self.re * rhs.re + self.im * rhs.im) / d,
            im: (self.im * rhs.re - self.re * rhs.im) / d,
        }
    }
}

impl<T: FloatScalar> Div<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self {
            re: self.re / rhs,
            im: self.im / rhs,
        }
    }
}

impl<T: FloatScalar> Neg for Complex<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: T::zero() - self.re,
            im: T::zero() - self.im,
        }
    }
}

// ── Display ──────────────────────────────────────────────────────────

/// Round to 5 decimal places for display.
///
/// `-0.0` compares equal to zero afterwards, so negative zero collapses
/// like zero at the call sites.
pub(crate) fn round5<T: FloatScalar>(v: T) -> T {
    let scale = T::from(1e5).unwrap();
    (v * scale).round() / scale
}

impl<T: FloatScalar + fmt::Display> fmt::Display for Complex<T> {
    /// Canonical notation rounded to 5 decimals, collapsing exact-zero
    /// terms: `0`, `a`, `bi`, or `(a ± bi)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let re = round5(self.re);
        let im = round5(self.im);
        let zero = T::zero();

        if re == zero && im == zero {
            write!(f, "0")
        } else if im == zero {
            write!(f, "{}", re)
        } else if re == zero {
            write!(f, "{}i", im)
        } else if im < zero {
            write!(f, "({} - {}i)", re, zero - im)
        } else {
            write!(f, "({} + {}i)", re, im)
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
