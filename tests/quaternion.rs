use cayley::{Complex64, Quaternion};

const TOL: f64 = 1e-9;

fn q(r: f64, i: f64, j: f64, k: f64) -> Quaternion<f64> {
    Quaternion::new(r, i, j, k)
}

fn samples() -> [Quaternion<f64>; 5] {
    [
        q(3.0, 4.0, 7.0, 1.0),
        q(1.0, -2.0, 9.2, -6.0),
        q(-0.5, 0.25, 0.0, 1.5),
        q(2.0, 0.0, 0.0, 0.0),
        q(0.0, 1.0, 1.0, 1.0),
    ]
}

// ── Ring structure ───────────────────────────────────────────────────

#[test]
fn add_sub_roundtrip() {
    for a in samples() {
        for b in samples() {
            assert!(((a + b) - b).approx_eq(&a, TOL));
        }
    }
}

#[test]
fn mul_div_roundtrip() {
    for a in samples() {
        for b in samples() {
            if b.is_zero() {
                continue;
            }
            assert!(((a * b) / b).approx_eq(&a, 1e-8));
        }
    }
}

#[test]
fn mul_is_associative() {
    let a = q(3.0, 4.0, 7.0, 1.0);
    let b = q(1.0, -2.0, 9.2, -6.0);
    let c = q(-0.5, 0.25, 0.0, 1.5);
    assert!(((a * b) * c).approx_eq(&(a * (b * c)), 1e-8));
}

#[test]
fn mul_has_non_commutative_witness() {
    let a = q(0.0, 1.0, 0.0, 0.0);
    let b = q(0.0, 0.0, 1.0, 0.0);
    assert_ne!(a * b, b * a);
    assert_eq!(a * b, -(b * a));
}

#[test]
fn norm_is_multiplicative() {
    for a in samples() {
        for b in samples() {
            let lhs = (a * b).norm();
            let rhs = a.norm() * b.norm();
            assert!((lhs - rhs).abs() < 1e-8);
        }
    }
}

// ── Conjugation, inverse, versor ─────────────────────────────────────

#[test]
fn conjugate_twice_is_identity() {
    for a in samples() {
        assert_eq!(a.conjugate().conjugate(), a);
    }
}

#[test]
fn conjugate_reverses_products() {
    // (pq)* = q* p*
    let a = q(3.0, 4.0, 7.0, 1.0);
    let b = q(1.0, -2.0, 9.2, -6.0);
    assert!((a * b).conjugate().approx_eq(&(b.conjugate() * a.conjugate()), TOL));
}

#[test]
fn norm_squares_to_norm_squared() {
    for a in samples() {
        assert!((a.norm() * a.norm() - a.norm_squared()).abs() < TOL);
    }
}

#[test]
fn inverse_and_versor() {
    let identity = q(1.0, 0.0, 0.0, 0.0);
    for a in samples() {
        if a.is_zero() {
            continue;
        }
        assert!((a * a.inverse()).approx_eq(&identity, TOL));
        assert!(a.versor().is_unit());
    }
}

// ── Polar-form operations ────────────────────────────────────────────

#[test]
fn pow_of_root_roundtrip() {
    for a in samples() {
        if a.is_zero() {
            continue;
        }
        for n in [2.0, 3.0, 4.0] {
            let r = a.root(n).unwrap();
            assert!(r.powf(n).approx_eq(&a, 1e-8), "root {} of ({})", n, a);
        }
    }
}

#[test]
fn root_of_non_positive_order_errors() {
    for a in samples() {
        assert!(a.root(0.0).is_err());
        assert!(a.root(-3.0).is_err());
    }
}

#[test]
fn ln_of_zero_is_sentinel_not_error() {
    let z = Quaternion::<f64>::default().ln();
    assert_eq!(z.r, f64::NEG_INFINITY);
    assert_eq!((z.i, z.j, z.k), (0.0, 0.0, 0.0));
}

// ── Complex embedding ────────────────────────────────────────────────

#[test]
fn complex_embedding_preserves_arithmetic() {
    let x = Complex64::new(2.0, 3.0);
    let y = Complex64::new(-1.5, 0.5);

    let qx = Quaternion::from(x);
    let qy = Quaternion::from(y);

    assert_eq!(Quaternion::from(x + y), qx + qy);
    assert_eq!(Quaternion::from(x * y), qx * qy);
    assert!(Quaternion::from(x / y).approx_eq(&(qx / qy), TOL));
}

#[test]
fn display_matches_complex_notation_on_the_plane() {
    let z = Complex64::new(2.0, 3.0);
    assert_eq!(format!("{}", Quaternion::from(z)), "(2 + 3i)");

    // single-term forms print bare in both types
    for w in [Complex64::new(3.0, 0.0), Complex64::new(0.0, -2.5)] {
        assert_eq!(format!("{}", Quaternion::from(w)), format!("{}", w));
    }
}
