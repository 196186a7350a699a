use crate::scalar::Scalar;

/// Whether `t² + b·t + c = 0` has a real root `t >= range`
///
/// Only the larger root can satisfy the bound when the smaller one does, so
/// it is the one compared. Both roots come from the same cancellation free
/// form as `first_root_at_or_above`.
#[inline]
pub fn has_solution<S: Scalar>(b: S, c: S, range: S) -> bool {
    let half = S::from_literal(0.5);
    let four = S::from_literal(4.0);

    let discriminant = b * b - four * c;
    if discriminant < S::zero() {
        return false;
    }

    let q = -half * (b + discriminant.sqrt().copysign(b));
    let larger = if q == S::zero() { q } else { q.max(c / q) };

    larger >= range
}

/// Smallest root `t >= range` of `a·t² + b·t + c = 0`
///
/// Uses the cancellation free form `q = -(b + sign(b)·√D) / 2` with the roots
/// `q / a` and `c / q`. A zero leading coefficient yields `None`.
#[inline]
pub fn first_root_at_or_above<S: Scalar>(a: S, b: S, c: S, range: S) -> Option<S> {
    if a == S::zero() {
        return None;
    }

    let half = S::from_literal(0.5);
    let four = S::from_literal(4.0);

    let discriminant = b * b - four * a * c;
    if discriminant < S::zero() {
        return None;
    }

    let q = -half * (b + discriminant.sqrt().copysign(b));
    if q == S::zero() {
        // b = 0 and D = 0 leave the double root at zero
        return (S::zero() >= range).then_some(S::zero());
    }

    let (mut t0, mut t1) = (q / a, c / q);
    if t0 > t1 {
        std::mem::swap(&mut t0, &mut t1);
    }

    if t0 >= range {
        Some(t0)
    } else if t1 >= range {
        Some(t1)
    } else {
        None
    }
}
