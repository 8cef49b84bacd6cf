//! Escape-time iteration of `z <- z² + c`.

use super::complex::Complex;

/// How the orbit magnitude is compared against the escape radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeTest {
    /// `sqrt(re² + im²) < radius²`, the boundary the classic terminal viewer draws.
    /// With radius 2 this lets orbits run out to |z| = 4.
    #[default]
    Compatible,
    /// `re² + im² < radius²`, i.e. `|z| < radius`.
    Conventional,
}

impl EscapeTest {
    /// Whether an orbit point with squared magnitude `norm_sqr` is still bounded.
    pub fn is_bounded(self, norm_sqr: f32, radius_sqr: f32) -> bool {
        match self {
            EscapeTest::Compatible => norm_sqr.sqrt() < radius_sqr,
            EscapeTest::Conventional => norm_sqr < radius_sqr,
        }
    }
}

/// Fixed iteration parameters shared by every pixel of every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTime {
    pub max_iterations: u32,
    radius_sqr: f32,
    pub test: EscapeTest,
}

impl EscapeTime {
    pub fn new(max_iterations: u32, radius: f32, test: EscapeTest) -> Self {
        Self {
            max_iterations,
            radius_sqr: radius * radius,
            test,
        }
    }

    pub fn radius_sqr(&self) -> f32 {
        self.radius_sqr
    }

    /// Iteration count at which the orbit of `z` leaves the radius,
    /// or `max_iterations` if it never does. Always in `0..=max_iterations`.
    pub fn iterate(&self, mut z: Complex, c: Complex) -> u32 {
        let mut it = 0;
        while it < self.max_iterations && self.test.is_bounded(z.norm_sqr(), self.radius_sqr) {
            z = z * z + c;
            it += 1;
        }
        it
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn engine(test: EscapeTest) -> EscapeTime {
        EscapeTime::new(100, 2.0, test)
    }

    #[test]
    fn test_origin_with_zero_constant_never_escapes() {
        let e = engine(EscapeTest::Compatible);
        assert_eq!(e.iterate(Complex::default(), Complex::default()), 100);
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        let e = engine(EscapeTest::Conventional);
        assert_eq!(e.iterate(Complex::new(10.0, 0.0), Complex::default()), 0);
    }

    #[test]
    fn test_compatible_test_is_looser_than_conventional() {
        // |z| = 3: outside radius 2, inside radius² = 4.
        let z = Complex::new(3.0, 0.0);
        let c = Complex::default();
        assert_eq!(engine(EscapeTest::Conventional).iterate(z, c), 0);
        assert_eq!(engine(EscapeTest::Compatible).iterate(z, c), 1);
    }

    #[test]
    fn test_zero_cap_returns_zero() {
        let e = EscapeTime::new(0, 2.0, EscapeTest::Compatible);
        assert_eq!(e.iterate(Complex::default(), Complex::default()), 0);
    }

    #[test]
    fn test_known_orbit_count() {
        // z = 1.5: 1.5 -> 2.25 -> 5.0625, which is past 4 on the third step.
        let e = engine(EscapeTest::Compatible);
        assert_eq!(e.iterate(Complex::new(1.5, 0.0), Complex::default()), 2);
    }

    #[test]
    fn test_iterate_is_deterministic() {
        let e = engine(EscapeTest::Compatible);
        let z = Complex::new(0.1, -0.2);
        let c = Complex::new(-0.8, 0.156);
        assert_eq!(e.iterate(z, c), e.iterate(z, c));
    }

    proptest! {
        #[test]
        fn points_outside_threshold_escape_at_zero(
            angle in 0.0f32..std::f32::consts::TAU,
            extra in 0.0f32..100.0,
            c_re in -2.0f32..2.0,
            c_im in -2.0f32..2.0,
        ) {
            let e = engine(EscapeTest::Compatible);
            // Compatible threshold is |z| >= radius².
            let r = e.radius_sqr() + extra;
            let z = Complex::new(r * angle.cos(), r * angle.sin());
            prop_assume!(!e.test.is_bounded(z.norm_sqr(), e.radius_sqr()));
            prop_assert_eq!(e.iterate(z, Complex::new(c_re, c_im)), 0);
        }

        #[test]
        fn result_never_exceeds_cap(
            re in -4.0f32..4.0,
            im in -4.0f32..4.0,
            cap in 0u32..200,
        ) {
            let e = EscapeTime::new(cap, 2.0, EscapeTest::Conventional);
            prop_assert!(e.iterate(Complex::new(re, im), Complex::new(-0.8, 0.156)) <= cap);
        }
    }
}
