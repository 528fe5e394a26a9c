//! Registered decimal scale prefixes.
//!
//! Scales form a closed set; a scale change to an unregistered exponent is
//! refused rather than invented, so every stored value sits at a prefix the
//! external format can spell.

/// One registered scale: 10^exponent with its SI prefix abbreviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub exponent: i32,
    pub abbreviation: &'static str,
    pub value: f64,
}

pub(crate) const SCALES: [Scale; 13] = [
    Scale { exponent: -12, abbreviation: "p", value: 1e-12 },
    Scale { exponent: -9, abbreviation: "n", value: 1e-9 },
    Scale { exponent: -6, abbreviation: "u", value: 1e-6 },
    Scale { exponent: -3, abbreviation: "m", value: 1e-3 },
    Scale { exponent: -2, abbreviation: "c", value: 1e-2 },
    Scale { exponent: -1, abbreviation: "d", value: 1e-1 },
    Scale { exponent: 0, abbreviation: "", value: 1.0 },
    Scale { exponent: 1, abbreviation: "da", value: 1e1 },
    Scale { exponent: 2, abbreviation: "h", value: 1e2 },
    Scale { exponent: 3, abbreviation: "k", value: 1e3 },
    Scale { exponent: 6, abbreviation: "M", value: 1e6 },
    Scale { exponent: 9, abbreviation: "G", value: 1e9 },
    Scale { exponent: 12, abbreviation: "T", value: 1e12 },
];

/// The registered scale at `exponent`, if any.
pub fn scale_for(exponent: i32) -> Option<&'static Scale> {
    SCALES.iter().find(|s| s.exponent == exponent)
}

/// The registered scale with `abbreviation`, if any.
pub fn scale_for_abbreviation(abbreviation: &str) -> Option<&'static Scale> {
    SCALES.iter().find(|s| s.abbreviation == abbreviation)
}

/// Compose two scales multiplicatively.
///
/// Returns the registered scale closest to the exact product from below in
/// registration order, plus the residual factor that must be folded into the
/// values so `chosen.value * residual == 10^(a + b)`.
pub fn compose(a: i32, b: i32) -> (&'static Scale, f64) {
    let exact = a + b;
    match scale_for(exact) {
        Some(scale) => (scale, 1.0),
        None => {
            let nearest = SCALES
                .iter()
                .min_by_key(|s| (s.exponent - exact).abs())
                .expect("scale table is non-empty");
            (nearest, 10f64.powi(exact - nearest.exponent))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_scale_is_registered() {
        let base = scale_for(0).unwrap();
        assert_eq!(base.abbreviation, "");
        assert_eq!(base.value, 1.0);
        assert_eq!(scale_for_abbreviation("k").unwrap().exponent, 3);
    }

    #[test]
    fn unregistered_exponents_are_refused() {
        assert!(scale_for(4).is_none());
        assert!(scale_for(-5).is_none());
    }

    #[test]
    fn compose_lands_on_registered_scales() {
        let (scale, residual) = compose(3, 3);
        assert_eq!(scale.exponent, 6);
        assert_eq!(residual, 1.0);

        // 10^5 is unregistered; the residual carries the difference.
        let (scale, residual) = compose(3, 2);
        assert!((scale.value * residual - 1e5).abs() < 1e-6);
    }
}
