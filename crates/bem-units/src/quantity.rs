use serde::Serialize;
use std::fmt;

use crate::scale::scale_for;
use crate::unit::Unit;

/// One value carried at its unit's scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn scale_exponent(&self) -> i32 {
        self.unit.scale_exponent()
    }

    /// Move the quantity to another registered scale, rescaling the value so
    /// the physical magnitude is unchanged. False when `exponent` is not
    /// registered.
    pub fn set_scale(&mut self, exponent: i32) -> bool {
        let Some(target) = scale_for(exponent) else {
            return false;
        };
        let ratio = self.unit.scale().value / target.value;
        if !self.unit.set_scale(exponent) {
            return false;
        }
        self.value *= ratio;
        true
    }

    /// The same quantity expressed at scale 10^0.
    pub fn to_base_scale(mut self) -> Quantity {
        let ok = self.set_scale(0);
        debug_assert!(ok, "scale 0 is always registered");
        self
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::si;

    #[test]
    fn rescaling_preserves_magnitude() {
        let mut q = Quantity::new(1.5, si::watts().at_scale(3));
        assert!(q.set_scale(0));
        assert_eq!(q.value(), 1500.0);
        assert_eq!(q.scale_exponent(), 0);
    }

    #[test]
    fn unregistered_scale_is_refused() {
        let mut q = Quantity::new(1.5, si::watts());
        assert!(!q.set_scale(7));
        assert_eq!(q.value(), 1.5);
    }
}
