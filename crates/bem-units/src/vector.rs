use std::ops::{DivAssign, MulAssign};

use serde::Serialize;

use crate::error::{Result, UnitError};
use crate::quantity::Quantity;
use crate::scale::{compose, scale_for};
use crate::unit::{Unit, UnitSystem};

/// A sequence of raw doubles sharing exactly one unit and one scale.
///
/// Elementwise arithmetic requires equal dimension and length; the right
/// operand is aligned to the left operand's scale before combining, and a
/// failed check leaves both operands unmodified. Temperature vectors follow
/// absolute/relative composition rules on addition and subtraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantityVector {
    unit: Unit,
    values: Vec<f64>,
}

impl QuantityVector {
    /// Empty vector in `unit`.
    pub fn new(unit: Unit) -> Self {
        Self { unit, values: Vec::new() }
    }

    /// `n` copies of `value` in `unit`.
    pub fn repeated(unit: Unit, n: usize, value: f64) -> Self {
        Self { unit, values: vec![value; n] }
    }

    pub fn from_values(unit: Unit, values: Vec<f64>) -> Self {
        Self { unit, values }
    }

    /// Collect quantities into a vector on the first element's unit.
    ///
    /// Elements at a different scale of the same unit are aligned; a
    /// different dimension is an error.
    pub fn from_quantities(quantities: &[Quantity]) -> Result<Self> {
        let Some(first) = quantities.first() else {
            return Ok(Self::new(Unit::new(UnitSystem::Si)));
        };
        let mut vector = Self::new(first.unit().clone());
        for quantity in quantities {
            vector.push(quantity.clone())?;
        }
        Ok(vector)
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn system(&self) -> UnitSystem {
        self.unit.system()
    }

    pub fn scale_exponent(&self) -> i32 {
        self.unit.scale_exponent()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw values at the vector's scale.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Element `i` as a quantity at the vector's unit.
    pub fn quantity(&self, i: usize) -> Option<Quantity> {
        self.values.get(i).map(|v| Quantity::new(*v, self.unit.clone()))
    }

    pub fn quantities(&self) -> Vec<Quantity> {
        (0..self.len()).filter_map(|i| self.quantity(i)).collect()
    }

    /// Append a quantity, aligning its scale. Fails on a dimension mismatch.
    pub fn push(&mut self, quantity: Quantity) -> Result<()> {
        if !self.unit.same_dimension(quantity.unit()) {
            return Err(UnitError::incompatible(&self.unit, quantity.unit()));
        }
        let mut aligned = quantity;
        aligned.set_scale(self.unit.scale_exponent());
        self.values.push(aligned.value());
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Quantity> {
        self.values.pop().map(|v| Quantity::new(v, self.unit.clone()))
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Move every element to another registered scale. False (and no
    /// change) when `exponent` is not registered.
    pub fn set_scale(&mut self, exponent: i32) -> bool {
        let Some(target) = scale_for(exponent) else {
            return false;
        };
        let ratio = self.unit.scale().value / target.value;
        if !self.unit.set_scale(exponent) {
            return false;
        }
        for value in &mut self.values {
            *value *= ratio;
        }
        true
    }

    fn check_elementwise(&self, other: &QuantityVector) -> Result<()> {
        if !self.unit.same_dimension(other.unit()) {
            return Err(UnitError::incompatible(&self.unit, other.unit()));
        }
        if self.len() != other.len() {
            return Err(UnitError::length_mismatch(self.len(), other.len()));
        }
        Ok(())
    }

    // Right operand's values aligned to our scale.
    fn aligned_values(&self, other: &QuantityVector) -> Vec<f64> {
        let ratio = other.unit().scale().value / self.unit.scale().value;
        other.values().iter().map(|v| v * ratio).collect()
    }

    /// Elementwise add. Adding an absolute temperature vector to a relative
    /// one makes the result absolute.
    pub fn add_assign_vec(&mut self, other: &QuantityVector) -> Result<()> {
        self.check_elementwise(other)?;
        let rhs = self.aligned_values(other);
        for (value, r) in self.values.iter_mut().zip(rhs) {
            *value += r;
        }
        if self.unit.is_temperature() && other.unit().is_temperature() {
            if let (Ok(false), Ok(true)) = (self.unit.is_absolute(), other.unit().is_absolute()) {
                self.unit.set_as_absolute()?;
            }
        }
        Ok(())
    }

    /// Elementwise subtract. Differencing two absolute temperature vectors
    /// of exponent 1 yields a relative result; subtracting an absolute from
    /// a relative yields an absolute one.
    pub fn sub_assign_vec(&mut self, other: &QuantityVector) -> Result<()> {
        self.check_elementwise(other)?;
        let rhs = self.aligned_values(other);
        for (value, r) in self.values.iter_mut().zip(rhs) {
            *value -= r;
        }
        if self.unit.is_temperature() && other.unit().is_temperature() {
            match (self.unit.is_absolute(), other.unit().is_absolute()) {
                (Ok(true), Ok(true)) => {
                    if self.unit.temperature_exponent() == Some(1) {
                        self.unit.set_as_relative()?;
                    }
                }
                (Ok(false), Ok(true)) => self.unit.set_as_absolute()?,
                _ => {}
            }
        }
        Ok(())
    }

    /// Multiply by a scalar quantity: dimensions and systems compose, scales
    /// compose multiplicatively with any residual folded into the values.
    pub fn mul_assign_quantity(&mut self, quantity: &Quantity) {
        let (scale, residual) =
            compose(self.unit.scale_exponent(), quantity.scale_exponent());
        let mut unit = self.unit.multiply(quantity.unit());
        unit.set_scale(scale.exponent);
        self.unit = unit;
        *self *= quantity.value() * residual;
    }

    /// Divide by a scalar quantity; the inverse composition of
    /// [`QuantityVector::mul_assign_quantity`].
    pub fn div_assign_quantity(&mut self, quantity: &Quantity) {
        let (scale, residual) =
            compose(self.unit.scale_exponent(), -quantity.scale_exponent());
        let mut unit = self.unit.divide(quantity.unit());
        unit.set_scale(scale.exponent);
        self.unit = unit;
        *self *= residual / quantity.value();
    }

    /// Checked addition producing a new vector.
    pub fn try_add(&self, other: &QuantityVector) -> Result<QuantityVector> {
        let mut result = self.clone();
        result.add_assign_vec(other)?;
        Ok(result)
    }

    /// Checked subtraction producing a new vector.
    pub fn try_sub(&self, other: &QuantityVector) -> Result<QuantityVector> {
        let mut result = self.clone();
        result.sub_assign_vec(other)?;
        Ok(result)
    }
}

impl MulAssign<f64> for QuantityVector {
    fn mul_assign(&mut self, rhs: f64) {
        for value in &mut self.values {
            *value *= rhs;
        }
    }
}

impl DivAssign<f64> for QuantityVector {
    fn div_assign(&mut self, rhs: f64) {
        for value in &mut self.values {
            *value /= rhs;
        }
    }
}

/// Dot product: values combine at composed scale, units multiply.
pub fn dot(lhs: &QuantityVector, rhs: &QuantityVector) -> Result<Quantity> {
    if lhs.len() != rhs.len() {
        return Err(UnitError::length_mismatch(lhs.len(), rhs.len()));
    }
    let (scale, residual) = compose(lhs.scale_exponent(), rhs.scale_exponent());
    let mut unit = lhs.unit().multiply(rhs.unit());
    unit.set_scale(scale.exponent);
    let value: f64 = lhs
        .values()
        .iter()
        .zip(rhs.values())
        .map(|(a, b)| a * b)
        .sum::<f64>()
        * residual;
    Ok(Quantity::new(value, unit))
}
