use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Result, UnitError};
use crate::scale::{Scale, scale_for};

/// Measurement system a unit belongs to.
///
/// Combining units from different systems does not fail; the result is
/// promoted to `Mixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    Si,
    Ip,
    Mixed,
}

impl UnitSystem {
    /// System of a product or quotient of units from `self` and `other`.
    pub fn combine(self, other: UnitSystem) -> UnitSystem {
        if self == other { self } else { UnitSystem::Mixed }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Si => write!(f, "SI"),
            UnitSystem::Ip => write!(f, "IP"),
            UnitSystem::Mixed => write!(f, "Mixed"),
        }
    }
}

/// Dimension, measurement system, and scale of a quantity.
///
/// The dimension is a map from base-unit symbol to exponent; two units share
/// a dimension exactly when the maps agree (zero exponents are never
/// stored). Temperature units additionally carry absolute-vs-relative
/// semantics, which matter for addition and subtraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    system: UnitSystem,
    scale_exponent: i32,
    exponents: BTreeMap<&'static str, i32>,
    absolute: bool,
}

impl Unit {
    /// Dimensionless unit at scale 10^0.
    pub fn new(system: UnitSystem) -> Self {
        Self {
            system,
            scale_exponent: 0,
            exponents: BTreeMap::new(),
            absolute: false,
        }
    }

    /// Builder step: multiply in `symbol^exponent`.
    pub fn with_base(mut self, symbol: &'static str, exponent: i32) -> Self {
        self.mul_base(symbol, exponent);
        self
    }

    /// Builder step: set the scale exponent. Must be registered.
    pub fn at_scale(mut self, exponent: i32) -> Self {
        assert!(scale_for(exponent).is_some(), "unregistered scale 10^{exponent}");
        self.scale_exponent = exponent;
        self
    }

    fn mul_base(&mut self, symbol: &'static str, exponent: i32) {
        let entry = self.exponents.entry(symbol).or_insert(0);
        *entry += exponent;
        if *entry == 0 {
            self.exponents.remove(symbol);
        }
    }

    pub fn system(&self) -> UnitSystem {
        self.system
    }

    pub fn scale(&self) -> &'static Scale {
        scale_for(self.scale_exponent).expect("unit scale is always registered")
    }

    pub fn scale_exponent(&self) -> i32 {
        self.scale_exponent
    }

    /// Change scale. False (and no change) when `exponent` is unregistered.
    pub fn set_scale(&mut self, exponent: i32) -> bool {
        if scale_for(exponent).is_none() {
            return false;
        }
        self.scale_exponent = exponent;
        true
    }

    pub fn base_exponent(&self, symbol: &str) -> i32 {
        self.exponents.get(symbol).copied().unwrap_or(0)
    }

    /// True when both units have the same dimension, regardless of scale or
    /// system.
    pub fn same_dimension(&self, other: &Unit) -> bool {
        self.exponents == other.exponents
    }

    /// True for a pure temperature dimension (a single K or R base).
    pub fn is_temperature(&self) -> bool {
        self.exponents.len() == 1
            && self.exponents.keys().all(|s| *s == "K" || *s == "R")
    }

    /// Exponent of the temperature base, when this is a temperature unit.
    pub fn temperature_exponent(&self) -> Option<i32> {
        if self.is_temperature() {
            self.exponents.values().next().copied()
        } else {
            None
        }
    }

    /// Whether a temperature unit is on an absolute (thermodynamic) footing.
    pub fn is_absolute(&self) -> Result<bool> {
        if self.is_temperature() {
            Ok(self.absolute)
        } else {
            Err(UnitError::NotTemperature { unit: self.to_string() })
        }
    }

    pub fn set_as_absolute(&mut self) -> Result<()> {
        if self.is_temperature() {
            self.absolute = true;
            Ok(())
        } else {
            Err(UnitError::NotTemperature { unit: self.to_string() })
        }
    }

    pub fn set_as_relative(&mut self) -> Result<()> {
        if self.is_temperature() {
            self.absolute = false;
            Ok(())
        } else {
            Err(UnitError::NotTemperature { unit: self.to_string() })
        }
    }

    /// Dimensional product. The caller composes scales separately.
    pub fn multiply(&self, other: &Unit) -> Unit {
        let mut result = self.clone();
        result.system = self.system.combine(other.system);
        for (symbol, exponent) in &other.exponents {
            result.mul_base(*symbol, *exponent);
        }
        result.absolute = self.absolute && other.absolute;
        result
    }

    /// Dimensional quotient. The caller composes scales separately.
    pub fn divide(&self, other: &Unit) -> Unit {
        let mut result = self.clone();
        result.system = self.system.combine(other.system);
        for (symbol, exponent) in &other.exponents {
            result.mul_base(*symbol, -*exponent);
        }
        result
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scale().abbreviation)?;
        if self.exponents.is_empty() {
            return write!(f, "1");
        }
        let mut first = true;
        for (symbol, exponent) in &self.exponents {
            if !first {
                write!(f, "*")?;
            }
            first = false;
            if *exponent == 1 {
                write!(f, "{symbol}")?;
            } else {
                write!(f, "{symbol}^{exponent}")?;
            }
        }
        Ok(())
    }
}

/// SI unit constructors for the dimensions the schema catalog names.
pub mod si {
    use super::{Unit, UnitSystem};

    pub fn dimensionless() -> Unit {
        Unit::new(UnitSystem::Si)
    }

    pub fn watts() -> Unit {
        Unit::new(UnitSystem::Si).with_base("W", 1)
    }

    pub fn meters() -> Unit {
        Unit::new(UnitSystem::Si).with_base("m", 1)
    }

    pub fn cubic_meters() -> Unit {
        Unit::new(UnitSystem::Si).with_base("m", 3)
    }

    pub fn degrees() -> Unit {
        Unit::new(UnitSystem::Si).with_base("deg", 1)
    }

    pub fn watts_per_meter_kelvin() -> Unit {
        Unit::new(UnitSystem::Si).with_base("W", 1).with_base("m", -1).with_base("K", -1)
    }

    /// Kelvin, absolute by construction.
    pub fn kelvin() -> Unit {
        let mut unit = Unit::new(UnitSystem::Si).with_base("K", 1);
        unit.set_as_absolute().expect("K is a temperature unit");
        unit
    }

    /// Celsius-style relative temperature difference.
    pub fn celsius_interval() -> Unit {
        Unit::new(UnitSystem::Si).with_base("K", 1)
    }
}
