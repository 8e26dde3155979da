use crate::base_types::CostValue;
use std::fmt;
use std::ops::Add;

/// Cost of an assignment (or of a whole dispatch). `Infinity` marks an
/// infeasible assignment; it absorbs on addition and compares above every
/// finite value.
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Debug)]
pub enum Cost {
    Finite(CostValue),
    Infinity,
}

// methods:
impl Cost {
    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    pub fn as_finite(&self) -> Result<CostValue, &str> {
        match self {
            Cost::Finite(c) => Ok(*c),
            Cost::Infinity => Err("Cost is infinity"),
        }
    }
}

// static functions:
impl Cost {
    pub const ZERO: Cost = Cost::Finite(0);

    pub fn from_value(c: CostValue) -> Cost {
        Cost::Finite(c)
    }
}

impl Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match (self, other) {
            (Cost::Finite(c1), Cost::Finite(c2)) => Cost::Finite(c1 + c2),
            _ => Cost::Infinity,
        }
    }
}

impl std::iter::Sum<Self> for Cost {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Cost::ZERO, |a, b| a + b)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cost::Finite(c) => write!(f, "{}", c),
            Cost::Infinity => write!(f, "INF"),
        }
    }
}
