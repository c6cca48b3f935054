//! Simple `Sign` type.

use std::fmt;
use std::ops::{Mul, MulAssign, Neg};

use num_traits::Signed;

use crate::Float;

/// Positive or negative.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Positive
    #[default]
    Pos = 0,
    /// Negative
    Neg = 1,
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Pos => write!(f, "+"),
            Sign::Neg => write!(f, "-"),
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match rhs {
            Sign::Pos => self,
            Sign::Neg => -self,
        }
    }
}
impl MulAssign for Sign {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Sign> for Float {
    type Output = Float;

    fn mul(self, rhs: Sign) -> Self::Output {
        self * rhs.to_num::<Float>()
    }
}
impl MulAssign<Sign> for Float {
    fn mul_assign(&mut self, rhs: Sign) {
        *self = *self * rhs;
    }
}

impl Sign {
    /// Returns `1` or `-1`.
    pub fn to_num<T: Signed>(self) -> T {
        match self {
            Sign::Pos => T::one(),
            Sign::Neg => -T::one(),
        }
    }
    /// Returns `Neg` if `parity` is odd; otherwise `Pos`.
    pub const fn from_parity(parity: u32) -> Self {
        match parity & 1 {
            0 => Sign::Pos,
            _ => Sign::Neg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_arithmetic() {
        assert_eq!(Sign::Neg * Sign::Neg, Sign::Pos);
        assert_eq!(Sign::Pos * Sign::Neg, Sign::Neg);
        assert_eq!(-Sign::Pos, Sign::Neg);
        assert_eq!(Sign::from_parity(3), Sign::Neg);
        assert_eq!(Sign::from_parity(4), Sign::Pos);
        assert_eq!(2.5_f64 * Sign::Neg, -2.5);
    }
}
