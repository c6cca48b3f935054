use std::fmt;

use bitflags::bitflags;

use crate::Sign;

bitflags! {
    /// Set of axes for a term in the 3D projective geometric algebra.
    ///
    /// Bits are ordered `e1`, `e2`, `e3`, `e4`, and a set of axes always
    /// denotes the blade with its axes in ascending order. For example,
    /// `Axes::X | Axes::Z` is `e13`, which is `-e31`.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Axes: u8 {
        /// Scalar (no axes)
        const SCALAR = 0;

        /// Euclidean X axis e₁
        const X = 1 << 0;
        /// Euclidean Y axis e₂
        const Y = 1 << 1;
        /// Euclidean Z axis e₃
        const Z = 1 << 2;
        /// Projective axis e₄, which squares to zero
        const W = 1 << 3;
    }
}

impl fmt::Display for Axes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "1");
        }
        write!(f, "e")?;
        for i in (0..4).filter(|i| self.bits() & (1 << i) != 0) {
            write!(f, "{}", i + 1)?;
        }
        Ok(())
    }
}

impl Axes {
    /// Number of basis blades in the algebra.
    pub const COUNT: usize = 16;
    /// Unit antiscalar `e1234`, the identity of the geometric antiproduct.
    pub const ANTISCALAR: Self = Self::all();

    /// Returns an iterator over all basis blades, ordered by bitmask.
    pub fn iter_all() -> impl Clone + Iterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self::from_bits_truncate)
    }

    /// Returns the number of basis vectors in the blade.
    pub const fn grade(self) -> u8 {
        self.bits().count_ones() as _
    }
    /// Returns the number of basis vectors in the complement of the blade.
    pub const fn antigrade(self) -> u8 {
        4 - self.grade()
    }

    /// Returns the sign of the [reverse] of the basis blade.
    ///
    /// [reverse]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Reverses
    pub fn sign_of_reverse(self) -> Sign {
        // The number of swaps required to reverse a sequence of length n is
        // n*(n-1)/2, which is odd exactly when n is 2 or 3 mod 4.
        match self.grade() % 4 {
            0 | 1 => Sign::Pos,
            _ => Sign::Neg,
        }
    }
    /// Returns the sign of the [antireverse] of the basis blade.
    ///
    /// [antireverse]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Reverses
    pub fn sign_of_antireverse(self) -> Sign {
        self.unsigned_complement().sign_of_reverse()
    }

    /// Returns the sign of the [geometric product] between `lhs` and `rhs`, or
    /// `None` if the result is zero.
    ///
    /// [geometric product]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Geometric_products
    pub fn sign_of_geometric_product(lhs: Self, rhs: Self) -> Option<Sign> {
        // e₄ squares to 0.
        if lhs.contains(Self::W) && rhs.contains(Self::W) {
            return None;
        }
        Some(Self::sign_of_reordering(lhs, rhs))
    }
    /// Returns the sign of the [exterior product] between `lhs` and `rhs`, or
    /// `None` if the result is zero.
    ///
    /// [exterior product]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Exterior_products
    pub fn sign_of_wedge(lhs: Self, rhs: Self) -> Option<Sign> {
        (!lhs.intersects(rhs)).then(|| Self::sign_of_reordering(lhs, rhs))
    }
    /// Returns the sign of the [geometric antiproduct] between `lhs` and
    /// `rhs`, or `None` if the result is zero.
    ///
    /// [geometric antiproduct]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Geometric_products
    pub fn sign_of_geometric_antiproduct(lhs: Self, rhs: Self) -> Option<Sign> {
        let lc = lhs.unsigned_complement();
        let rc = rhs.unsigned_complement();

        let mut ret = Sign::Pos;
        // Use De Morgan's laws: take the right complement of each argument ...
        ret *= lhs.sign_of_right_complement();
        ret *= rhs.sign_of_right_complement();
        // ... then geometric-product them together ...
        ret *= Self::sign_of_geometric_product(lc, rc)?;
        // ... then take the left complement of the result.
        ret *= (lc ^ rc).sign_of_left_complement();
        Some(ret)
    }
    /// Returns the sign of the [right complement] of the basis blade.
    ///
    /// [right complement]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Complements
    pub fn sign_of_right_complement(self) -> Sign {
        let complement = self.unsigned_complement();
        Self::sign_of_wedge(self, complement).unwrap_or_else(|| {
            debug_panic!("complement {complement} overlaps {self}");
            Sign::Pos
        })
    }
    /// Returns the sign of the [left complement] of the basis blade.
    ///
    /// [left complement]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Complements
    pub fn sign_of_left_complement(self) -> Sign {
        let complement = self.unsigned_complement();
        Self::sign_of_wedge(complement, self).unwrap_or_else(|| {
            debug_panic!("complement {complement} overlaps {self}");
            Sign::Pos
        })
    }

    /// Returns the unsigned geometric product of `lhs` and `rhs`.
    pub fn unsigned_geometric_product(lhs: Self, rhs: Self) -> Axes {
        lhs ^ rhs
    }
    /// Returns the unsigned geometric antiproduct of `lhs` and `rhs`.
    pub fn unsigned_geometric_antiproduct(lhs: Self, rhs: Self) -> Axes {
        (lhs ^ rhs).unsigned_complement()
    }
    /// Returns the unsigned complement of the basis blade.
    pub fn unsigned_complement(self) -> Axes {
        self ^ Self::ANTISCALAR
    }

    /// Returns the sign picked up by sorting the concatenation of `lhs` and
    /// `rhs` into ascending order, ignoring the metric.
    fn sign_of_reordering(lhs: Self, rhs: Self) -> Sign {
        // Each axis of `rhs` must be swapped past every axis of `lhs` that is
        // greater than it.
        let swaps = (0..4)
            .filter(|i| rhs.bits() & (1 << i) != 0)
            .map(|i| (lhs.bits() >> (i + 1)).count_ones())
            .sum();
        Sign::from_parity(swaps)
    }
}
