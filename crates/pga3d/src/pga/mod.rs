//! Closed-form entities of the 3D projective geometric algebra, plus a
//! table-driven reference algebra used to derive and check them.

use std::fmt;

mod axes;
mod flector;
mod line;
mod motor;
mod multivector;
mod plane;
mod point;
mod term;

#[cfg(test)]
mod tests;

pub use axes::Axes;
pub use flector::Flector;
pub use line::Line;
pub use motor::{Motor, TransformByMotor};
pub use multivector::Multivector;
pub use plane::Plane;
pub use point::Point;
pub use term::Term;

/// Conversion of an entity to a general [`Multivector`].
pub trait AsMultivector {
    /// Returns the entity as a sum of basis blades.
    fn as_multivector(&self) -> Multivector;
}

impl AsMultivector for Multivector {
    fn as_multivector(&self) -> Multivector {
        *self
    }
}

/// Writes a sum of terms such as `2 + 0.5*e12 - 1*e4`, skipping zero terms.
pub(crate) fn display_terms(
    f: &mut fmt::Formatter<'_>,
    terms: impl Iterator<Item = Term>,
) -> fmt::Result {
    let mut is_first = true;
    for term in terms.filter(|t| t.coef != 0.0) {
        if is_first {
            write!(f, "{term}")?;
        } else if term.coef < 0.0 {
            write!(f, " - {}", -term)?;
        } else {
            write!(f, " + {term}")?;
        }
        is_first = false;
    }
    if is_first {
        write!(f, "0")?;
    }
    Ok(())
}
