macro_rules! impl_forward_bin_ops_to_ref {
    () => {};

    (
        impl $trait:ident for $type:ty { fn $func:ident() }
        $($remainder:tt)*
    ) => {
        impl_forward_bin_ops_to_ref! {
            impl $trait<$type> for $type { fn $func() -> $type }
            $($remainder)*
        }
    };

    (
        impl $trait:ident<$rhs:ty> for $type:ty { fn $func:ident() -> $ret:ty }
        $($remainder:tt)*
    ) => {
        impl $trait<$rhs> for $type {
            type Output = $ret;

            fn $func(self, rhs: $rhs) -> $ret {
                $trait::$func(&self, &rhs)
            }
        }
        impl<'a> $trait<$rhs> for &'a $type {
            type Output = $ret;

            fn $func(self, rhs: $rhs) -> $ret {
                $trait::$func(self, &rhs)
            }
        }
        impl<'a> $trait<&'a $rhs> for $type {
            type Output = $ret;

            fn $func(self, rhs: &'a $rhs) -> $ret {
                $trait::$func(&self, rhs)
            }
        }
        impl_forward_bin_ops_to_ref! { $($remainder)* }
    };
}

macro_rules! impl_for_tuples {
    ($impl_macro:ident) => {
        $impl_macro!(T0; 0);
        $impl_macro!(T0, T1; 0, 1);
        $impl_macro!(T0, T1, T2; 0, 1, 2);
        $impl_macro!(T0, T1, T2, T3; 0, 1, 2, 3);
        $impl_macro!(T0, T1, T2, T3, T4; 0, 1, 2, 3, 4);
        $impl_macro!(T0, T1, T2, T3, T4, T5; 0, 1, 2, 3, 4, 5);
        $impl_macro!(T0, T1, T2, T3, T4, T5, T6; 0, 1, 2, 3, 4, 5, 6);
        $impl_macro!(T0, T1, T2, T3, T4, T5, T6, T7; 0, 1, 2, 3, 4, 5, 6, 7);
    };
}

/// Implements coefficient accessors, array conversion, approximate
/// comparison, and conversion to [`crate::pga::Multivector`] for a struct of
/// `Float` coefficients.
///
/// Each field is listed with the basis blade it is the coefficient of, as a
/// [`crate::pga::Term`] whose sign relates the named blade (such as `e31`) to
/// the canonically ordered blade stored in a multivector (such as `e13`).
macro_rules! impl_coefficients {
    (
        $type:ident[$len:literal] {
            $($field:ident: $doc:literal => $blade:expr),+ $(,)?
        }
    ) => {
        impl $type {
            /// Basis blade for each coefficient, in field order.
            pub(crate) const BASIS: [$crate::pga::Term; $len] = [$($blade),+];

            $(
                #[doc = $doc]
                #[inline]
                pub fn $field(&self) -> $crate::Float {
                    self.$field
                }
            )+

            /// Returns the coefficients in field order.
            pub fn to_array(&self) -> [$crate::Float; $len] {
                [$(self.$field),+]
            }
            /// Constructs a value from coefficients in field order.
            pub(crate) fn from_array([$($field),+]: [$crate::Float; $len]) -> Self {
                Self { $($field),+ }
            }
        }

        impl approx_collections::ApproxEq for $type {
            fn approx_eq(&self, other: &Self, prec: approx_collections::Precision) -> bool {
                $(prec.eq(self.$field, other.$field))&&+
            }
        }

        impl approx_collections::ApproxEqZero for $type {
            fn approx_eq_zero(&self, prec: approx_collections::Precision) -> bool {
                $(prec.eq_zero(self.$field))&&+
            }
        }

        impl $crate::pga::AsMultivector for $type {
            fn as_multivector(&self) -> $crate::pga::Multivector {
                $crate::pga::Multivector::from_basis(&Self::BASIS, self.to_array())
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::pga::display_terms(
                    f,
                    std::iter::zip(Self::BASIS, self.to_array())
                        .map(|(basis, coef)| basis * coef),
                )
            }
        }
    };
}
