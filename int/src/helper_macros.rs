//! Operator-forwarding macros: each arithmetic trait is implemented once for
//! `BigUInt op BigUInt`; these macros generate the `&BigUInt` variants by
//! forwarding through a clone, avoiding writing all four value/reference
//! combinations by hand.

/// Implement `impl Op<BigUInt> for &BigUInt` and `impl Op<&BigUInt> for
/// &BigUInt` by cloning the receiver and forwarding to `impl Op<_> for
/// BigUInt`.
macro_rules! forward_binop_first_arg_by_value {
    (impl $trait:ident<$t2:ty> for $t1:ty, $method:ident) => {
        impl $trait<$t2> for &$t1 {
            type Output = <$t1 as $trait<$t2>>::Output;

            #[inline]
            fn $method(self, rhs: $t2) -> Self::Output {
                self.clone().$method(rhs)
            }
        }

        impl $trait<&$t2> for &$t1 {
            type Output = <$t1 as $trait<$t2>>::Output;

            #[inline]
            fn $method(self, rhs: &$t2) -> Self::Output {
                self.clone().$method(rhs.clone())
            }
        }
    };
}

/// Implement `impl Op<&BigUInt> for BigUInt` by cloning the argument and
/// forwarding to `impl Op<BigUInt> for BigUInt`.
macro_rules! forward_binop_second_arg_by_value {
    (impl $trait:ident<$t2:ty> for $t1:ty, $method:ident) => {
        impl $trait<&$t2> for $t1 {
            type Output = <$t1 as $trait<$t2>>::Output;

            #[inline]
            fn $method(self, rhs: &$t2) -> Self::Output {
                self.$method(rhs.clone())
            }
        }
    };
}

pub(crate) use forward_binop_first_arg_by_value;
pub(crate) use forward_binop_second_arg_by_value;
