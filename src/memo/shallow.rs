//! Shallow comparison of values and prop sets.

/// One-level equality used by every memoization primitive.
///
/// Primitives compare by value. Reference handles ([`Shared`](super::Shared),
/// [`Callback`](super::Callback)) compare by identity and never look at the
/// value behind the pointer.
pub trait ShallowEq {
    /// Returns `true` if `self` and `other` are shallowly equal.
    fn shallow_eq(&self, other: &Self) -> bool;
}

macro_rules! shallow_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ShallowEq for $ty {
                #[inline]
                fn shallow_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

shallow_by_value!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, str, String,
);

impl<T: ShallowEq + ?Sized> ShallowEq for &T {
    #[inline]
    fn shallow_eq(&self, other: &Self) -> bool {
        (**self).shallow_eq(*other)
    }
}

impl<T: ShallowEq> ShallowEq for Option<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.shallow_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

// Dependency lists are tuples: `(surname,)`, `(a, b)`, ...
macro_rules! shallow_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: ShallowEq),+> ShallowEq for ($($name,)+) {
            #[inline]
            fn shallow_eq(&self, other: &Self) -> bool {
                $(self.$idx.shallow_eq(&other.$idx))&&+
            }
        }
    };
}

shallow_tuple!(A: 0);
shallow_tuple!(A: 0, B: 1);
shallow_tuple!(A: 0, B: 1, C: 2);
shallow_tuple!(A: 0, B: 1, C: 2, D: 3);

/// A complete prop set handed to a component.
///
/// Comparison is key by key: [`changed_keys`](Props::changed_keys) names every
/// field whose [`ShallowEq`] check failed. Implement it with
/// [`shallow_props!`](crate::shallow_props) rather than by hand.
pub trait Props: Clone {
    /// Names of the fields that differ from `previous`.
    fn changed_keys(&self, previous: &Self) -> Vec<&'static str>;

    /// Returns `true` when no field changed.
    fn is_shallow_equal(&self, previous: &Self) -> bool {
        self.changed_keys(previous).is_empty()
    }
}

/// Implement [`Props`] for a struct by comparing the listed fields with
/// [`ShallowEq`].
///
/// ```rust
/// use memoscope::shallow_props;
///
/// #[derive(Clone)]
/// struct Greeting {
///     label: &'static str,
///     value: String,
/// }
///
/// shallow_props!(Greeting { label, value });
/// ```
#[macro_export]
macro_rules! shallow_props {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::memo::Props for $ty {
            fn changed_keys(&self, previous: &Self) -> ::std::vec::Vec<&'static str> {
                let mut changed = ::std::vec::Vec::new();
                $(
                    if !$crate::memo::ShallowEq::shallow_eq(&self.$field, &previous.$field) {
                        changed.push(stringify!($field));
                    }
                )+
                changed
            }
        }
    };
}
