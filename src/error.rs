/*!
Errors raised while building or using rank comparators.

[`DuplicateValue`] is returned by the fallible constructors and is the panic
message of the strict ones. [`UnknownValue`] is never returned, it only
describes the panic raised when a comparator is asked about a value it does not
rank.
*/

use std::fmt;

/// A value occurred more than once in the order given to a rank comparator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateValue<T> {
    /// The repeated value.
    pub value: T,

    /// Position of the first occurrence.
    pub first: usize,

    /// Position of the repeated occurrence.
    pub second: usize,
}

impl<T> DuplicateValue<T> {
    /// Consumes the error, returning the repeated value.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: fmt::Debug> std::error::Error for DuplicateValue<T> {}

impl<T: fmt::Debug> fmt::Display for DuplicateValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicated value in order: {:?} (positions {} and {})",
            self.value, self.first, self.second
        )
    }
}

/// A rank comparator was asked to compare a value missing from its order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownValue<T> {
    pub value: T,
}

impl<T: fmt::Debug> std::error::Error for UnknownValue<T> {}

impl<T: fmt::Debug> fmt::Display for UnknownValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value: {:?}", self.value)
    }
}
