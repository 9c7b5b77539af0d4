//! Small adapters for comparing values.
//!
//! Rust code usually compares with a three-way function returning
//! [`Ordering`](std::cmp::Ordering), while some APIs want a boolean
//! "less than" predicate instead. The modules are:
//! - [`convert`], going back and forth between comparators and predicates.
//! - [`rank`], a comparator defined by an explicit list of values, where
//!   earlier values are smaller.
//! - [`chain`], combining comparators lexicographically, so later ones only
//!   break ties of earlier ones.
//!
//! Example usage:
//! ```
//! use std::cmp::Ordering;
//! use cmpkit::prelude::*;
//!
//! let less = into_less(|a: &i32, b: &i32| a.cmp(b));
//! assert!(less(&1, &2));
//!
//! let mut values = vec![3, 1, 2];
//! values.sort_by(into_cmp(less));
//! assert_eq!(values, [1, 2, 3]);
//!
//! let cmp = rank_cmp(["low", "medium", "high"]);
//! assert_eq!(cmp(&"low", &"high"), Ordering::Less);
//! assert_eq!(cmp(&"high", &"low"), Ordering::Greater);
//! assert_eq!(cmp(&"medium", &"medium"), Ordering::Equal);
//! ```
//!
//! A comparator built from a less predicate reports the usual three results:
//! ```
//! use std::cmp::Ordering;
//! use cmpkit::convert::into_cmp;
//!
//! let cmp = into_cmp(|a: &i32, b: &i32| a < b);
//! assert_eq!(cmp(&1, &2), Ordering::Less);
//! assert_eq!(cmp(&2, &1), Ordering::Greater);
//! assert_eq!(cmp(&2, &2), Ordering::Equal);
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod chain;
pub mod convert;
mod error;
pub mod rank;

pub use error::{DuplicateValue, UnknownValue};

/// Commonly used functions and types
pub mod prelude {
    pub use super::{
        chain::{chain_cmp, Chain},
        convert::{into_cmp, into_less},
        rank::{rank_cmp, try_rank_cmp, RankTable},
    };
}
