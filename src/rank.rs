//! Comparators defined by an explicit ranking of values.
//!
//! The ranking is a list ordered from lowest to highest, every value in it must
//! be unique. There are two ways to build one: [`RankTable::new`] (and
//! [`rank_cmp`]) panics if the list contains a duplicate, while
//! [`RankTable::try_new`] (and [`try_rank_cmp`]) returns a [`DuplicateValue`]
//! instead.
//!
//! Comparing a value which is not in the list always panics, no matter which
//! constructor was used. Use [`RankTable::rank`] to check a value first.

use std::{
    borrow::Borrow,
    cmp::Ordering,
    collections::{hash_map::Entry, HashMap},
    fmt,
    hash::Hash,
};

use crate::{DuplicateValue, UnknownValue};

/// Maps every value of an order to its zero-based position in it.
#[derive(Clone, Debug)]
pub struct RankTable<T> {
    ranks: HashMap<T, usize>,
}

impl<T: Eq + Hash> RankTable<T> {
    fn build<I>(order: I) -> Result<Self, DuplicateValue<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let order = order.into_iter();
        let mut ranks = HashMap::with_capacity(order.size_hint().0);
        for (i, value) in order.enumerate() {
            match ranks.entry(value) {
                Entry::Occupied(entry) => {
                    let (value, first) = entry.remove_entry();
                    return Err(DuplicateValue { value, first, second: i });
                }
                Entry::Vacant(entry) => {
                    entry.insert(i);
                }
            }
        }
        log::trace!("Built a rank table with {} values", ranks.len());
        Ok(RankTable { ranks })
    }

    /// Position of `value` in the order, or `None` if it isn't ranked.
    pub fn rank<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ranks.get(value).copied()
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ranks.contains_key(value)
    }

    /// Number of ranked values.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl<T: Eq + Hash + fmt::Debug> RankTable<T> {
    /// Build a table from `order`, ranked from lowest to highest.
    ///
    /// # Panics
    ///
    /// Panics if a value occurs more than once in `order`.
    pub fn new<I>(order: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        match Self::build(order) {
            Ok(table) => table,
            Err(err) => panic!("{}", err),
        }
    }

    /// Like [`RankTable::new`], but returns an error instead of panicking if a
    /// value occurs more than once in `order`.
    pub fn try_new<I>(order: I) -> Result<Self, DuplicateValue<T>>
    where
        I: IntoIterator<Item = T>,
    {
        Self::build(order).map_err(|err| {
            log::debug!("Rejected rank order: {}", err);
            err
        })
    }

    /// Compare `a` and `b` by their positions in the order.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` isn't ranked, `a` is checked first.
    pub fn compare<Q>(&self, a: &Q, b: &Q) -> Ordering
    where
        T: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let Some(ai) = self.rank(a) else {
            panic!("{}", UnknownValue { value: a });
        };
        let Some(bi) = self.rank(b) else {
            panic!("{}", UnknownValue { value: b });
        };
        ai.cmp(&bi)
    }

    /// Turn the table into a comparator closure, see [`RankTable::compare`].
    pub fn into_cmp(self) -> impl Fn(&T, &T) -> Ordering {
        move |a: &T, b: &T| self.compare(a, b)
    }
}

/// Returns a comparator ranking values by their position in `order`, which is
/// ordered from lowest to highest.
///
/// ```
/// use std::cmp::Ordering;
/// use cmpkit::rank::rank_cmp;
///
/// let cmp = rank_cmp(["low", "med", "high"]);
/// assert_eq!(cmp(&"low", &"high"), Ordering::Less);
/// assert_eq!(cmp(&"high", &"low"), Ordering::Greater);
/// assert_eq!(cmp(&"med", &"med"), Ordering::Equal);
/// ```
///
/// # Panics
///
/// Panics if `order` contains a duplicate. The returned comparator panics when
/// given a value not in `order`. See [`try_rank_cmp`] for an alternative that
/// doesn't panic on duplicates.
pub fn rank_cmp<T, I>(order: I) -> impl Fn(&T, &T) -> Ordering
where
    T: Eq + Hash + fmt::Debug,
    I: IntoIterator<Item = T>,
{
    RankTable::new(order).into_cmp()
}

/// Like [`rank_cmp`], but validates `order` and returns a [`DuplicateValue`]
/// instead of panicking.
///
/// The returned comparator still panics when given a value not in `order`.
pub fn try_rank_cmp<T, I>(order: I) -> Result<impl Fn(&T, &T) -> Ordering, DuplicateValue<T>>
where
    T: Eq + Hash + fmt::Debug,
    I: IntoIterator<Item = T>,
{
    Ok(RankTable::try_new(order)?.into_cmp())
}
