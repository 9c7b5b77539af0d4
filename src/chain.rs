//! Lexicographic composition of comparators.
//!
//! The first comparator decides, and every following one is only consulted
//! when all earlier ones reported [`Ordering::Equal`]. An empty chain considers
//! every pair of values equal.

use std::{cmp::Ordering, fmt};

type BoxedCmp<'a, T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync + 'a>;

fn compare_all<T, F>(cmps: &[F], a: &T, b: &T) -> Ordering
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    for cmp in cmps {
        match cmp(a, b) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Combines `cmps` into one comparator returning the first result which isn't
/// [`Ordering::Equal`].
///
/// All comparators must have the same type, use [`Chain`] to mix closures.
///
/// ```
/// use std::cmp::Ordering;
/// use cmpkit::chain::chain_cmp;
///
/// fn by_len(a: &String, b: &String) -> Ordering {
///     a.len().cmp(&b.len())
/// }
///
/// fn by_text(a: &String, b: &String) -> Ordering {
///     a.cmp(b)
/// }
///
/// let mut words: Vec<String> = ["bb", "c", "a", "aa"].map(String::from).into();
/// words.sort_by(chain_cmp([by_len as fn(&String, &String) -> Ordering, by_text]));
/// assert_eq!(words, ["a", "c", "aa", "bb"]);
/// ```
pub fn chain_cmp<T, F, I>(cmps: I) -> impl Fn(&T, &T) -> Ordering
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
    I: IntoIterator<Item = F>,
{
    let cmps: Vec<F> = cmps.into_iter().collect();
    move |a: &T, b: &T| compare_all(&cmps, a, b)
}

/// A list of comparators applied in order, built with [`Chain::then`].
pub struct Chain<'a, T: ?Sized> {
    cmps: Vec<BoxedCmp<'a, T>>,
}

impl<'a, T: ?Sized> Chain<'a, T> {
    /// An empty chain, comparing everything as equal.
    pub fn new() -> Self {
        Chain { cmps: Vec::new() }
    }

    /// Add `cmp` as the last tie breaker.
    pub fn then<F>(mut self, cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'a,
    {
        self.cmps.push(Box::new(cmp));
        self
    }

    /// Add a tie breaker comparing the keys extracted by `key`.
    pub fn then_by_key<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'a,
    {
        self.then(move |a: &T, b: &T| key(a).cmp(&key(b)))
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        compare_all(&self.cmps, a, b)
    }

    /// Number of comparators in the chain.
    pub fn len(&self) -> usize {
        self.cmps.len()
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.cmps.is_empty()
    }

    pub fn into_cmp(self) -> impl Fn(&T, &T) -> Ordering + Send + Sync + 'a
    where
        T: 'a,
    {
        move |a: &T, b: &T| self.compare(a, b)
    }
}

impl<'a, T: ?Sized> Default for Chain<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: ?Sized> fmt::Debug for Chain<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain").field("len", &self.cmps.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use quickcheck::{Arbitrary, Gen};

    use super::*;
    use crate::{convert::into_cmp, rank::rank_cmp};

    #[derive(Clone, Debug, PartialEq)]
    struct User {
        first: String,
        last: String,
    }

    impl User {
        fn new(first: &str, last: &str) -> Self {
            User { first: first.to_owned(), last: last.to_owned() }
        }
    }

    impl Arbitrary for User {
        fn arbitrary(g: &mut Gen) -> Self {
            // Few names so ties are common
            let names = ["Alice", "Bob", "John", "Doe", "Adams"];
            User {
                first: g.choose(&names).unwrap().to_string(),
                last: g.choose(&names).unwrap().to_string(),
            }
        }
    }

    fn by_last(a: &User, b: &User) -> Ordering {
        a.last.cmp(&b.last)
    }

    fn by_first(a: &User, b: &User) -> Ordering {
        a.first.cmp(&b.first)
    }

    type UserCmp = fn(&User, &User) -> Ordering;

    #[test]
    fn lexicographic() {
        let cmp = chain_cmp([by_last as UserCmp, by_first]);
        let cases = [
            (User::new("John", "Doe"), User::new("John", "Doe"), Ordering::Equal),
            // first name breaks the tie
            (User::new("Alice", "Doe"), User::new("Bob", "Doe"), Ordering::Less),
            (User::new("Bob", "Doe"), User::new("Alice", "Doe"), Ordering::Greater),
            // last name decides
            (User::new("John", "Adams"), User::new("John", "Doe"), Ordering::Less),
            (User::new("John", "Doe"), User::new("John", "Adams"), Ordering::Greater),
        ];
        for (a, b, goal) in cases {
            assert_eq!(cmp(&a, &b), goal, "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn primary_wins_over_secondary() {
        let cmp = chain_cmp([by_last as UserCmp, by_first]);
        assert_eq!(cmp(&User::new("Zed", "Adams"), &User::new("Alice", "Doe")), Ordering::Less);
    }

    #[test]
    fn empty_is_equal() {
        let cmp = chain_cmp(Vec::<UserCmp>::new());
        assert_eq!(cmp(&User::new("A", "B"), &User::new("C", "D")), Ordering::Equal);

        let chain = Chain::<i32>::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert_eq!(chain.compare(&1, &2), Ordering::Equal);
    }

    #[test]
    fn stops_at_first_decision() {
        let cmp = Chain::<i32>::new()
            .then(|a: &i32, b: &i32| a.cmp(b))
            .then(|_: &i32, _: &i32| panic!("tie breaker called without a tie"))
            .into_cmp();
        assert_eq!(cmp(&1, &2), Ordering::Less);
        assert_eq!(cmp(&3, &2), Ordering::Greater);
    }

    #[test]
    fn builder_mixes_closures() {
        let chain = Chain::<User>::new()
            .then_by_key(|u: &User| u.last.clone())
            .then(into_cmp(|a: &User, b: &User| a.first < b.first));
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.compare(&User::new("Alice", "Doe"), &User::new("Bob", "Doe")), Ordering::Less);
        assert_eq!(chain.compare(&User::new("John", "Adams"), &User::new("John", "Doe")), Ordering::Less);
        assert_eq!(chain.compare(&User::new("John", "Doe"), &User::new("John", "Doe")), Ordering::Equal);
    }

    type Task = (&'static str, &'static str);

    #[test]
    fn rank_then_name() {
        let priority = rank_cmp(["low", "medium", "high"]);
        let cmp = Chain::<Task>::new()
            .then(move |a: &Task, b: &Task| priority(&a.0, &b.0))
            .then_by_key(|t: &Task| t.1.len())
            .into_cmp();
        let mut tasks = vec![("high", "deploy"), ("low", "lint"), ("high", "fix"), ("medium", "review")];
        tasks.sort_by(&cmp);
        assert_eq!(tasks, [("low", "lint"), ("medium", "review"), ("high", "fix"), ("high", "deploy")]);
    }

    #[test]
    fn shared_between_threads() {
        let chain = Chain::<u32>::new().then_by_key(|x: &u32| x % 3).then(|a: &u32, b: &u32| a.cmp(b));
        thread::scope(|s| {
            for t in 0..4u32 {
                let chain = &chain;
                s.spawn(move || {
                    for i in 0..30 {
                        let goal = (t % 3, t).cmp(&(i % 3, i));
                        assert_eq!(chain.compare(&t, &i), goal);
                    }
                });
            }
        });
    }

    #[test]
    fn debug_shows_len() {
        let chain = Chain::<str>::new().then(|a: &str, b: &str| a.cmp(b));
        assert_eq!(format!("{:?}", chain), "Chain { len: 1 }");
    }

    #[quickcheck]
    fn matches_tuple_order(a: User, b: User) -> bool {
        let cmp = chain_cmp([by_last as UserCmp, by_first]);
        cmp(&a, &b) == (&a.last, &a.first).cmp(&(&b.last, &b.first))
    }

    #[quickcheck]
    fn builder_matches_function(a: User, b: User) -> bool {
        let chain = Chain::<User>::new().then(by_last).then(by_first);
        let cmp = chain_cmp([by_last as UserCmp, by_first]);
        chain.compare(&a, &b) == cmp(&a, &b)
    }

    #[quickcheck]
    fn repeated_calls_agree(a: User, b: User) -> bool {
        let cmp = chain_cmp([by_first as UserCmp, by_last]);
        cmp(&a, &b) == cmp(&a, &b) && cmp(&a, &b) == cmp(&b, &a).reverse()
    }
}
