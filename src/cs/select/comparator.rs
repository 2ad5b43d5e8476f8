use std::cmp::Ordering;

/// A total order over `T`, supplied by the caller on every selection call.
///
/// Two values are considered the same value when `compare` returns
/// [`Ordering::Equal`], whatever `PartialEq` says about them.
///
/// Any closure or function of type `Fn(&T, &T) -> Ordering` is a comparator.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use selector::cs::select::{Comparator, Natural, Reversed};
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
/// assert_eq!(Reversed(Natural).compare(&1, &2), Ordering::Greater);
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"ab", &"cd"), Ordering::Equal);
/// ```
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self)(a, b)
    }
}

/// Plain function comparator. Mostly useful to name the comparator type when
/// passing an absent one, e.g. `min::<i32, CompareFn<i32>>(values, None)`.
pub type CompareFn<T> = fn(&T, &T) -> Ordering;

/// The natural (`Ord`) order of `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the order of the wrapped comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Orders values by an `Ord` key extracted with `key`.
///
/// # Examples
/// ```
/// use selector::cs::select::{by_key, max};
///
/// let words = ["pear", "fig", "banana"];
/// let longest = max(&words[..], by_key(|w: &&str| w.len())).unwrap();
/// assert_eq!(*longest, "banana");
/// ```
pub fn by_key<T: ?Sized, K: Ord, F: Fn(&T) -> K>(key: F) -> impl Fn(&T, &T) -> Ordering {
    move |a, b| key(a).cmp(&key(b))
}
