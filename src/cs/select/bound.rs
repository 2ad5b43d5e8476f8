use std::cmp::Ordering;

use super::{validate, Comparator};
use crate::error::{Error, Result};

/// Returns the smallest element of `coll` that is greater than or equal to
/// `key` under `comp`. `key` need not be an element of `coll`.
///
/// When several elements share the answer's value, the last of them in
/// `coll` is returned.
///
/// # Examples
/// ```
/// use selector::cs::select::{ceiling, Natural};
///
/// let values = [5, 3, 8, 3, 1];
/// assert_eq!(ceiling(&values[..], &4, Natural), Ok(&5));
/// assert_eq!(ceiling(&values[..], &5, Natural), Ok(&5));
/// assert!(ceiling(&values[..], &9, Natural).is_err());
/// ```
///
/// # Errors
/// * `InvalidArgument` if `coll` or `comp` is `None`
/// * `EmptyCollection` if `coll` has no elements
/// * `NoCeiling` if every element is less than `key`
///
/// # Complexity
/// * Time: O(n)
/// * Space: O(1)
pub fn ceiling<'a, T, C>(
    coll: impl Into<Option<&'a [T]>>,
    key: &T,
    comp: impl Into<Option<C>>,
) -> Result<&'a T>
where
    C: Comparator<T>,
{
    let (coll, comp) = validate(coll.into(), comp.into())?;
    log::trace!("ceiling over {} elements", coll.len());
    nearest(coll, key, &comp, Ordering::Greater).ok_or_else(|| {
        log::debug!("key is above every element");
        Error::NoCeiling
    })
}

/// Returns the largest element of `coll` that is less than or equal to `key`
/// under `comp`. `key` need not be an element of `coll`.
///
/// When several elements share the answer's value, the last of them in
/// `coll` is returned.
///
/// # Examples
/// ```
/// use selector::cs::select::{floor, Natural};
///
/// let values = [5, 3, 8, 3, 1];
/// assert_eq!(floor(&values[..], &4, Natural), Ok(&3));
/// assert!(floor(&values[..], &0, Natural).is_err());
/// ```
///
/// # Errors
/// * `InvalidArgument` if `coll` or `comp` is `None`
/// * `EmptyCollection` if `coll` has no elements
/// * `NoFloor` if every element is greater than `key`
///
/// # Complexity
/// * Time: O(n)
/// * Space: O(1)
pub fn floor<'a, T, C>(
    coll: impl Into<Option<&'a [T]>>,
    key: &T,
    comp: impl Into<Option<C>>,
) -> Result<&'a T>
where
    C: Comparator<T>,
{
    let (coll, comp) = validate(coll.into(), comp.into())?;
    log::trace!("floor over {} elements", coll.len());
    nearest(coll, key, &comp, Ordering::Less).ok_or_else(|| {
        log::debug!("key is below every element");
        Error::NoFloor
    })
}

/// Single pass for the element closest to `key` on the `side` of it (or equal
/// to it). A candidate at least as close as the current best replaces it, so
/// ties resolve to the last one seen.
fn nearest<'a, T, C>(coll: &'a [T], key: &T, comp: &C, side: Ordering) -> Option<&'a T>
where
    C: Comparator<T>,
{
    coll.iter()
        .filter(|value| comp.compare(value, key) != side.reverse())
        .fold(None, |best, value| match best {
            Some(best) if comp.compare(value, best) == side => Some(best),
            _ => Some(value),
        })
}
