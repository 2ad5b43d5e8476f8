use std::cmp::Ordering;

use super::{validate, Comparator};
use crate::error::{Error, Result};

/// Returns the smallest element of `coll` under `comp`.
///
/// Among elements that compare equal, the first one in `coll` is returned.
///
/// # Examples
/// ```
/// use selector::cs::select::{min, Natural, Reversed};
///
/// let values = [5, 3, 8, 3, 1];
/// assert_eq!(min(&values[..], Natural), Ok(&1));
/// assert_eq!(min(&values[..], Reversed(Natural)), Ok(&8));
/// ```
///
/// # Errors
/// * `InvalidArgument` if `coll` or `comp` is `None`
/// * `EmptyCollection` if `coll` has no elements
///
/// # Complexity
/// * Time: O(n)
/// * Space: O(1)
pub fn min<'a, T, C>(coll: impl Into<Option<&'a [T]>>, comp: impl Into<Option<C>>) -> Result<&'a T>
where
    C: Comparator<T>,
{
    let (coll, comp) = validate(coll.into(), comp.into())?;
    log::trace!("min over {} elements", coll.len());
    extreme(coll, &comp, Ordering::Less).ok_or(Error::EmptyCollection)
}

/// Returns the largest element of `coll` under `comp`.
///
/// Among elements that compare equal, the first one in `coll` is returned.
///
/// # Examples
/// ```
/// use selector::cs::select::{max, Natural};
///
/// let values = [5, 3, 8, 3, 1];
/// assert_eq!(max(&values[..], Natural), Ok(&8));
/// ```
///
/// # Errors
/// * `InvalidArgument` if `coll` or `comp` is `None`
/// * `EmptyCollection` if `coll` has no elements
///
/// # Complexity
/// * Time: O(n)
/// * Space: O(1)
pub fn max<'a, T, C>(coll: impl Into<Option<&'a [T]>>, comp: impl Into<Option<C>>) -> Result<&'a T>
where
    C: Comparator<T>,
{
    let (coll, comp) = validate(coll.into(), comp.into())?;
    log::trace!("max over {} elements", coll.len());
    extreme(coll, &comp, Ordering::Greater).ok_or(Error::EmptyCollection)
}

/// Scans `coll` for the element that beats every other one in the `wins`
/// direction. Only a strict win replaces the current best.
fn extreme<'a, T, C>(coll: &'a [T], comp: &C, wins: Ordering) -> Option<&'a T>
where
    C: Comparator<T>,
{
    coll.iter().reduce(|best, value| {
        if comp.compare(value, best) == wins {
            value
        } else {
            best
        }
    })
}
