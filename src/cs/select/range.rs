use std::cmp::Ordering;

use super::{validate, Comparator};
use crate::error::{Error, Result};

/// Returns every element `e` of `coll` with `low <= e <= high` under `comp`.
///
/// Duplicates are kept. `low` and `high` need not be elements of `coll`. The
/// returned vector is freshly allocated and holds its elements in the order
/// they appear in `coll`.
///
/// # Examples
/// ```
/// use selector::cs::select::{range, Natural};
///
/// let values = [5, 3, 8, 3, 1];
/// assert_eq!(range(&values[..], &2, &5, Natural), Ok(vec![&5, &3, &3]));
/// assert!(range(&values[..], &6, &7, Natural).is_err());
/// ```
///
/// # Errors
/// * `InvalidArgument` if `coll` or `comp` is `None`
/// * `EmptyCollection` if `coll` has no elements
/// * `EmptyRange` if no element lies in `[low, high]`, which includes every
///   call with `low > high`
///
/// # Complexity
/// * Time: O(n)
/// * Space: O(m) for m matching elements
pub fn range<'a, T, C>(
    coll: impl Into<Option<&'a [T]>>,
    low: &T,
    high: &T,
    comp: impl Into<Option<C>>,
) -> Result<Vec<&'a T>>
where
    C: Comparator<T>,
{
    let (coll, comp) = validate(coll.into(), comp.into())?;
    log::trace!("range over {} elements", coll.len());

    let within: Vec<&T> = coll
        .iter()
        .filter(|value| {
            comp.compare(value, low) != Ordering::Less
                && comp.compare(value, high) != Ordering::Greater
        })
        .collect();

    if within.is_empty() {
        log::debug!("no element within range");
        return Err(Error::EmptyRange);
    }
    Ok(within)
}
