use std::cmp::Ordering;

use super::{validate, Comparator};
use crate::error::{Error, Result};

/// Returns the element holding the `k`-th smallest distinct value of `coll`.
///
/// Ranks are 1-based and count distinct values only: elements that compare
/// equal under `comp` share a rank. In `[5, 5, 3, 3, 1]` the second smallest
/// distinct value is `3`, not the second `1`-ranked position.
///
/// When several elements share the selected value, the first of them in
/// `coll` is returned.
///
/// # Examples
/// ```
/// use selector::cs::select::{kmin, Natural};
///
/// let values = [5, 3, 8, 3, 1];
/// assert_eq!(kmin(&values[..], 2, Natural), Ok(&3));
/// assert_eq!(kmin(&values[..], 4, Natural), Ok(&8));
/// assert!(kmin(&values[..], 5, Natural).is_err());
/// ```
///
/// # Errors
/// * `InvalidArgument` if `coll` or `comp` is `None`
/// * `EmptyCollection` if `coll` has no elements
/// * `NoSuchRank` if `k` is zero or larger than the number of distinct values
///
/// # Complexity
/// * Time: O(n log n)
/// * Space: O(n)
pub fn kmin<'a, T, C>(
    coll: impl Into<Option<&'a [T]>>,
    k: usize,
    comp: impl Into<Option<C>>,
) -> Result<&'a T>
where
    C: Comparator<T>,
{
    let (coll, comp) = validate(coll.into(), comp.into())?;
    log::trace!("kmin k={} over {} elements", k, coll.len());
    distinct_rank(coll, k, &comp, Ordering::Less)
}

/// Returns the element holding the `k`-th largest distinct value of `coll`.
///
/// The mirror image of [`kmin`]: ranks run from the largest value down and
/// equal elements share a rank.
///
/// # Examples
/// ```
/// use selector::cs::select::{kmax, Natural};
///
/// let values = [5, 3, 8, 3, 1];
/// assert_eq!(kmax(&values[..], 1, Natural), Ok(&8));
/// assert_eq!(kmax(&values[..], 3, Natural), Ok(&3));
/// ```
///
/// # Errors
/// * `InvalidArgument` if `coll` or `comp` is `None`
/// * `EmptyCollection` if `coll` has no elements
/// * `NoSuchRank` if `k` is zero or larger than the number of distinct values
///
/// # Complexity
/// * Time: O(n log n)
/// * Space: O(n)
pub fn kmax<'a, T, C>(
    coll: impl Into<Option<&'a [T]>>,
    k: usize,
    comp: impl Into<Option<C>>,
) -> Result<&'a T>
where
    C: Comparator<T>,
{
    let (coll, comp) = validate(coll.into(), comp.into())?;
    log::trace!("kmax k={} over {} elements", k, coll.len());
    distinct_rank(coll, k, &comp, Ordering::Greater)
}

/// Sorts borrowed views of `coll` so that elements ranked first come first
/// (`first` is the ordering a lower rank has against a higher one), collapses
/// runs of equal values to their first element and picks rank `k`.
fn distinct_rank<'a, T, C>(coll: &'a [T], k: usize, comp: &C, first: Ordering) -> Result<&'a T>
where
    C: Comparator<T>,
{
    // a rank past the element count cannot exist, whatever the duplicates
    if k == 0 || k > coll.len() {
        log::debug!("rank {} outside 1..={}", k, coll.len());
        return Err(Error::NoSuchRank(k));
    }

    let mut ranked: Vec<&T> = coll.iter().collect();
    // stable, so equal values keep their input order
    ranked.sort_by(|a, b| {
        let ord = comp.compare(a, b);
        if first == Ordering::Less {
            ord
        } else {
            ord.reverse()
        }
    });
    ranked.dedup_by(|later, earlier| comp.compare(later, earlier) == Ordering::Equal);

    match ranked.get(k - 1) {
        Some(&value) => Ok(value),
        None => {
            log::debug!("rank {} exceeds {} distinct values", k, ranked.len());
            Err(Error::NoSuchRank(k))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::select::{max, min, CompareFn, Natural, Reversed};
    use crate::error::Argument;

    #[test]
    fn test_kmin_scenario() {
        let values = [5, 3, 8, 3, 1];
        assert_eq!(kmin(&values[..], 1, Natural), Ok(&1));
        assert_eq!(kmin(&values[..], 2, Natural), Ok(&3));
        assert_eq!(kmin(&values[..], 3, Natural), Ok(&5));
        assert_eq!(kmin(&values[..], 4, Natural), Ok(&8));
        assert_eq!(kmin(&values[..], 5, Natural), Err(Error::NoSuchRank(5)));
    }

    #[test]
    fn test_kmax_scenario() {
        let values = [5, 3, 8, 3, 1];
        assert_eq!(kmax(&values[..], 1, Natural), Ok(&8));
        assert_eq!(kmax(&values[..], 2, Natural), Ok(&5));
        assert_eq!(kmax(&values[..], 3, Natural), Ok(&3));
        assert_eq!(kmax(&values[..], 4, Natural), Ok(&1));
        assert_eq!(kmax(&values[..], 5, Natural), Err(Error::NoSuchRank(5)));
    }

    #[test]
    fn test_ranks_count_distinct_values() {
        let values = [5, 5, 3, 3, 1];
        assert_eq!(kmin(&values[..], 2, Natural), Ok(&3));
        assert_eq!(kmin(&values[..], 3, Natural), Ok(&5));
        assert_eq!(kmax(&values[..], 2, Natural), Ok(&3));
        assert!(kmin(&values[..], 4, Natural).is_err());
    }

    #[test]
    fn test_all_equal() {
        let values = [7; 6];
        assert_eq!(kmin(&values[..], 1, Natural), Ok(&7));
        assert_eq!(kmax(&values[..], 1, Natural), Ok(&7));
        assert_eq!(kmin(&values[..], 2, Natural), Err(Error::NoSuchRank(2)));
        assert_eq!(kmax(&values[..], 2, Natural), Err(Error::NoSuchRank(2)));
    }

    #[test]
    fn test_zero_and_oversized_rank() {
        let values = [2, 1];
        assert_eq!(kmin(&values[..], 0, Natural), Err(Error::NoSuchRank(0)));
        assert_eq!(kmax(&values[..], 0, Natural), Err(Error::NoSuchRank(0)));
        assert_eq!(kmin(&values[..], 3, Natural), Err(Error::NoSuchRank(3)));
    }

    #[test]
    fn test_first_rank_matches_extremes() {
        let values = [9, -4, 12, 0, -4, 12, 3];
        assert_eq!(kmin(&values[..], 1, Natural), min(&values[..], Natural));
        assert_eq!(kmax(&values[..], 1, Natural), max(&values[..], Natural));
    }

    #[test]
    fn test_custom_order_defines_equality() {
        // values equal by absolute magnitude share a rank
        let values = [-3, 1, 3, -1, 2];
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        assert_eq!(kmin(&values[..], 1, by_abs), Ok(&1));
        assert_eq!(kmin(&values[..], 2, by_abs), Ok(&2));
        assert_eq!(kmin(&values[..], 3, by_abs), Ok(&-3));
        assert_eq!(kmax(&values[..], 1, by_abs), Ok(&-3));
        assert_eq!(kmin(&values[..], 4, by_abs), Err(Error::NoSuchRank(4)));
    }

    #[test]
    fn test_reversed_comparator_swaps_kmin_and_kmax() {
        let values = [4, 10, 6, 10, 2];
        for k in 1..=4 {
            assert_eq!(
                kmin(&values[..], k, Reversed(Natural)),
                kmax(&values[..], k, Natural)
            );
        }
    }

    #[test]
    fn test_empty_and_absent() {
        let empty: [u8; 0] = [];
        assert_eq!(kmin(&empty[..], 1, Natural), Err(Error::EmptyCollection));
        assert_eq!(kmax(&empty[..], 0, Natural), Err(Error::EmptyCollection));
        assert_eq!(
            kmin(None::<&[u8]>, 1, Natural),
            Err(Error::InvalidArgument(Argument::Collection))
        );
        assert_eq!(
            kmax::<u8, CompareFn<u8>>(&[1, 2][..], 1, None),
            Err(Error::InvalidArgument(Argument::Comparator))
        );
    }

    #[test]
    fn test_input_left_unsorted() {
        let values = vec![3, 1, 2, 1];
        assert_eq!(kmin(values.as_slice(), 2, Natural), Ok(&2));
        assert_eq!(values, vec![3, 1, 2, 1]);
    }

    #[test]
    fn test_strings() {
        let words = ["kiwi", "apple", "fig", "apple", "plum"];
        assert_eq!(kmin(&words[..], 2, Natural), Ok(&"fig"));
        assert_eq!(kmax(&words[..], 2, Natural), Ok(&"kiwi"));
    }
}
