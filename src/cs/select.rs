//! Order-statistic selection over unordered collections.
//!
//! Every operation takes the collection and the comparator as optional
//! arguments so that an absent argument is reported as
//! [`Error::InvalidArgument`] before the contents are looked at. Plain values
//! convert automatically:
//!
//! ```
//! use selector::cs::select::{kmin, Natural};
//!
//! let values = vec![5, 3, 8, 3, 1];
//! assert_eq!(kmin(values.as_slice(), 2, Natural), Ok(&3));
//! ```
//!
//! An absent argument is written `None`. For the comparator its type has to
//! be named, e.g. `min::<i32, Natural>(values.as_slice(), None)`.
//!
//! The operations only read the collection and hold a shared borrow of it
//! for the duration of the call.

pub mod bound;
pub mod comparator;
pub mod extrema;
pub mod range;
pub mod rank;

pub use bound::{ceiling, floor};
pub use comparator::{by_key, CompareFn, Comparator, Natural, Reversed};
pub use extrema::{max, min};
pub use range::range;
pub use rank::{kmax, kmin};

use crate::error::{Argument, Error, Result};

/// Resolves the optional arguments shared by every operation, rejecting an
/// absent collection first, then an absent comparator, then an empty
/// collection.
fn validate<'a, T, C>(coll: Option<&'a [T]>, comp: Option<C>) -> Result<(&'a [T], C)>
where
    C: Comparator<T>,
{
    let coll = coll.ok_or(Error::InvalidArgument(Argument::Collection))?;
    let comp = comp.ok_or(Error::InvalidArgument(Argument::Comparator))?;
    if coll.is_empty() {
        return Err(Error::EmptyCollection);
    }
    Ok((coll, comp))
}
