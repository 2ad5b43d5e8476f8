//! Order-statistic selection over unordered collections under a caller
//! supplied total order.
//!
//! ```
//! use selector::{ceiling, floor, kmin, max, min, range, Natural};
//!
//! let values = [5, 3, 8, 3, 1];
//! assert_eq!(min(&values[..], Natural), Ok(&1));
//! assert_eq!(max(&values[..], Natural), Ok(&8));
//! assert_eq!(kmin(&values[..], 3, Natural), Ok(&5));
//! assert_eq!(range(&values[..], &2, &5, Natural).map(|r| r.len()), Ok(3));
//! assert_eq!(ceiling(&values[..], &4, Natural), Ok(&5));
//! assert_eq!(floor(&values[..], &4, Natural), Ok(&3));
//! ```

pub mod cs;
pub mod error;

pub use cs::select;
pub use cs::select::{
    by_key, ceiling, floor, kmax, kmin, max, min, range, CompareFn, Comparator, Natural, Reversed,
};
pub use error::{Argument, Error, ErrorKind, Result};
