use std::fmt;

use num::Zero;

use crate::error::FilterError;

/// An inclusive `[lower, upper]` interval.
///
/// `lower > upper` is accepted as given and simply matches nothing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Range<T> {
    pub lower: T,
    pub upper: T,
}

impl<T: PartialOrd> Range<T> {
    pub fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    /// Both ends are inclusive.
    pub fn contains(&self, v: T) -> bool {
        (self.lower <= v) && (v <= self.upper)
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lower, self.upper)
    }
}

/// A user-supplied bound, before normalization.
///
/// A scalar is an upper bound with an implied lower bound of zero. A list of values
/// comes from the command line or from callers passing a sequence, and is only valid
/// with one or two elements.
#[derive(Clone, Debug, PartialEq)]
pub enum Bounds<T> {
    Scalar(T),
    Values(Vec<T>),
}

impl From<f64> for Bounds<f64> {
    fn from(v: f64) -> Self {
        Bounds::Scalar(v)
    }
}

impl From<u64> for Bounds<u64> {
    fn from(v: u64) -> Self {
        Bounds::Scalar(v)
    }
}

impl<T> From<(T, T)> for Bounds<T> {
    fn from((lower, upper): (T, T)) -> Self {
        Bounds::Values(vec![lower, upper])
    }
}

impl<T> From<Vec<T>> for Bounds<T> {
    fn from(v: Vec<T>) -> Self {
        Bounds::Values(v)
    }
}

impl<T: Clone> From<&[T]> for Bounds<T> {
    fn from(v: &[T]) -> Self {
        Bounds::Values(v.to_vec())
    }
}

/// Converts an optional user bound into a canonical [`Range`].
///
/// * `None` yields `default`.
/// * A scalar `v`, or a single-element list `[v]`, yields `(0, v)`.
/// * A two-element list yields `(v[0], v[1])` verbatim, without reordering.
/// * Any other list length is an [`FilterError::InvalidBounds`].
///
/// `name` identifies the metric in log lines and errors, and matches its CLI flag.
pub fn normalize<T>(
    value: Option<&Bounds<T>>,
    default: Range<T>,
    name: &'static str,
) -> Result<Range<T>, FilterError>
where
    T: Copy + PartialOrd + Zero + fmt::Display,
{
    let range = match value {
        None => return Ok(default),
        Some(Bounds::Scalar(v)) => Range::new(T::zero(), *v),
        Some(Bounds::Values(v)) => match v.as_slice() {
            [upper] => Range::new(T::zero(), *upper),
            [lower, upper] => Range::new(*lower, *upper),
            _ => {
                error!("Invalid {name} bounds: expected one or two values, got {}", v.len());
                return Err(FilterError::InvalidBounds { name, count: v.len() });
            }
        },
    };

    match value {
        Some(Bounds::Values(v)) if v.len() == 2 => info!("{name} bounds set to range {range}"),
        _ => info!("{name} bounds converted to range {range}"),
    }
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_is_upper_bound() {
        let r = normalize(Some(&Bounds::from(50.0)), Range::new(0.0, 100.0), "gc_content").unwrap();
        assert_eq!(r, Range::new(0.0, 50.0));
    }

    #[test]
    fn single_value_matches_scalar() {
        let scalar = normalize(Some(&Bounds::from(50u64)), Range::new(0, 10), "length").unwrap();
        let single = normalize(Some(&Bounds::from(vec![50u64])), Range::new(0, 10), "length").unwrap();
        assert_eq!(scalar, single);
    }

    #[test]
    fn pair_is_kept_verbatim() {
        let r = normalize(Some(&Bounds::from((70.0, 30.0))), Range::new(0.0, 100.0), "gc_content")
            .unwrap();
        assert_eq!(r, Range::new(70.0, 30.0));
        assert!(!r.contains(50.0));
    }

    #[test]
    fn missing_uses_default() {
        let r = normalize::<u64>(None, Range::new(0, 1 << 32), "length").unwrap();
        assert_eq!(r, Range::new(0, 1 << 32));
    }

    #[test]
    fn wrong_arity_is_rejected() {
        for values in [vec![], vec![1u64, 2, 3]] {
            let count = values.len();
            let err = normalize(Some(&Bounds::from(values)), Range::new(0, 10), "length").unwrap_err();
            assert!(matches!(
                err,
                FilterError::InvalidBounds { name: "length", count: c } if c == count
            ));
        }
    }

    #[test]
    fn contains_is_inclusive() {
        let r = Range::new(30.0, 70.0);
        assert!(r.contains(30.0));
        assert!(r.contains(70.0));
        assert!(!r.contains(29.999));
        assert!(!r.contains(70.001));
    }
}
