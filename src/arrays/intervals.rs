/*!
 * Ways to describe ranges over the axes of an array.
 */

use crate::arrays::dimensions::wrap;

use std::ops::{Range, RangeInclusive};

/**
 * A range over one axis of an array: a start position, an **inclusive** stop
 * position, and a step.
 *
 * An interval spanning positions `start..=stop` with step `s` selects
 * `ceil((stop - start + 1) / s)` positions. Negative start and stop values
 * wrap against the axis length when the interval is applied, so `-1` means
 * the last position along the axis.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub start: i64,
    pub stop: i64,
    pub step: i64,
}

impl Interval {
    pub fn new(start: i64, stop: i64, step: i64) -> Interval {
        Interval { start, stop, step }
    }

    /**
     * An interval selecting the single position `index`.
     */
    pub fn at(index: i64) -> Interval {
        Interval {
            start: index,
            stop: index,
            step: 1,
        }
    }

    /**
     * An interval selecting every position from `start` to `stop` inclusive.
     */
    pub fn span(start: i64, stop: i64) -> Interval {
        Interval {
            start,
            stop,
            step: 1,
        }
    }

    /**
     * Wraps the start and stop positions into `[0, length)` by floor modulo.
     * The step is unchanged.
     */
    pub fn wrapped(self, length: i64) -> Interval {
        Interval {
            start: wrap(self.start, length),
            stop: wrap(self.stop, length),
            step: self.step,
        }
    }

    /**
     * Swaps the start and stop positions and negates the step.
     */
    pub fn reversed(self) -> Interval {
        Interval {
            start: self.stop,
            stop: self.start,
            step: -self.step,
        }
    }

    /**
     * The ascending equivalent of this interval: descending intervals are
     * reversed, ascending ones are returned unchanged.
     */
    pub fn forward(self) -> Interval {
        if self.step < 0 { self.reversed() } else { self }
    }
}

impl Default for Interval {
    fn default() -> Interval {
        Interval {
            start: 0,
            stop: 0,
            step: 1,
        }
    }
}

impl From<i64> for Interval {
    fn from(index: i64) -> Interval {
        Interval::at(index)
    }
}

impl From<(i64, i64)> for Interval {
    fn from((start, stop): (i64, i64)) -> Interval {
        Interval::span(start, stop)
    }
}

impl From<(i64, i64, i64)> for Interval {
    fn from((start, stop, step): (i64, i64, i64)) -> Interval {
        Interval::new(start, stop, step)
    }
}

impl From<RangeInclusive<i64>> for Interval {
    fn from(range: RangeInclusive<i64>) -> Interval {
        Interval::span(*range.start(), *range.end())
    }
}

impl From<Range<i64>> for Interval {
    fn from(range: Range<i64>) -> Interval {
        Interval::span(range.start, range.end - 1)
    }
}

#[test]
fn construction() {
    let interval = Interval::default();
    assert_eq!((0, 0, 1), (interval.start, interval.stop, interval.step));
    let interval = Interval::at(1);
    assert_eq!((1, 1, 1), (interval.start, interval.stop, interval.step));
    let interval = Interval::span(1, 2);
    assert_eq!((1, 2, 1), (interval.start, interval.stop, interval.step));
    let interval = Interval::new(1, 2, 3);
    assert_eq!((1, 2, 3), (interval.start, interval.stop, interval.step));
    assert_eq!(Interval::at(4), 4.into());
    assert_eq!(Interval::span(0, 2), (0..3).into());
    assert_eq!(Interval::span(0, 2), (0..=2).into());
}

#[test]
fn normalization() {
    assert_eq!(Interval::new(2, 1, -3), Interval::new(1, 2, 3).reversed());
    assert_eq!(Interval::new(4, 1, -1), Interval::new(-26, 26, -1).wrapped(5));
    assert_eq!(Interval::new(1, 2, 3), Interval::new(1, 2, 3).forward());
    assert_eq!(Interval::new(1, 2, 3), Interval::new(2, 1, -3).forward());
}
