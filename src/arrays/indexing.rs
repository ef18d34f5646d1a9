/*!
 * # Indexing
 *
 * Every iteration-based operation on an array (copying, transforming,
 * reducing, filtering, transposing) walks the legal index space of the
 * array's header with a [Subscripts] cursor rather than looping over nested
 * axes by hand. The cursor holds a current subscript per axis and advances
 * in a carry-propagating fashion, like incrementing a multi-digit counter
 * where each digit has its own base.
 *
 * Two knobs shape a walk. The **carry order** decides which axis is
 * incremented first and where carries go: by default the last axis varies
 * fastest (row-major order), a single axis can be made the fastest varying
 * one (which is how per-axis reductions see each run of elements
 * consecutively), or a full axis order can be given (which is how transpose
 * reads its source in permuted order). The **major axis** is the one axis
 * whose exhaustion ends the whole walk; every other axis wraps back to its
 * start and carries onward when it fills up.
 */

use crate::arrays::dimensions::wrap;

/**
 * A bidirectional cursor over the subscripts of an N dimensional index
 * space.
 *
 * A cursor is valid while its major axis lies strictly inside that axis'
 * exclusive bounds; [advance](Subscripts::advance) past the end or
 * [retreat](Subscripts::retreat) before the beginning makes it invalid, and
 * stepping back in the opposite direction makes it valid again. A freshly
 * constructed cursor over an empty index space is permanently invalid.
 *
 * Cursors are cheap to clone, which is how a traversal can be snapshotted
 * and [reset](Subscripts::reset) restores the starting position.
 */
#[derive(Clone, Debug)]
pub struct Subscripts {
    subscripts: Vec<i64>,
    start: Vec<i64>,
    // per axis exclusive bounds: valid positions lie strictly between
    lower: Vec<i64>,
    upper: Vec<i64>,
    // the axis each carry chain begins at
    axis: usize,
    order: Option<Vec<usize>>,
    major: usize,
}

impl Subscripts {
    /**
     * A row-major walk over every subscript from all zeros (inclusive) to
     * the given lengths (exclusive): the last axis varies fastest.
     */
    pub fn over(to: &[i64]) -> Subscripts {
        Subscripts::walk(&[], &[], to, None, None)
    }

    /**
     * A walk over every subscript in which the given axis varies fastest.
     * The axis wraps against the number of axes.
     *
     * Per-axis reduction uses this: along axis `a`, each `to[a]` consecutive
     * cursor positions form one run of elements to fold.
     */
    pub fn along(to: &[i64], axis: i64) -> Subscripts {
        Subscripts::walk(&[], &[], to, Some(axis), None)
    }

    /**
     * A walk over every subscript carrying in the given axis order: the last
     * entry of `order` varies fastest and the first entry is the major axis.
     * Order entries wrap against the number of axes. An order listing fewer
     * axes than the index space falls back to the row-major walk.
     */
    pub fn ordered(to: &[i64], order: &[i64]) -> Subscripts {
        Subscripts::walk(&[], &[], to, None, Some(order))
    }

    /**
     * A walk with full control of the starting subscripts and the exclusive
     * bounds of every axis.
     *
     * Any of the three slices may be empty: an omitted start is all zeros,
     * omitted lower bounds sit one below the start, and omitted upper bounds
     * default to 1 per axis. The number of axes is the longest of the three.
     */
    pub fn bounded(
        start: &[i64],
        lower_excluded: &[i64],
        upper_excluded: &[i64],
        axis: i64,
    ) -> Subscripts {
        Subscripts::walk(start, lower_excluded, upper_excluded, Some(axis), None)
    }

    /**
     * A walk with full control of the starting subscripts and the exclusive
     * bounds of every axis, carrying in the given axis order as for
     * [ordered](Subscripts::ordered).
     */
    pub fn bounded_ordered(
        start: &[i64],
        lower_excluded: &[i64],
        upper_excluded: &[i64],
        order: &[i64],
    ) -> Subscripts {
        Subscripts::walk(start, lower_excluded, upper_excluded, None, Some(order))
    }

    fn walk(
        start: &[i64],
        lower_excluded: &[i64],
        upper_excluded: &[i64],
        axis: Option<i64>,
        order: Option<&[i64]>,
    ) -> Subscripts {
        let rank = start
            .len()
            .max(lower_excluded.len())
            .max(upper_excluded.len());
        if rank == 0 {
            return Subscripts {
                subscripts: Vec::new(),
                start: Vec::new(),
                lower: Vec::new(),
                upper: Vec::new(),
                axis: 0,
                order: None,
                major: 0,
            };
        }

        let mut starting = vec![0; rank];
        starting[..start.len()].copy_from_slice(start);

        let lower = if !lower_excluded.is_empty() {
            let mut lower = vec![-1; rank];
            lower[..lower_excluded.len()].copy_from_slice(lower_excluded);
            lower
        } else if !start.is_empty() {
            starting.iter().map(|&s| s - 1).collect()
        } else {
            vec![-1; rank]
        };

        let mut upper = vec![1; rank];
        upper[..upper_excluded.len()].copy_from_slice(upper_excluded);

        let (carry_axis, order) = match (axis, order) {
            (_, Some(order)) if order.len() >= rank => {
                let wrapped = order[..rank]
                    .iter()
                    .map(|&position| wrap(position, rank as i64) as usize)
                    .collect::<Vec<usize>>();
                (0, Some(wrapped))
            }
            (Some(axis), _) => (wrap(axis, rank as i64) as usize, None),
            // without an explicit carry order the last axis varies fastest
            (None, _) => (rank - 1, None),
        };

        let major = find_major_axis(carry_axis, &lower, &upper);

        Subscripts {
            subscripts: starting.clone(),
            start: starting,
            lower,
            upper,
            axis: carry_axis,
            order,
            major,
        }
    }

    /**
     * True while the major axis lies strictly inside its bounds. Other axes
     * are allowed to sit on a bound transiently; only the major axis ends
     * the walk.
     */
    pub fn is_valid(&self) -> bool {
        if self.subscripts.is_empty() {
            return false;
        }
        let major = match &self.order {
            Some(order) => order[0],
            None => self.major,
        };
        self.subscripts[major] < self.upper[major] && self.subscripts[major] > self.lower[major]
    }

    /**
     * The current subscript per axis.
     */
    pub fn subscripts(&self) -> &[i64] {
        &self.subscripts
    }

    /**
     * Steps forward one position, carrying filled axes back to their start
     * and onward. The major axis carries last; filling it invalidates the
     * cursor.
     */
    pub fn advance(&mut self) {
        if self.subscripts.is_empty() {
            return;
        }
        let Subscripts {
            subscripts,
            lower,
            upper,
            axis,
            order,
            major,
            ..
        } = self;
        match order {
            Some(order) => {
                let major_axis = order[0];
                for position in (0..order.len()).rev() {
                    if !increment(subscripts, lower, upper, order[position], major_axis) {
                        return;
                    }
                }
            }
            None => {
                let rank = subscripts.len();
                if !increment(subscripts, lower, upper, *axis, *major) {
                    return;
                }
                for i in ((*axis + 1)..rank).rev() {
                    if !increment(subscripts, lower, upper, i, *major) {
                        return;
                    }
                }
                for i in (0..*axis).rev() {
                    if !increment(subscripts, lower, upper, i, *major) {
                        return;
                    }
                }
            }
        }
    }

    /**
     * Steps backward one position, borrowing through emptied axes. The
     * mirror image of [advance](Subscripts::advance).
     */
    pub fn retreat(&mut self) {
        if self.subscripts.is_empty() {
            return;
        }
        let Subscripts {
            subscripts,
            lower,
            upper,
            axis,
            order,
            major,
            ..
        } = self;
        match order {
            Some(order) => {
                let major_axis = order[0];
                for position in (0..order.len()).rev() {
                    if !decrement(subscripts, lower, upper, order[position], major_axis) {
                        return;
                    }
                }
            }
            None => {
                let rank = subscripts.len();
                if !decrement(subscripts, lower, upper, *axis, *major) {
                    return;
                }
                for i in ((*axis + 1)..rank).rev() {
                    if !decrement(subscripts, lower, upper, i, *major) {
                        return;
                    }
                }
                for i in (0..*axis).rev() {
                    if !decrement(subscripts, lower, upper, i, *major) {
                        return;
                    }
                }
            }
        }
    }

    /**
     * Steps forward by the given count, implemented as repeated unit
     * advances. Counts of zero or less do nothing.
     */
    pub fn advance_by(&mut self, count: i64) {
        for _ in 0..count {
            self.advance();
        }
    }

    /**
     * Steps backward by the given count, implemented as repeated unit
     * retreats. Counts of zero or less do nothing.
     */
    pub fn retreat_by(&mut self, count: i64) {
        for _ in 0..count {
            self.retreat();
        }
    }

    /**
     * Restores the cursor to its starting subscripts.
     */
    pub fn reset(&mut self) {
        self.subscripts.copy_from_slice(&self.start);
    }
}

// Steps one axis forward. Returns true when the axis filled up and the carry
// should continue to the next axis in the chain; a non-major axis that fills
// wraps back to its lowest valid position, the major axis stays put so the
// walk can observe its exhaustion.
fn increment(subscripts: &mut [i64], lower: &[i64], upper: &[i64], i: usize, major: usize) -> bool {
    if subscripts[i] < upper[i] {
        subscripts[i] += 1;
    }
    let filled = subscripts[i] == upper[i];
    if filled && i != major {
        subscripts[i] = lower[i] + 1;
    }
    filled
}

fn decrement(subscripts: &mut [i64], lower: &[i64], upper: &[i64], i: usize, major: usize) -> bool {
    if subscripts[i] > lower[i] {
        subscripts[i] -= 1;
    }
    let emptied = subscripts[i] == lower[i];
    if emptied && i != major {
        subscripts[i] = if upper[i] != 0 { upper[i] - 1 } else { 0 };
    }
    emptied
}

// The major axis is the first axis of the carry chain's tail: axis 0 when
// the carry begins on a later axis, else axis 1 when there is one. If the
// candidate has degenerate bounds the first axis with a non zero upper bound
// takes over, falling back to axis 0.
fn find_major_axis(carry_axis: usize, lower: &[i64], upper: &[i64]) -> usize {
    let rank = upper.len();
    let mut major = if carry_axis > 0 {
        0
    } else if rank > 1 {
        1
    } else {
        0
    };
    if lower[major] == -1 && upper[major] == 0 {
        match (major + 1..rank).find(|&i| upper[i] != 0) {
            Some(found) => major = found,
            None => major = 0,
        }
    }
    major
}
