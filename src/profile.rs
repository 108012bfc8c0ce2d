use log::{debug, trace};
use num::PrimInt;

use crate::error::MaterialError;


/// One directional sweep toward the peak.
///
/// Cells below `running_max` belong to the open pool.  Their heights are summed into `pool_floor`
/// and the pool is credited as `pool_width * running_max - pool_floor` when a wall at least as
/// high closes it.  Pool sums are kept in `u128` so only the credited volume can overflow.
struct Sweep {
    running_max: u64,
    pool_width: u64,
    pool_floor: u128,
    volume: u64,
}

impl Sweep {
    fn new(wall: u64) -> Self {
        Sweep {
            running_max: wall,
            pool_width: 0,
            pool_floor: 0,
            volume: 0,
        }
    }

    fn step(&mut self, height: u64) -> Result<(), MaterialError> {
        if height < self.running_max {
            self.pool_width += 1;
            self.pool_floor += u128::from(height);
            return Ok(());
        }

        if self.pool_width > 0 {
            let filled = u128::from(self.pool_width) * u128::from(self.running_max);
            // every pooled cell is below running_max, so filled > pool_floor
            let pool = u64::try_from(filled - self.pool_floor).map_err(|_| MaterialError::Overflow)?;
            self.volume = self.volume.checked_add(pool).ok_or(MaterialError::Overflow)?;
            trace!("pool of {} cells closed by wall of height {height}", self.pool_width);
        }
        self.pool_width = 0;
        self.pool_floor = 0;
        self.running_max = height;
        Ok(())
    }
}


/// Widen heights to `u64`, rejecting anything negative.
fn to_levels<T: PrimInt>(heights: &[T]) -> Result<Vec<u64>, MaterialError> {
    heights
        .iter()
        .enumerate()
        .map(|(index, &h)| {
            if h < T::zero() {
                return Err(MaterialError::NegativeHeight { index });
            }
            h.to_u64().ok_or(MaterialError::Overflow)
        })
        .collect()
}


/// Index and value of the highest bar, taking the first one when several share the maximum.
///
/// Returns `None` for an empty slice.
///
/// ```
/// use trapped_material::peak;
///
/// assert_eq!(peak(&[1, 5, 2, 5, 0]), Some((1, 5)));
/// assert_eq!(peak::<u32>(&[]), None);
/// ```
pub fn peak<T: PartialOrd + Copy>(heights: &[T]) -> Option<(usize, T)> {
    let mut iter = heights.iter().copied().enumerate();
    let first = iter.next()?;
    Some(iter.fold(first, |best, (i, h)| if h > best.1 { (i, h) } else { best }))
}


/// Total volume of material trapped between the bars of `heights`.
///
/// The profile is split at its highest bar (the first one on ties).  Walking from each end toward
/// that bar, every wall met is no lower than the ones before it, so a cell below the current wall
/// holds exactly `wall - height` units of material.  The two walks together cover every cell once.
///
/// # Parameters
///
/// - `heights`: bar heights, left to right.  Any primitive integer type, values must be
///   non-negative.
///
/// # Errors
///
/// - [`MaterialError::EmptyProfile`] if `heights` is empty.
/// - [`MaterialError::NegativeHeight`] for the first negative height found.
/// - [`MaterialError::Overflow`] if a height or the running total does not fit in a `u64`.
///
/// # Example
///
/// ```
/// use trapped_material::trapped_volume;
///
/// let volume = trapped_volume(&[4, 2, 0, 3, 2, 5]).expect("valid profile");
/// assert_eq!(volume, 9);
/// ```
pub fn trapped_volume<T: PrimInt>(heights: &[T]) -> Result<u64, MaterialError> {
    let levels = to_levels(heights)?;
    let (peak_index, peak_height) = peak(&levels).ok_or(MaterialError::EmptyProfile)?;
    let last = levels.len() - 1;
    debug!("profile of {} cells peaks at index {peak_index} (height {peak_height})", levels.len());

    // from the left end up to and including the peak
    let mut left = Sweep::new(levels[0]);
    for &h in &levels[1..=peak_index] {
        left.step(h)?;
    }

    // from the right end back down to the peak
    let mut right = Sweep::new(levels[last]);
    for &h in levels[peak_index..last].iter().rev() {
        right.step(h)?;
    }

    left.volume.checked_add(right.volume).ok_or(MaterialError::Overflow)
}


/// Raise the cells visited in order by `cells` to the running wall, returning the total rise.
fn raise_toward_peak<T: PrimInt>(
    profile: &mut [T], levels: &[u64], mut cells: impl Iterator<Item = usize>
) -> Result<u64, MaterialError>
{
    let Some(mut wall) = cells.next() else {
        return Ok(0);
    };
    let mut volume: u64 = 0;
    for i in cells {
        if levels[i] < levels[wall] {
            profile[i] = profile[wall];
            volume = volume.checked_add(levels[wall] - levels[i]).ok_or(MaterialError::Overflow)?;
        } else {
            wall = i;
        }
    }
    Ok(volume)
}


/// Fills the pools of a height profile in place.
///
/// The 1-D version of filling depressions in a DEM: every cell that would hold material is raised
/// to the level the material would reach, after which the profile traps nothing.  Returns the
/// total amount raised, which equals [`trapped_volume`] of the profile before filling.
///
/// Empty profiles and negative heights are rejected before anything is written.
///
/// # Example
///
/// ```
/// use trapped_material::fill_profile;
///
/// let mut profile = vec![3, 0, 2, 0, 4];
/// let added = fill_profile(&mut profile).expect("valid profile");
/// assert_eq!(added, 7);
/// assert_eq!(profile, vec![3, 3, 3, 3, 4]);
/// ```
pub fn fill_profile<T: PrimInt>(profile: &mut [T]) -> Result<u64, MaterialError> {
    let levels = to_levels(profile)?;
    let (peak_index, _) = peak(&levels).ok_or(MaterialError::EmptyProfile)?;
    let last = levels.len() - 1;

    let left = raise_toward_peak(profile, &levels, 0..=peak_index)?;
    let right = raise_toward_peak(profile, &levels, (peak_index..=last).rev())?;
    let volume = left.checked_add(right).ok_or(MaterialError::Overflow)?;
    debug!("filled profile of {} cells, added {volume}", levels.len());
    Ok(volume)
}
