use log::debug;
use ndarray::{Array1, Array2, Axis};
use num::PrimInt;
use rayon::prelude::*;

use crate::error::MaterialError;
use crate::profile::{fill_profile, trapped_volume};


/// Trapped volume of every row of `grid`, each row treated as an independent profile.
///
/// Rows are measured in parallel.  Material never moves between rows, so this is a stack of 1-D
/// cross sections rather than 2-D terrain.
///
/// # Errors
///
/// A failing row is reported as [`MaterialError::Row`] wrapping the row's own error.  A
/// grid with no columns fails with [`MaterialError::EmptyProfile`] inside that wrapper.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use trapped_material::row_volumes;
///
/// let grid = array![
///     [4, 2, 0, 3, 2, 5],
///     [1, 2, 3, 4, 5, 6],
/// ];
/// let volumes = row_volumes(&grid).expect("valid grid");
/// assert_eq!(volumes, array![9, 0]);
/// ```
pub fn row_volumes<T: PrimInt + Sync>(grid: &Array2<T>) -> Result<Array1<u64>, MaterialError> {
    debug!("measuring {} rows of {} cells", grid.nrows(), grid.ncols());
    let volumes = (0..grid.nrows())
        .into_par_iter()
        .map(|row| {
            let cells = grid.row(row);
            let volume = match cells.as_slice() {
                Some(contiguous) => trapped_volume(contiguous),
                None => trapped_volume(&cells.to_vec()),
            };
            volume.map_err(|e| e.in_row(row))
        })
        .collect::<Result<Vec<u64>, MaterialError>>()?;
    Ok(Array1::from(volumes))
}


/// Fills every row of `grid` in place with [`fill_profile`], returning the volume added per row.
///
/// Rows are filled in parallel.  A row that fails is left as it was; other rows may already have
/// been filled when the error is returned.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use trapped_material::fill_rows;
///
/// let mut grid = array![
///     [3, 0, 2, 0, 4],
///     [0, 1, 0, 2, 0],
/// ];
/// let added = fill_rows(&mut grid).expect("valid grid");
/// assert_eq!(added, array![7, 1]);
/// assert_eq!(grid, array![
///     [3, 3, 3, 3, 4],
///     [0, 1, 1, 2, 0],
/// ]);
/// ```
pub fn fill_rows<T: PrimInt + Send + Sync>(grid: &mut Array2<T>) -> Result<Array1<u64>, MaterialError> {
    debug!("filling {} rows of {} cells", grid.nrows(), grid.ncols());
    let added = grid
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .map(|(row, mut cells)| {
            let volume = if let Some(contiguous) = cells.as_slice_mut() {
                fill_profile(contiguous)
            } else {
                // column-major storage, fill a copy and write it back
                let mut copy = cells.to_vec();
                let volume = fill_profile(&mut copy);
                cells.assign(&Array1::from(copy));
                volume
            };
            volume.map_err(|e| e.in_row(row))
        })
        .collect::<Result<Vec<u64>, MaterialError>>()?;
    Ok(Array1::from(added))
}
