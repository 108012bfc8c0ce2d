use anyhow::Result;
use ndarray::{Array2, array};
use trapped_material::{fill_rows, row_volumes};

fn main() -> Result<()> {
    let mut sections: Array2<u32> = array![
        [3, 0, 2, 0, 4, 1, 1],
        [0, 1, 0, 2, 1, 0, 3],
        [5, 4, 3, 2, 1, 0, 0],
    ];
    println!("Measuring {sections}");
    let volumes = row_volumes(&sections)?;
    println!("trapped per row {volumes}");

    let added = fill_rows(&mut sections)?;
    println!("added per row {added}");
    println!("now is {sections}");

    Ok(())
}
