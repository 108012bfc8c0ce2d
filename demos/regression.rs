use anyhow::Result;
use trapped_material::trapped_volume;

// report only, a failing case never changes the exit status
fn check(heights: &[i32], expected: u64, line: u32) {
    match trapped_volume(heights) {
        Ok(volume) if volume == expected => println!("Test passed!"),
        Ok(_) => println!("Test failed on line {line}!"),
        Err(e) => println!("Test failed on line {line}! ({e})"),
    }
}

fn main() -> Result<()> {
    check(&[0, 1, 0, 2, 1, 0, 3, 1, 2, 0], 5, line!());
    check(&[0, 3, 2, 0, 3, 2, 0, 4, 2, 0], 8, line!());

    check(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1], 6, line!());
    check(&[0, 1, 0, 2, 1, 0, 3, 1, 0, 1, 2], 8, line!());
    check(&[4, 2, 0, 3, 2, 5], 9, line!());

    check(&[6, 4, 2, 0, 3, 2, 0, 3, 1, 4, 5, 3, 2, 7, 5, 3, 0, 1, 2, 1, 3, 4, 6, 8, 1, 3], 83, line!());
    check(&[6, 2, 1, 1, 8, 0, 5, 5, 0, 1, 8, 9, 6, 9, 4, 8, 0, 0], 50, line!());

    Ok(())
}
