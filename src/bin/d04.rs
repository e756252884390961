use lib::prelude::*;

use lib::search;

const WORD: &[u8] = b"XMAS";
const CROSS_WORD: &[u8] = b"MAS";

fn main() -> Result<()> {
    lib::cli::Opts::parse()?;
    let data = lib::input!("d04.txt");

    let grid = Grid::parse(&data)?;
    let axes = Axes::from_grid(&grid);

    let o1 = search::count_words(&axes, WORD)?;
    let o2 = search::count_crosses(&axes, CROSS_WORD)?;

    println!("part 1: {o1}");
    println!("part 2: {o2}");
    Ok(())
}
