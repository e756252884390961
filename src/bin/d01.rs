use lib::prelude::*;

fn main() -> Result<()> {
    lib::cli::Opts::parse()?;
    let data = lib::input!("d01.txt");

    let mut a = ArrayVec::<u32, 1024>::new();
    let mut b = ArrayVec::<u32, 1024>::new();

    for line in data.lines() {
        let mut it = line.fields();

        let (Some(left), Some(right)) = (it.next(), it.next()) else {
            bail!("expected two columns: {:?}", BStr::new(line));
        };

        a.try_push(left.to_str()?.parse()?)?;
        b.try_push(right.to_str()?.parse()?)?;
    }

    a.sort();
    b.sort();

    let mut o1 = 0;
    let mut o2 = 0;

    for (l, r) in a.iter().zip(b.iter()) {
        o1 += l.max(r) - l.min(r);

        let mut c = 0;

        for r in b.iter() {
            if l == r {
                c += 1;
            }
        }

        o2 += l * c;
    }

    println!("part 1: {o1}");
    println!("part 2: {o2}");
    Ok(())
}
