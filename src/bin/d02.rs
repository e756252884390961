use lib::prelude::*;

fn main() -> Result<()> {
    lib::cli::Opts::parse()?;
    let data = lib::input!("d02.txt");

    let mut o1 = 0;
    let mut o2 = 0;

    for line in data.lines() {
        let mut values = ArrayVec::<u32>::new();

        for field in line.fields() {
            values.try_push(field.to_str()?.parse()?)?;
        }

        if values.is_empty() {
            continue;
        }

        ensure!(values.len() > 1, "invalid input");

        if safe(&values) {
            o1 += 1;
            o2 += 1;
            continue;
        }

        // The dampener tolerates one bad level, wherever it sits.
        let dampened = (0..values.len()).any(|redact| {
            let mut v = ArrayVec::<u32>::new();

            v.extend(
                values
                    .iter()
                    .enumerate()
                    .filter(|&(n, _)| n != redact)
                    .map(|(_, value)| *value),
            );

            safe(&v)
        });

        o2 += u32::from(dampened);
    }

    println!("part 1: {o1}");
    println!("part 2: {o2}");
    Ok(())
}

/// A report is safe if every adjacent pair moves the same direction by 1 to
/// 3. Direction is decided by the whole report, not its first pair.
fn safe(values: &[u32]) -> bool {
    let inc = values.windows(2).all(|w| dist(w[0], w[1]) && w[0] < w[1]);
    let dec = values.windows(2).all(|w| dist(w[0], w[1]) && w[0] > w[1]);
    inc || dec
}

#[inline]
fn dist(a: u32, b: u32) -> bool {
    matches!(a.max(b) - a.min(b), 1..=3)
}
