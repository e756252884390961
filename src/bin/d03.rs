use lib::prelude::*;

fn main() -> Result<()> {
    lib::cli::Opts::parse()?;
    let data = lib::input!("d03.txt");

    let mut input = &data[..];
    let mut o1 = 0;
    let mut o2 = 0;

    let mut enabled = true;

    while !input.is_empty() {
        if eat(&mut input, b"do()") {
            enabled = true;
            continue;
        }

        if eat(&mut input, b"don't()") {
            enabled = false;
            continue;
        }

        if eat(&mut input, b"mul(") {
            let Some(a) = number(&mut input) else {
                continue;
            };

            if !eat(&mut input, b",") {
                continue;
            }

            let Some(b) = number(&mut input) else {
                continue;
            };

            if !eat(&mut input, b")") {
                continue;
            }

            o1 += a * b;

            if enabled {
                o2 += a * b;
            }

            continue;
        }

        // Skip ahead to the next candidate instruction.
        input = match memchr::memchr2(b'm', b'd', &input[1..]) {
            Some(n) => &input[n + 1..],
            None => &[],
        };
    }

    println!("part 1: {o1}");
    println!("part 2: {o2}");
    Ok(())
}

#[inline]
fn eat(input: &mut &[u8], prefix: &[u8]) -> bool {
    let Some(rest) = input.strip_prefix(prefix) else {
        return false;
    };

    *input = rest;
    true
}

/// Parse a 1 to 3 digit operand.
fn number(input: &mut &[u8]) -> Option<u32> {
    let digits = input.iter().take_while(|b| b.is_ascii_digit()).count();

    if !matches!(digits, 1..=3) {
        return None;
    }

    let (head, rest) = input.split_at(digits);
    *input = rest;

    let mut value = 0;

    for d in head {
        value = value * 10 + u32::from(d - b'0');
    }

    Some(value)
}
