//! Input loading.

use std::fs::File;
use std::io::Read;

use anyhow::{anyhow, Context, Result};

/// Read the full contents of the input file at `path`.
pub fn load(path: &str) -> Result<Vec<u8>> {
    return inner(path).with_context(|| anyhow!("{path}"));

    fn inner(path: &str) -> Result<Vec<u8>> {
        let mut file = File::open(path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// Load an input file from the `inputs` directory of the calling crate.
#[macro_export]
macro_rules! input {
    ($path:literal) => {
        $crate::input::load(concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path))?
    };
}
