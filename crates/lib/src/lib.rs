pub mod cli;
pub mod grid;
pub mod input;
pub mod search;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::grid::{Grid, GridError};
    pub use crate::search::{Axes, Family, Match, Needle, SearchError};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bstr::{BStr, ByteSlice};
}
