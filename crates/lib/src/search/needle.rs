use arrayvec::ArrayVec;
use thiserror::Error;

/// Longest supported search word.
pub const MAX_WORD: usize = 16;

/// Errors raised when validating a search word.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The word is too short to be searched for.
    #[error("search word must be at least 2 letters, got {len}")]
    WordTooShort { len: usize },
    /// The word does not fit the needle storage.
    #[error("search word must be at most {MAX_WORD} letters, got {len}")]
    WordTooLong { len: usize },
}

/// A validated search word together with its reversal.
///
/// # Examples
///
/// ```
/// use lib::search::Needle;
///
/// let needle = Needle::new(b"MAS")?;
///
/// // Overlapping matches in both orientations are all reported.
/// assert!(needle.matches(b"MASAM").eq([0, 2]));
/// assert_eq!(needle.matches(b"MA").count(), 0);
/// # Ok::<_, lib::search::SearchError>(())
/// ```
#[derive(Debug)]
pub struct Needle {
    forward: ArrayVec<u8, MAX_WORD>,
    reverse: ArrayVec<u8, MAX_WORD>,
}

impl Needle {
    /// Construct a needle for the given word.
    ///
    /// The word must have at least 2 letters for diagonal crossings to be
    /// meaningful, and at most [`MAX_WORD`].
    pub fn new(word: &[u8]) -> Result<Self, SearchError> {
        let len = word.len();

        if len < 2 {
            return Err(SearchError::WordTooShort { len });
        }

        let mut forward = ArrayVec::new();

        forward
            .try_extend_from_slice(word)
            .map_err(|_| SearchError::WordTooLong { len })?;

        let reverse = forward.iter().rev().copied().collect();
        Ok(Self { forward, reverse })
    }

    /// Get the length of the search word.
    #[inline]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Test if the search word is empty. A constructed needle never is.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Offset of the middle letter within the word.
    #[inline]
    pub fn center(&self) -> usize {
        self.forward.len() / 2
    }

    /// Scan a line for occurrences of the word in either orientation,
    /// yielding every start offset in ascending order.
    ///
    /// Matches may overlap; every window that equals the word or its
    /// reversal is reported. Every yielded offset `o` satisfies
    /// `o + self.len() <= line.len()`.
    #[inline]
    pub fn matches<'a>(&'a self, line: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
        line.windows(self.forward.len())
            .enumerate()
            .filter(move |(_, w)| *w == &self.forward[..] || *w == &self.reverse[..])
            .map(|(offset, _)| offset)
    }
}
