//! Shared dimension and rating-domain constants.

/// Output dimension of the default sentence-embedding model
/// (`paraphrase-multilingual-MiniLM-L12-v2`).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Max tokens fed to the encoder per text.
pub const DEFAULT_MAX_SEQ_LEN: usize = 128;

/// Number of rating classes the classifier head predicts (zero-based `0..=4`).
pub const RATING_CLASSES: usize = 5;

/// Lowest valid one-based rating.
pub const RATING_MIN: u8 = 1;

/// Highest valid one-based rating.
pub const RATING_MAX: u8 = 5;

/// In-band sentinel returned by `predict` for empty/whitespace input.
/// Not a rating; callers must check for it before using the value.
pub const NO_INPUT_RATING: u8 = 0;
