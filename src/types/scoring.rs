/// Bucketed unused-dependency score, `0..=3` as produced by the scorer.
pub type DepScore = u8;
