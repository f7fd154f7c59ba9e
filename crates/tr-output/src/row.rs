//! Plain data row types written by output backends.

use tr_core::Color;

/// One journey outcome: a station arrival or a stranding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrivalRow {
    pub frame:         u64,
    pub train:         u32,
    pub train_color:   Color,
    /// `"home"`, `"wrong"` or `"stranded"`.
    pub outcome:       &'static str,
    /// `None` for strandings.
    pub station_color: Option<Color>,
    pub delta:         i32,
}

/// Running score at the end of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRow {
    pub frame:   u64,
    pub correct: u64,
    pub wrong:   u64,
}
