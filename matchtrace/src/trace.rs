//! Trace frames and the recorder sink algorithms write them to.
//!
//! Every algorithm in [`crate::algorithms`] narrates its execution as a
//! sequence of [`TraceFrame`] values: one frame per semantically meaningful
//! step (a character comparison, a table entry being built, a window shift,
//! a hash collision). A frame is created exactly once, at the moment its
//! step occurs, appended to the invocation's [`Recorder`], and never mutated
//! afterward, so a consumer can replay the run step by step.
//!
//! Each frame kind is its own enum variant carrying only the fields that
//! kind actually has. The serialized form is internally tagged
//! (`"type": "mismatch_shift"`, etc.) so renderers can dispatch on the tag
//! without inspecting optional fields.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One replayable snapshot of a running algorithm's internal state.
///
/// `text_index`/`pattern_index` are character indices; their exact meaning
/// depends on the frame kind (e.g. for `Comparison` they name the two
/// characters under test, for `Alignment` the window start).
/// `matches_so_far` is always the ascending list of matches confirmed up to
/// and including the frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceFrame {
    /// Pattern aligned at a new window start.
    Alignment {
        message: String,
        text_index: usize,
        current_window: String,
        matches_so_far: Vec<usize>,
    },
    /// Single character test in the naive scan.
    CharacterCheck {
        message: String,
        text_index: usize,
        pattern_index: usize,
        match_status: bool,
        current_window: String,
        matches_so_far: Vec<usize>,
    },
    /// Single character test in KMP or Boyer-Moore.
    Comparison {
        message: String,
        text_index: usize,
        pattern_index: usize,
        match_status: bool,
        current_window: String,
        matches_so_far: Vec<usize>,
    },
    /// Mismatch that advances the naive scan by one.
    Mismatch {
        message: String,
        text_index: usize,
        pattern_index: usize,
        current_window: String,
        matches_so_far: Vec<usize>,
    },
    /// Full occurrence of the pattern confirmed.
    Match {
        message: String,
        text_index: usize,
        current_window: String,
        matches_so_far: Vec<usize>,
    },
    /// One index of the KMP failure table being computed.
    LpsStep {
        message: String,
        current_i: usize,
        length: usize,
        lps: Vec<usize>,
    },
    /// KMP failure table complete.
    LpsTable { message: String, lps: Vec<usize> },
    /// KMP falling back through the failure table instead of moving the
    /// text cursor.
    PatternShift {
        message: String,
        text_index: usize,
        pattern_index: usize,
        shift_to: usize,
        matches_so_far: Vec<usize>,
    },
    /// Boyer-Moore bad-character table complete.
    BadCharTable {
        message: String,
        bad_char_table: BTreeMap<char, usize>,
    },
    /// Boyer-Moore window shift after a mismatch. Both tables are exposed
    /// in full; filtering uninformative entries is a rendering decision.
    MismatchShift {
        message: String,
        text_index: usize,
        pattern_index: usize,
        shift_amount: usize,
        bad_char_table: BTreeMap<char, usize>,
        shift_table: BTreeMap<char, usize>,
        matches_so_far: Vec<usize>,
    },
    /// Rabin-Karp window hash, rolled or computed directly.
    RollingHash {
        message: String,
        text_index: usize,
        window_hash: u64,
        pattern_hash: u64,
        current_window: String,
        matches_so_far: Vec<usize>,
    },
    /// Rabin-Karp hash collision: equal hashes, unequal content. An event,
    /// not an error; the window is rejected by verification.
    FalsePositive {
        message: String,
        text_index: usize,
        window_hash: u64,
        current_window: String,
        matches_so_far: Vec<usize>,
    },
    /// One step of Z-array construction over the combined string, with the
    /// current `[l, r]` box.
    ZStep {
        message: String,
        current_i: usize,
        l: usize,
        r: usize,
        combined_string: String,
        z: Vec<usize>,
    },
    /// Z-array construction complete.
    ZTable {
        message: String,
        combined_string: String,
        z: Vec<usize>,
    },
}

impl TraceFrame {
    /// The serialized tag for this frame's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            TraceFrame::Alignment { .. } => "alignment",
            TraceFrame::CharacterCheck { .. } => "character_check",
            TraceFrame::Comparison { .. } => "comparison",
            TraceFrame::Mismatch { .. } => "mismatch",
            TraceFrame::Match { .. } => "match",
            TraceFrame::LpsStep { .. } => "lps_step",
            TraceFrame::LpsTable { .. } => "lps_table",
            TraceFrame::PatternShift { .. } => "pattern_shift",
            TraceFrame::BadCharTable { .. } => "bad_char_table",
            TraceFrame::MismatchShift { .. } => "mismatch_shift",
            TraceFrame::RollingHash { .. } => "rolling_hash",
            TraceFrame::FalsePositive { .. } => "false_positive",
            TraceFrame::ZStep { .. } => "z_step",
            TraceFrame::ZTable { .. } => "z_table",
        }
    }

    /// Human-readable description of the step.
    pub fn message(&self) -> &str {
        match self {
            TraceFrame::Alignment { message, .. }
            | TraceFrame::CharacterCheck { message, .. }
            | TraceFrame::Comparison { message, .. }
            | TraceFrame::Mismatch { message, .. }
            | TraceFrame::Match { message, .. }
            | TraceFrame::LpsStep { message, .. }
            | TraceFrame::LpsTable { message, .. }
            | TraceFrame::PatternShift { message, .. }
            | TraceFrame::BadCharTable { message, .. }
            | TraceFrame::MismatchShift { message, .. }
            | TraceFrame::RollingHash { message, .. }
            | TraceFrame::FalsePositive { message, .. }
            | TraceFrame::ZStep { message, .. }
            | TraceFrame::ZTable { message, .. } => message,
        }
    }
}

/// Accumulation sink for trace frames.
///
/// Algorithms stay decoupled from how frames are consumed: they call
/// [`Recorder::record`] and nothing else. No filtering, merging, or
/// reordering happens here. `record` takes a closure so a disabled recorder
/// never pays for frame construction, which keeps traced and untraced runs
/// on the same control flow — tracing must never alter match output.
#[derive(Debug, Default)]
pub struct Recorder {
    frames: Option<Vec<TraceFrame>>,
}

impl Recorder {
    /// Creates a recorder that accumulates frames.
    pub fn enabled() -> Self {
        Self {
            frames: Some(Vec::new()),
        }
    }

    /// Creates a recorder that discards everything.
    pub fn disabled() -> Self {
        Self { frames: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.frames.is_some()
    }

    /// Appends one frame. The closure runs only when recording is enabled.
    pub fn record(&mut self, frame: impl FnOnce() -> TraceFrame) {
        if let Some(frames) = &mut self.frames {
            frames.push(frame());
        }
    }

    /// The frames recorded so far; empty when disabled.
    pub fn frames(&self) -> &[TraceFrame] {
        self.frames.as_deref().unwrap_or(&[])
    }

    /// Consumes the recorder, yielding the frame sequence.
    pub fn into_frames(self) -> Vec<TraceFrame> {
        self.frames.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> TraceFrame {
        TraceFrame::Comparison {
            message: "Comparing text[3] ('b') with pattern[1] ('b')".to_string(),
            text_index: 3,
            pattern_index: 1,
            match_status: true,
            current_window: "ab".to_string(),
            matches_so_far: vec![0],
        }
    }

    #[test]
    fn test_enabled_recorder_accumulates() {
        let mut recorder = Recorder::enabled();
        assert!(recorder.is_enabled());

        recorder.record(sample_frame);
        recorder.record(sample_frame);
        assert_eq!(recorder.frames().len(), 2);
        assert_eq!(recorder.into_frames().len(), 2);
    }

    #[test]
    fn test_disabled_recorder_skips_construction() {
        let mut recorder = Recorder::disabled();
        let mut built = 0;
        recorder.record(|| {
            built += 1;
            sample_frame()
        });
        assert_eq!(built, 0, "disabled recorder must not build frames");
        assert!(recorder.frames().is_empty());
    }

    #[test]
    fn test_frame_kind_tags() {
        assert_eq!(sample_frame().kind(), "comparison");
        let frame = TraceFrame::LpsTable {
            message: "LPS table complete".to_string(),
            lps: vec![0, 0, 1],
        };
        assert_eq!(frame.kind(), "lps_table");
    }

    #[test]
    fn test_serde_tag_and_round_trip() -> anyhow::Result<()> {
        let frame = TraceFrame::MismatchShift {
            message: "Mismatch! Shifting pattern by 2 using bad character rule".to_string(),
            text_index: 5,
            pattern_index: 2,
            shift_amount: 2,
            bad_char_table: BTreeMap::from([('a', 0), ('b', 1)]),
            shift_table: BTreeMap::from([('a', 2), ('b', 1)]),
            matches_so_far: vec![],
        };

        let json = serde_json::to_value(&frame)?;
        assert_eq!(json["type"], "mismatch_shift");
        assert_eq!(json["shift_amount"], 2);
        assert_eq!(json["bad_char_table"]["b"], 1);

        let back: TraceFrame = serde_json::from_value(json)?;
        assert_eq!(back, frame);
        Ok(())
    }

    #[test]
    fn test_message_accessor() {
        let frame = sample_frame();
        assert!(frame.message().starts_with("Comparing"));
    }
}
