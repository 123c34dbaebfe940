//! Active cue lookup for a playback timestamp

use crate::types::Timed;

/// First cue (lowest index) whose window contains `time`, end-inclusive.
///
/// Overlapping cues are allowed; the earliest in sequence order wins.
pub fn active_index<T: Timed>(items: &[T], time: f64) -> Option<usize> {
    items.iter().position(|item| item.contains(time))
}

/// Lookup table built once per cue sequence.
///
/// Answers exactly like [`active_index`]. When starts are ascending and ends
/// are non-decreasing the lookup is a binary search over the ends, otherwise
/// it falls back to a linear scan.
#[derive(Debug, Clone, Default)]
pub struct CueIndex {
    starts: Vec<f64>,
    ends: Vec<f64>,
    monotonic: bool,
}

impl CueIndex {
    pub fn new<T: Timed>(items: &[T]) -> Self {
        let starts: Vec<f64> = items.iter().map(Timed::start).collect();
        let ends: Vec<f64> = items.iter().map(Timed::end).collect();
        let monotonic = starts.windows(2).all(|w| w[0] <= w[1])
            && ends.windows(2).all(|w| w[0] <= w[1])
            && ends.iter().chain(starts.iter()).all(|t| !t.is_nan());

        Self {
            starts,
            ends,
            monotonic,
        }
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// True when lookups use binary search
    pub fn is_monotonic(&self) -> bool {
        self.monotonic
    }

    /// Index of the active cue at `time`, if any
    pub fn active_index(&self, time: f64) -> Option<usize> {
        if time.is_nan() {
            return None;
        }

        if self.monotonic {
            // Every cue before `i` ends before `time`; starts only grow after it
            let i = self.ends.partition_point(|&end| end < time);
            return (i < self.len() && self.starts[i] <= time).then_some(i);
        }

        (0..self.len()).find(|&i| time >= self.starts[i] && time <= self.ends[i])
    }
}
