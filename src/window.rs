//! Sliding-window frequency scanner.
//!
//! Given a case-normalized sequence, a span, a step and a target residue
//! set, produces one measurement per window position. Windows are
//! borrowed slices of the sequence, so the scanner never indexes past
//! the sequence end regardless of how span and step interact.

/// Case-insensitive residue membership table.
///
/// A 256-entry lookup keyed by byte value. Both cases of every
/// configured residue are set, so membership tests stay valid whether or
/// not the sequence has been uppercased yet.
#[derive(Clone)]
pub struct TargetSet {
    table: [bool; 256],
}

impl TargetSet {
    /// Build a target set from the configured residue characters.
    ///
    /// Non-ASCII characters are ignored; an empty string yields a set
    /// that matches nothing (every frequency comes out 0.0).
    pub fn from_chars(chars: &str) -> Self {
        let mut table = [false; 256];
        for b in chars.bytes() {
            if b.is_ascii() {
                table[b.to_ascii_uppercase() as usize] = true;
                table[b.to_ascii_lowercase() as usize] = true;
            }
        }
        Self { table }
    }

    /// Test whether a residue belongs to the set.
    #[inline(always)]
    pub fn contains(&self, residue: u8) -> bool {
        self.table[residue as usize]
    }

    /// Count the residues of a window that belong to the set.
    #[inline]
    pub fn count(&self, window: &[u8]) -> usize {
        window.iter().filter(|&&b| self.contains(b)).count()
    }
}

impl std::fmt::Debug for TargetSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let members: String = (0u8..=255)
            .filter(|&b| b.is_ascii_uppercase() && self.contains(b))
            .map(char::from)
            .collect();
        f.debug_struct("TargetSet").field("members", &members).finish()
    }
}

/// Uppercase a sequence in place.
///
/// Length-preserving and idempotent; scanning an input is therefore
/// insensitive to the case it arrived in.
#[inline]
pub fn normalize_sequence(seq: &mut [u8]) {
    seq.make_ascii_uppercase();
}

/// One window measurement.
///
/// `start`/`end` are the output coordinates: the window's trailing edge
/// and that edge advanced by one step, matching the column layout of
/// the emitted rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowResult {
    pub start: u64,
    pub end: u64,
    /// Fraction of window residues in the target set, in [0, 1].
    pub frequency: f64,
}

/// Iterator over window measurements for one normalized sequence.
///
/// Yields nothing when the sequence is shorter than the span. Otherwise
/// the window visits offsets 0, step, 2*step, ... as long as a full
/// span of residues remains, so for length L the number of measurements
/// is (L - span) / step + 1.
pub struct WindowIter<'a> {
    seq: &'a [u8],
    targets: &'a TargetSet,
    span: usize,
    step: usize,
    /// Trailing edge of the next window to measure.
    position: usize,
}

impl<'a> WindowIter<'a> {
    /// Preconditions: span >= 1 and step >= 1, enforced by `ScanConfig`.
    pub fn new(seq: &'a [u8], targets: &'a TargetSet, span: usize, step: usize) -> Self {
        debug_assert!(span >= 1 && step >= 1);
        Self {
            seq,
            targets,
            span,
            step,
            position: span,
        }
    }
}

impl Iterator for WindowIter<'_> {
    type Item = WindowResult;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position > self.seq.len() {
            return None;
        }
        let window = &self.seq[self.position - self.span..self.position];
        let count = self.targets.count(window);
        let result = WindowResult {
            start: self.position as u64,
            end: (self.position + self.step) as u64,
            frequency: count as f64 / self.span as f64,
        };
        self.position += self.step;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.position > self.seq.len() {
            0
        } else {
            (self.seq.len() - self.position) / self.step + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WindowIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(seq: &[u8], chars: &str, span: usize, step: usize) -> Vec<WindowResult> {
        let targets = TargetSet::from_chars(chars);
        WindowIter::new(seq, &targets, span, step).collect()
    }

    #[test]
    fn test_reference_scenario() {
        // seq1 / ACGTACGTAC, span 4, step 2, targets {A, C}
        let results = scan(b"ACGTACGTAC", "AC", 4, 2);
        assert_eq!(results.len(), 4);
        for (i, r) in results.iter().enumerate() {
            assert_eq!(r.start, 4 + 2 * i as u64);
            assert_eq!(r.end, r.start + 2);
            assert_eq!(r.frequency, 0.5);
        }
    }

    #[test]
    fn test_window_count_formula() {
        // (L - S) / T + 1 for a handful of shapes
        for &(len, span, step) in &[(10usize, 4usize, 2usize), (10, 4, 3), (100, 10, 7), (5, 5, 1)] {
            let seq = vec![b'A'; len];
            let results = scan(&seq, "A", span, step);
            assert_eq!(results.len(), (len - span) / step + 1);
        }
    }

    #[test]
    fn test_short_sequence_yields_nothing() {
        assert!(scan(b"ACG", "AC", 4, 2).is_empty());
    }

    #[test]
    fn test_all_targets_gives_ones() {
        for r in scan(b"ACACACACAC", "AC", 4, 2) {
            assert_eq!(r.frequency, 1.0);
        }
    }

    #[test]
    fn test_empty_target_set_gives_zeros() {
        for r in scan(b"ACGTACGTAC", "", 4, 2) {
            assert_eq!(r.frequency, 0.0);
        }
    }

    #[test]
    fn test_frequencies_in_unit_interval() {
        for r in scan(b"ANNGTACNNGTTTACGNNAT", "ACGT", 5, 3) {
            assert!((0.0..=1.0).contains(&r.frequency));
        }
    }

    #[test]
    fn test_case_insensitive_scan() {
        let mut lower = b"acgtacgtac".to_vec();
        normalize_sequence(&mut lower);
        assert_eq!(lower, b"ACGTACGTAC");
        assert_eq!(scan(&lower, "AC", 4, 2), scan(b"ACGTACGTAC", "AC", 4, 2));
    }

    #[test]
    fn test_normalize_idempotent() {
        let mut seq = b"AcGtN".to_vec();
        normalize_sequence(&mut seq);
        let once = seq.clone();
        normalize_sequence(&mut seq);
        assert_eq!(seq, once);
    }

    #[test]
    fn test_step_larger_than_span() {
        // L=10, S=2, T=5 -> windows at positions 2 and 7
        let results = scan(b"AAGGGAGGGG", "A", 2, 5);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].start, 2);
        assert_eq!(results[0].frequency, 1.0);
        assert_eq!(results[1].start, 7);
        assert_eq!(results[1].frequency, 0.5);
    }

    #[test]
    fn test_span_equals_length() {
        let results = scan(b"ACGT", "AC", 4, 1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].start, 4);
        assert_eq!(results[0].end, 5);
        assert_eq!(results[0].frequency, 0.5);
    }

    #[test]
    fn test_size_hint_exact() {
        let targets = TargetSet::from_chars("A");
        let iter = WindowIter::new(b"ACGTACGTAC", &targets, 4, 2);
        assert_eq!(iter.len(), 4);
    }
}
