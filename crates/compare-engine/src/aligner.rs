//! Longest-common-run sequence alignment
//!
//! A Ratcliff/Obershelp matcher: find the longest run of equal elements shared
//! by both sequences, then repeat on the unmatched regions to its left and
//! right. The result is deterministic but not guaranteed to be a minimal edit
//! script.
//!
//! Ties between equally long runs go to the run starting earliest in `a`, then
//! earliest in `b`. Frequent elements are never discounted: every element
//! takes part in matching however often it recurs.

use std::collections::HashMap;
use std::hash::Hash;

use shared_types::{OpTag, Opcode, Section};
use tracing::debug;

/// A run of `size` equal elements at `a[a..a + size]` and `b[b..b + size]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    /// Positions of each distinct element of `b`, ascending
    b2j: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let mut b2j: HashMap<&'a T, Vec<usize>> = HashMap::new();
        for (j, elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    /// Longest run of equal elements in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Returns a zero-size match at `(alo, blo)` when nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let mut best = Match {
            a: alo,
            b: blo,
            size: 0,
        };

        // j2len[j] = length of the run ending at a[i - 1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    // Strictly longer only, so earlier runs win ties
                    if k > best.size {
                        best = Match {
                            a: i + 1 - k,
                            b: j + 1 - k,
                            size: k,
                        };
                    }
                }
            }
            j2len = next;
        }

        best
    }

    /// Non-adjacent matching runs in increasing order, ending with the
    /// zero-size sentinel `(len(a), len(b), 0)`
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());
        let mut pending = vec![(0, la, 0, lb)];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            blocks.push(m);
            if alo < m.a && blo < m.b {
                pending.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                pending.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
        }
        blocks.sort();

        // Merge runs that touch in both sequences
        let mut merged: Vec<Match> = Vec::with_capacity(blocks.len() + 1);
        for m in blocks {
            match merged.last_mut() {
                Some(last) if last.a + last.size == m.a && last.b + last.size == m.b => {
                    last.size += m.size;
                }
                _ => merged.push(m),
            }
        }
        merged.push(Match {
            a: la,
            b: lb,
            size: 0,
        });
        merged
    }

    /// Edit script turning `a` into `b`
    pub fn opcodes(&self) -> Vec<Opcode> {
        let mut i = 0;
        let mut j = 0;
        let mut ops = Vec::new();

        for m in self.matching_blocks() {
            let tag = match (i < m.a, j < m.b) {
                (true, true) => Some(OpTag::Replace),
                (true, false) => Some(OpTag::Delete),
                (false, true) => Some(OpTag::Insert),
                (false, false) => None,
            };
            if let Some(tag) = tag {
                ops.push(Opcode::new(tag, i..m.a, j..m.b));
            }
            i = m.a + m.size;
            j = m.b + m.size;
            if m.size > 0 {
                ops.push(Opcode::new(OpTag::Equal, m.a..i, m.b..j));
            }
        }

        ops
    }
}

/// Align two section sequences by exact equality of their text
pub fn align(a: &[Section], b: &[Section]) -> Vec<Opcode> {
    let a_texts: Vec<&str> = a.iter().map(|s| s.text.as_str()).collect();
    let b_texts: Vec<&str> = b.iter().map(|s| s.text.as_str()).collect();
    let ops = SequenceMatcher::new(&a_texts, &b_texts).opcodes();
    debug!(
        "Aligned {} against {} sections into {} opcodes",
        a.len(),
        b.len(),
        ops.len()
    );
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::segment;
    use pretty_assertions::assert_eq;
    use shared_types::Side;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn tuples(ops: &[Opcode]) -> Vec<(OpTag, usize, usize, usize, usize)> {
        ops.iter()
            .map(|op| (op.tag, op.a.start, op.a.end, op.b.start, op.b.end))
            .collect()
    }

    #[test]
    fn test_classic_example() {
        let (a, b) = (chars("qabxcd"), chars("abycdf"));
        let ops = SequenceMatcher::new(&a, &b).opcodes();
        assert_eq!(
            tuples(&ops),
            vec![
                (OpTag::Delete, 0, 1, 0, 0),
                (OpTag::Equal, 1, 3, 0, 2),
                (OpTag::Replace, 3, 4, 2, 3),
                (OpTag::Equal, 4, 6, 3, 5),
                (OpTag::Insert, 6, 6, 5, 6),
            ]
        );
    }

    #[test]
    fn test_longest_match_prefers_earliest_in_a() {
        let (a, b) = (chars("xy"), chars("yx"));
        let matcher = SequenceMatcher::new(&a, &b);
        assert_eq!(
            matcher.find_longest_match(0, 2, 0, 2),
            Match { a: 0, b: 1, size: 1 }
        );
        assert_eq!(
            tuples(&matcher.opcodes()),
            vec![
                (OpTag::Insert, 0, 0, 0, 1),
                (OpTag::Equal, 0, 1, 1, 2),
                (OpTag::Delete, 1, 2, 2, 2),
            ]
        );
    }

    #[test]
    fn test_longest_match_prefers_earliest_in_b() {
        let (a, b) = (chars("a"), chars("bab a"));
        let m = SequenceMatcher::new(&a, &b).find_longest_match(0, 1, 0, 5);
        assert_eq!(m, Match { a: 0, b: 1, size: 1 });
    }

    #[test]
    fn test_longest_match_respects_bounds() {
        let (a, b) = (chars("abcd"), chars("abcd"));
        let m = SequenceMatcher::new(&a, &b).find_longest_match(1, 3, 2, 4);
        assert_eq!(m, Match { a: 2, b: 2, size: 1 });
    }

    #[test]
    fn test_no_match_returns_empty_at_low_bounds() {
        let (a, b) = (chars("abc"), chars("xyz"));
        let m = SequenceMatcher::new(&a, &b).find_longest_match(1, 3, 2, 3);
        assert_eq!(m, Match { a: 1, b: 2, size: 0 });
    }

    #[test]
    fn test_adjacent_blocks_are_merged() {
        let (a, b) = (chars("abcd"), chars("abcd"));
        let blocks = SequenceMatcher::new(&a, &b).matching_blocks();
        assert_eq!(
            blocks,
            vec![Match { a: 0, b: 0, size: 4 }, Match { a: 4, b: 4, size: 0 }]
        );
    }

    #[test]
    fn test_frequent_elements_still_match() {
        let a: Vec<&str> = vec!["Same clause."; 250];
        let mut b = a.clone();
        b.push("New clause.");
        let ops = SequenceMatcher::new(&a, &b).opcodes();
        assert_eq!(
            tuples(&ops),
            vec![
                (OpTag::Equal, 0, 250, 0, 250),
                (OpTag::Insert, 250, 250, 250, 251),
            ]
        );
    }

    #[test]
    fn test_degenerate_inputs() {
        let empty: Vec<char> = Vec::new();
        let abc = chars("abc");
        assert!(SequenceMatcher::new(&empty, &empty).opcodes().is_empty());
        assert_eq!(
            tuples(&SequenceMatcher::new(&empty, &abc).opcodes()),
            vec![(OpTag::Insert, 0, 0, 0, 3)]
        );
        assert_eq!(
            tuples(&SequenceMatcher::new(&abc, &empty).opcodes()),
            vec![(OpTag::Delete, 0, 3, 0, 0)]
        );
    }

    #[test]
    fn test_align_sections_by_text() {
        let a = segment("Intro.\n\nPayment due in 30 days.\n\nSignatures.", Side::A);
        let b = segment("Intro.\n\nPayment due in 45 days.\n\nSignatures.", Side::B);
        assert_eq!(
            tuples(&align(&a, &b)),
            vec![
                (OpTag::Equal, 0, 1, 0, 1),
                (OpTag::Replace, 1, 2, 1, 2),
                (OpTag::Equal, 2, 3, 2, 3),
            ]
        );
    }

    #[test]
    fn test_align_is_case_sensitive() {
        let a = segment("Rent is due.", Side::A);
        let b = segment("rent is due.", Side::B);
        assert_eq!(tuples(&align(&a, &b)), vec![(OpTag::Replace, 0, 1, 0, 1)]);
    }
}
