//! Turns alignment opcodes into typed, truncated change records

use shared_types::text::{truncate_chars, truncate_with_ellipsis};
use shared_types::{Change, ChangeType, Limits, OpTag, Opcode, Section};

/// Advisory attached to every removed section
pub const REMOVED_IMPACT: &str = "May remove obligations/rights present in earlier version.";
/// Advisory attached to every added section
pub const ADDED_IMPACT: &str = "Introduces new terms/obligations that weren’t in the original.";
/// Advisory attached to every modified run
pub const MODIFIED_IMPACT: &str =
    "Terms altered; review closely to confirm risk/obligation changes.";

/// Build change records in opcode order, capped at `limits.max_changes`.
///
/// Deletes and inserts produce one record per section. A replace produces a
/// single record covering the whole run, labelled with its range in `a`.
pub fn synthesize(ops: &[Opcode], a: &[Section], b: &[Section], limits: &Limits) -> Vec<Change> {
    let mut changes = Vec::new();

    for op in ops {
        match op.tag {
            OpTag::Equal => {}
            OpTag::Delete => {
                for idx in op.a.clone() {
                    changes.push(single(ChangeType::Removed, idx, &a[idx], REMOVED_IMPACT, limits));
                }
            }
            OpTag::Insert => {
                for idx in op.b.clone() {
                    changes.push(single(ChangeType::Added, idx, &b[idx], ADDED_IMPACT, limits));
                }
            }
            OpTag::Replace => changes.push(replaced(op, a, b, limits)),
        }

        if changes.len() >= limits.max_changes {
            break;
        }
    }

    changes.truncate(limits.max_changes);
    changes
}

fn single(
    change_type: ChangeType,
    idx: usize,
    section: &Section,
    impact: &str,
    limits: &Limits,
) -> Change {
    Change {
        change_type,
        section: format!("Section {}", idx + 1),
        description: truncate_with_ellipsis(&section.text, limits.change_description_chars),
        impact: impact.to_string(),
    }
}

fn replaced(op: &Opcode, a: &[Section], b: &[Section], limits: &Limits) -> Change {
    let before = join_run(&a[op.a.clone()]);
    let after = join_run(&b[op.b.clone()]);
    Change {
        change_type: ChangeType::Modified,
        section: format!("Sections {}-{}", op.a.start + 1, op.a.end),
        description: format!(
            "Changed from: “{}” → “{}”.",
            truncate_chars(&before, limits.modified_side_chars),
            truncate_chars(&after, limits.modified_side_chars)
        ),
        impact: MODIFIED_IMPACT.to_string(),
    }
}

fn join_run(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
