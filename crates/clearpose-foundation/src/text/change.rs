//! Change descriptions produced by text edits.

/// Describes a single text mutation in terms of what the platform's
/// text-watcher callbacks report: the new text, where the change begins,
/// and how many bytes were removed and inserted there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChange {
    /// The full text after the change.
    pub text: String,
    /// Byte offset where the change begins.
    pub start: usize,
    /// Number of bytes removed at `start`.
    pub removed: usize,
    /// Number of bytes inserted at `start`.
    pub inserted: usize,
}

impl TextChange {
    /// Computes the change description between two text snapshots.
    ///
    /// The changed region is found by stripping the longest common prefix
    /// and suffix, both clamped to char boundaries shared by the two
    /// strings. Returns `None` when the snapshots are identical.
    pub fn between(old: &str, new: &str) -> Option<Self> {
        if old == new {
            return None;
        }

        let old_bytes = old.as_bytes();
        let new_bytes = new.as_bytes();

        let mut prefix = old_bytes
            .iter()
            .zip(new_bytes.iter())
            .take_while(|(a, b)| a == b)
            .count();
        while prefix > 0 && !(old.is_char_boundary(prefix) && new.is_char_boundary(prefix)) {
            prefix -= 1;
        }

        let max_suffix = old.len().min(new.len()) - prefix;
        let mut suffix = old_bytes
            .iter()
            .rev()
            .zip(new_bytes.iter().rev())
            .take_while(|(a, b)| a == b)
            .count()
            .min(max_suffix);
        while suffix > 0
            && !(old.is_char_boundary(old.len() - suffix)
                && new.is_char_boundary(new.len() - suffix))
        {
            suffix -= 1;
        }

        Some(Self {
            text: new.to_string(),
            start: prefix,
            removed: old.len() - prefix - suffix,
            inserted: new.len() - prefix - suffix,
        })
    }
}
