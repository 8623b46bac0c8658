//! Widget label set.

use std::ffi::CString;
use std::os::raw::c_char;

use crate::error::SetupError;

/// Ordered set of unique widget labels, one per batch slot.
///
/// Dear ImGui identifies widgets by label, so each slot in the batch needs a
/// distinct one; the `##` prefix keeps the label text itself invisible. The
/// set is generated once at setup and held in both forms the two widget paths
/// need: Rust strings for the high-level binding and NUL-terminated C strings
/// for the raw call, so no per-frame conversion ever runs inside timed code.
pub struct LabelSet {
    labels: Vec<String>,
    c_labels: Vec<CString>,
}

impl LabelSet {
    /// Generates labels `##input0` .. `##input{n-1}`. Deterministic: calling
    /// this twice with the same `n` yields the same sequence.
    pub fn generate(n: usize) -> Result<Self, SetupError> {
        let labels: Vec<String> = (0..n).map(|i| format!("##input{i}")).collect();
        let c_labels = labels
            .iter()
            .map(|label| CString::new(label.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { labels, c_labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label for slot `i`, for the high-level widget path.
    pub fn as_str(&self, i: usize) -> &str {
        &self.labels[i]
    }

    /// Label for slot `i` as a NUL-terminated pointer, for the raw widget
    /// path. Valid until the set is dropped.
    pub fn as_c_ptr(&self, i: usize) -> *const c_char {
        self.c_labels[i].as_ptr()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}
