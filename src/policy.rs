//! Copy scheduling policies.
//!
//! The raw-buffer scenarios differ only in when the two marshaling primitives
//! run. Expressing that as data keeps one frame routine instead of four
//! near-duplicate ones.

/// When the copy-in primitive (source string into buffer) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyIn {
    /// The buffer is reused as-is across slots and frames.
    Never,
    /// Re-encode the source string before every widget call.
    EverySlot,
}

impl CopyIn {
    pub fn applies(self) -> bool {
        matches!(self, CopyIn::EverySlot)
    }
}

/// When the copy-out primitive (buffer back into source string) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOut {
    Never,
    /// Only when the widget reports it was deactivated after an edit this
    /// frame. Most frames complete no edit, so this skips the write-back.
    OnEditComplete,
    /// After every widget call, whether or not anything changed.
    EverySlot,
}

impl CopyOut {
    /// Whether the write-back runs for one slot, given the widget's
    /// deactivated-after-edit report.
    pub fn applies(self, edit_completed: bool) -> bool {
        match self {
            CopyOut::Never => false,
            CopyOut::OnEditComplete => edit_completed,
            CopyOut::EverySlot => true,
        }
    }
}
