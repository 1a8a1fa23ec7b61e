use crate::domain::model::AnimalRecord;
use crate::utils::error::Result;
use std::io::Write;

/// Capability set of a shelter over its records. All user-visible
/// reporting goes through the supplied writer so sessions can run
/// against any output sink.
pub trait AnimalStore {
    /// Append a record, let it speak, and confirm on `out`.
    fn add(&mut self, animal: AnimalRecord, out: &mut dyn Write) -> Result<()>;

    /// Remove the first record whose name matches case-insensitively.
    /// Returns whether anything was removed; reports either way on `out`.
    fn remove(&mut self, name: &str, out: &mut dyn Write) -> Result<bool>;

    /// Render every record as a fixed-width table, or a notice when empty.
    fn display_all(&self, out: &mut dyn Write) -> Result<()>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
