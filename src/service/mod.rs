pub mod directory;
pub mod ledger;

pub use directory::Directory;
pub use ledger::Ledger;

/// Trimmed value, or `None` when absent or blank.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
