pub mod check;
pub mod validate;

/// Outcome of a successful command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Clean,
    /// Findings present and the caller asked for a failing exit status
    Findings,
}
