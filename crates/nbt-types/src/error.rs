use crate::kind::TagKind;

/// Errors raised while assembling tag values by hand.
///
/// The decoder never produces these for well-formed code paths: it builds
/// every list from its declared element kind. They exist so that the list
/// homogeneity rule holds for any other producer too.
///
/// ```text
/// ┌────────────────────────────────────────────────────┐
/// │ TypeError (this crate)                             │
/// │   └── ListKindMismatch  value kind ≠ element kind  │
/// └────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// A value was appended to a list declared for a different kind.
    #[error("list of {expected} cannot hold a {found} value")]
    ListKindMismatch { expected: TagKind, found: TagKind },
}
