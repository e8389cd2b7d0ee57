use std::fmt::{self, Debug, Formatter};

/// Wraps a pre-rendered string so that [`Debug`] emits it verbatim, without quoting.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
