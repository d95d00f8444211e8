//! Mutable service state.

/// Settings that persist for the lifetime of the service process.
#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    /// Allows signing transactions whose instructions cannot all be
    /// verified on screen. Off until the user opts in.
    pub blind_signing_enabled: bool,
}
