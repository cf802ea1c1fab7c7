//! Configuration for the checker.

/// Optional checks layered on top of the per-tag rules.
///
/// The default enables none of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckConfig {
    /// Report characters left on stage or with open mics when the script ends.
    pub end_of_show: bool,

    /// Report characters on stage or with open mics when a new act begins.
    pub act_transitions: bool,
}

impl CheckConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with every optional check enabled.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            end_of_show: true,
            act_transitions: true,
        }
    }

    /// Builder method to enable/disable end-of-show checks.
    #[must_use]
    pub fn with_end_of_show(mut self, enabled: bool) -> Self {
        self.end_of_show = enabled;
        self
    }

    /// Builder method to enable/disable act transition checks.
    #[must_use]
    pub fn with_act_transitions(mut self, enabled: bool) -> Self {
        self.act_transitions = enabled;
        self
    }
}
