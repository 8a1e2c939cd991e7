/// Configuration for the avalanche controller.
#[derive(Clone, Copy, Debug)]
pub struct ControllerConfig {
    /// Whether avalanche throttling starts enabled.
    ///
    /// While disabled, `update` runs its action immediately without tracking;
    /// can be flipped at runtime via
    /// [`set_enabled`](crate::AvalancheController::set_enabled).
    pub enabled: bool,

    /// Whether a waiting candidate pinned by the user overrides the dwell
    /// policy and hides the showing banner immediately.
    pub respect_user_pinning: bool,
}

impl Default for ControllerConfig {
    /// Throttling enabled, user-pinning override disabled.
    fn default() -> Self {
        Self {
            enabled: true,
            respect_user_pinning: false,
        }
    }
}
