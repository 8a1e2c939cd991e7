/// Requested pinned status of a heads-up candidate.
///
/// A pinned banner is kept visible indefinitely and is exempt from the normal
/// dwell-time rules. The status is *requested*: whether the banner actually
/// stays pinned is the display collaborator's call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinnedStatus {
    /// Normal banner, auto-dismissed after its dwell time.
    #[default]
    NotPinned,

    /// Pinned open by system policy (e.g. an ongoing call).
    PinnedBySystem,

    /// Pinned open by an explicit user action.
    ///
    /// When the controller's `respect_user_pinning` flag is enabled, a waiting
    /// candidate with this status causes the showing banner to hide
    /// immediately, regardless of priority.
    PinnedByUser,
}

impl PinnedStatus {
    /// Returns `true` for either pinned variant.
    #[inline]
    pub fn is_pinned(self) -> bool {
        !matches!(self, PinnedStatus::NotPinned)
    }
}
