multiversx_sc::derive_imports!();

// ============================================================
// Crowdsale State — phase lifecycle
// ============================================================

/// Ordered sale phases. A deployment follows exactly one track:
/// either `Ready → Phase1 → Phase2 → Phase3 → CrowdsaleEnded`
/// or the single-phase `Ready → CrowdsaleOpen → CrowdsaleEnded`.
/// Progression is strictly forward.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum CrowdsaleState {
    /// Deployed but not yet selling. Holds no funds.
    Ready,
    /// First tier of the three-phase track.
    Phase1,
    /// Second tier.
    Phase2,
    /// Final tier of the three-phase track.
    Phase3,
    /// Single-phase track, the only state where the note bonus applies.
    CrowdsaleOpen,
    /// Terminal. Rate and allotments are zero, contributions rejected.
    CrowdsaleEnded,
}

impl CrowdsaleState {
    /// Whether contributions are accepted in this state.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            CrowdsaleState::Phase1
                | CrowdsaleState::Phase2
                | CrowdsaleState::Phase3
                | CrowdsaleState::CrowdsaleOpen
        )
    }

    /// Human-readable phase label carried in notifications.
    pub fn label(&self) -> &'static [u8] {
        match self {
            CrowdsaleState::Ready => b"Ready",
            CrowdsaleState::Phase1 => b"Phase 1",
            CrowdsaleState::Phase2 => b"Phase 2",
            CrowdsaleState::Phase3 => b"Phase 3",
            CrowdsaleState::CrowdsaleOpen => b"Crowdsale Open",
            CrowdsaleState::CrowdsaleEnded => b"Crowdsale Ended",
        }
    }
}
