//! The Vault Classifier.
//!
//! `(record, now)` → [`VaultView`]: status, penalty tier, inactivity
//! countdown, and which actions are currently eligible. Total and pure;
//! the only failure is being handed an inactive record. Display text lives
//! in [`crate::display`], not here.

use core::time::Duration;

use alloy_primitives::U256;

use crate::record::{VaultKind, VaultRecord};
use crate::VaultError;

/// More than this many seconds of lock left pays the high penalty tier.
pub const PENALTY_TIER_BOUNDARY_SECS: u64 = 86_400;

/// Lifecycle status. The first two apply to DiamondHands vaults, the last
/// two to LegacyProtocol.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VaultStatus {
    Locked,
    Unlocked,
    Secure,
    Expired,
}

/// Early-withdrawal fee band for DiamondHands vaults.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PenaltyTier {
    /// No penalty concept (LegacyProtocol).
    None,
    /// More than a day of lock remaining: 5%.
    High,
    /// Final day of the lock (or already unlocked): 1%.
    Low,
}

impl PenaltyTier {
    /// Fee percentage the contract charges on an early withdrawal.
    pub fn percent(self) -> u8 {
        match self {
            Self::None => 0,
            Self::High => 5,
            Self::Low => 1,
        }
    }
}

/// Everything the dashboard needs to know about one vault at one instant.
///
/// Derived, never persisted: recompute whenever the record or the clock
/// changes. `countdown` is populated only for a `Secure` LegacyProtocol
/// vault (time until the beneficiary may claim).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VaultView {
    pub status: VaultStatus,
    pub penalty_tier: PenaltyTier,
    pub countdown: Option<Duration>,
    pub can_claim: bool,
    pub can_withdraw: bool,
}

/// Classifies one record against the supplied clock.
///
/// Boundary rule: equality resolves to the expired/unlocked branch — a
/// DiamondHands vault with `timer == now` is already `Unlocked`, a
/// LegacyProtocol vault whose deadline is `now` is already `Expired`.
pub fn classify(record: &VaultRecord, now: u64) -> Result<VaultView, VaultError> {
    if !record.active {
        return Err(VaultError::InactiveVault);
    }

    let view = match record.kind {
        VaultKind::DiamondHands => {
            // The tier is derived from time_left alone, not gated on the
            // lock status; past the unlock date it degenerates to Low and
            // the contract charges nothing.
            let tier = if record.timer > now.saturating_add(PENALTY_TIER_BOUNDARY_SECS) {
                PenaltyTier::High
            } else {
                PenaltyTier::Low
            };
            VaultView {
                status: if record.timer > now {
                    VaultStatus::Locked
                } else {
                    VaultStatus::Unlocked
                },
                penalty_tier: tier,
                countdown: None,
                can_claim: false,
                can_withdraw: true,
            }
        }
        VaultKind::LegacyProtocol => {
            let deadline = record.last_seen.saturating_add(record.timer);
            let secure = deadline > now;
            VaultView {
                status: if secure {
                    VaultStatus::Secure
                } else {
                    VaultStatus::Expired
                },
                penalty_tier: PenaltyTier::None,
                countdown: secure.then(|| Duration::from_secs(deadline - now)),
                can_claim: !secure,
                can_withdraw: false,
            }
        }
    };
    Ok(view)
}

/// Exact fee the contract would take for withdrawing this vault right now,
/// in wei: `amount * percent / 100` while locked, zero otherwise.
pub fn penalty_amount(record: &VaultRecord, view: &VaultView) -> U256 {
    match view.status {
        VaultStatus::Locked => {
            record.amount * U256::from(view.penalty_tier.percent()) / U256::from(100)
        }
        _ => U256::ZERO,
    }
}
