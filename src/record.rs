//! Vault records as the contract stores them.
//!
//! The read collaborator hands back `getVaultData` as a positional
//! six-tuple. Everything downstream works on the named [`VaultRecord`];
//! [`VaultRecord::try_from_raw`] is the only place the positional order
//! exists.

use alloy_primitives::{Address, U256};

use crate::VaultError;

/// Hard cap on concurrent vaults per owner; slots are indexed `0..=4`.
pub const MAX_VAULTS_PER_OWNER: u8 = 5;

/// Raw `getVaultData` return value, in the contract's field order:
/// `(active, kind, amount, timer, last_seen, beneficiary)`.
pub type RawVaultData = (bool, u8, U256, U256, U256, Address);

/// The two vault flavours. Fixed at creation, immutable thereafter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VaultKind {
    /// Time-locked savings: withdrawable by the owner at any time, with a
    /// penalty while the unlock date is still ahead.
    DiamondHands,
    /// Dead man's switch: the owner pings to stay alive; the beneficiary
    /// claims once the inactivity window lapses.
    LegacyProtocol,
}

impl VaultKind {
    /// Maps the on-chain `u8` tag. Anything other than 0/1 is a decode
    /// error, not a default.
    pub fn from_tag(tag: u8) -> Result<Self, VaultError> {
        match tag {
            0 => Ok(Self::DiamondHands),
            1 => Ok(Self::LegacyProtocol),
            other => Err(VaultError::UnknownKind(other)),
        }
    }

    pub fn tag(self) -> u8 {
        match self {
            Self::DiamondHands => 0,
            Self::LegacyProtocol => 1,
        }
    }
}

/// One owner slot, decoded. Field semantics depend on [`VaultKind`]:
///
/// - `timer` — DiamondHands: absolute unlock timestamp; LegacyProtocol:
///   inactivity-window duration in seconds.
/// - `last_seen` — last liveness ping; meaningful for LegacyProtocol only.
/// - `beneficiary` — LegacyProtocol: who may claim after expiry;
///   DiamondHands: refund target (the owner, unless overridden at create).
///
/// `active == false` means the slot is empty and every other field is
/// meaningless; [`crate::classify`] refuses such records.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VaultRecord {
    /// Owner the record was queried under.
    pub owner: Address,
    /// Slot index under that owner, `0..=4`. Stable for the vault's life.
    pub slot: u8,
    pub active: bool,
    pub kind: VaultKind,
    /// Locked value in wei.
    pub amount: U256,
    pub timer: u64,
    pub last_seen: u64,
    pub beneficiary: Address,
}

impl VaultRecord {
    /// Re-expresses the positional tuple as the named record. The two time
    /// fields come back as `U256` on the wire and are narrowed to seconds.
    pub fn try_from_raw(owner: Address, slot: u8, raw: RawVaultData) -> Result<Self, VaultError> {
        let (active, kind_tag, amount, timer, last_seen, beneficiary) = raw;
        Ok(Self {
            owner,
            slot,
            active,
            kind: VaultKind::from_tag(kind_tag)?,
            amount,
            timer: timer.saturating_to::<u64>(),
            last_seen: last_seen.saturating_to::<u64>(),
            beneficiary,
        })
    }
}

// ── Slot scans ───────────────────────────────────────────────────────────────

/// Dashboard filter: the live records among an owner's slots, in slot order.
pub fn active_vaults(records: &[VaultRecord]) -> Vec<&VaultRecord> {
    records.iter().filter(|r| r.active).collect()
}

/// Mirror of the contract's `getVaultCount` slot scan; feeds
/// `existing_count` of [`crate::validate_create`].
pub fn active_count(records: &[VaultRecord]) -> u8 {
    records.iter().filter(|r| r.active).count() as u8
}

/// Claim-page filter: live records naming `caller` as beneficiary.
///
/// Kind is deliberately not filtered here; a DiamondHands record naming the
/// caller still renders as a card, and [`crate::validate_claim`] keeps its
/// claim button disabled.
pub fn claimable_for(records: &[VaultRecord], caller: Address) -> Vec<&VaultRecord> {
    records
        .iter()
        .filter(|r| r.active && r.beneficiary == caller)
        .collect()
}
