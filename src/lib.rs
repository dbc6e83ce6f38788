//! # LifeVault Engine
//!
//! Decision core of the LifeVault browser client. The chain holds the
//! vaults; this crate decides what a vault *means* right now and whether a
//! requested action against it is well-formed:
//!
//! - [`classify`] — vault record + current time → [`VaultView`] (status,
//!   penalty tier, inactivity countdown, claim/withdraw eligibility).
//! - [`validate_create`] / [`validate_withdraw`] / [`validate_ping`] /
//!   [`validate_claim`] — user intent → [`ActionRequest`] for the
//!   transaction layer, or a typed rejection.
//! - [`format`] and [`display`] — the exact strings the dashboard renders.
//!
//! Every operation is a pure function over its arguments: no storage, no
//! network, no clocks. The caller supplies `now`, which keeps the engine
//! deterministic and lets the renderer re-classify all five slots on every
//! poll tick without coordination.

use thiserror::Error;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod classify;
pub mod display;
pub mod format;
pub mod record;
pub mod validate;

pub use classify::{classify, penalty_amount, PenaltyTier, VaultStatus, VaultView};
pub use display::{
    card_title, claim_label, last_ping_text, ping_label, status_detail, status_text,
    withdraw_label,
};
pub use format::{
    claim_link, countdown, format_amount, format_date, parse_address, parse_amount, short_address,
};
pub use record::{
    active_count, active_vaults, claimable_for, RawVaultData, VaultKind, VaultRecord,
    MAX_VAULTS_PER_OWNER,
};
pub use validate::{
    validate_claim, validate_create, validate_ping, validate_withdraw, ActionRequest, CreateForm,
    MIN_UNLOCK_LEAD_SECS,
};

// ── Shared error enum ────────────────────────────────────────────────────────

/// Every way the engine can refuse, shared across classifier and validators.
///
/// Nothing here is fatal: each variant is a value the UI maps to a disabled
/// button or an inline message. Grouping:
///
/// | Group                 | Variants                                          |
/// |-----------------------|---------------------------------------------------|
/// | Record preconditions  | `InactiveVault`, `UnknownKind`                    |
/// | Form input            | `LimitReached`, `MissingAmount`, `MissingUnlockDate`, `ScheduleTooSoon`, `MissingInactivityPeriod`, `MissingBeneficiary`, `InvalidAddress` |
/// | Authorization, timing | `WrongVaultKind`, `NotExpiredYet`, `NotBeneficiary` |
///
/// The `Display` strings are rendered to end users verbatim; treat them as
/// part of the public surface (see the stability test below).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VaultError {
    // ── Record preconditions ─────────────────────────────────
    /// The slot holds no live vault; its fields are garbage and must not be
    /// classified.
    #[error("vault slot is inactive")]
    InactiveVault,
    /// The on-chain kind tag was neither 0 (DiamondHands) nor 1
    /// (LegacyProtocol).
    #[error("unknown vault kind tag {0}")]
    UnknownKind(u8),

    // ── Form input ───────────────────────────────────────────
    /// The owner already runs the maximum of 5 concurrent vaults.
    #[error("maximum of 5 active vaults reached")]
    LimitReached,
    /// Deposit amount absent, zero, or not a decimal ether string.
    #[error("deposit amount is missing or invalid")]
    MissingAmount,
    /// DiamondHands create without an unlock date chosen.
    #[error("unlock date is required")]
    MissingUnlockDate,
    /// DiamondHands unlock date inside the 15-minute safety floor.
    #[error("unlock date must be at least 15 minutes in the future")]
    ScheduleTooSoon,
    /// LegacyProtocol create without a parseable inactivity period.
    #[error("inactivity period is required")]
    MissingInactivityPeriod,
    /// LegacyProtocol create with an empty beneficiary; no default is ever
    /// substituted for this kind.
    #[error("beneficiary address is required")]
    MissingBeneficiary,
    /// A non-empty address field that is not 20 bytes of hex.
    #[error("not a valid address")]
    InvalidAddress,

    // ── Authorization and timing ─────────────────────────────
    /// The requested action exists for the other vault kind only.
    #[error("action does not apply to this vault kind")]
    WrongVaultKind,
    /// Claim attempted while the owner's inactivity window is still open.
    #[error("owner is still active")]
    NotExpiredYet,
    /// Claim attempted by anyone other than the recorded beneficiary.
    #[error("caller is not the beneficiary")]
    NotBeneficiary,
}
