//! The Action Validator.
//!
//! Turns user intent into well-formed call requests for the transaction
//! layer, or rejects with the specific reason the form should surface.
//! Validators never touch the chain and never block; the worst they do is
//! return an error value.

use alloy_primitives::{Address, U256};

use crate::classify::VaultView;
use crate::format::{parse_address, parse_amount};
use crate::record::{VaultKind, VaultRecord, MAX_VAULTS_PER_OWNER};
use crate::VaultError;

/// Minimum lead on a DiamondHands unlock date: 15 minutes. A client-side
/// anti-footgun floor, not a contract rule — the contract would happily
/// lock funds for three seconds.
pub const MIN_UNLOCK_LEAD_SECS: u64 = 900;

/// Seconds per whole day of LegacyProtocol inactivity.
const SECS_PER_DAY: u64 = 86_400;

/// A fully validated call into the vault contract. Plain values only;
/// the transaction collaborator owns signing, submission, and receipts.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionRequest {
    CreateVault {
        kind: VaultKind,
        /// Deposit in wei, sent as the call value.
        amount: U256,
        /// Absolute unlock timestamp (DiamondHands) or inactivity window in
        /// seconds (LegacyProtocol).
        config_param: u64,
        beneficiary: Address,
    },
    Withdraw { slot: u8 },
    Ping { slot: u8 },
    ClaimLegacy { owner: Address, slot: u8 },
}

/// The create screen's form state, as typed. `unlock_at` is the date
/// picker's value (already a unix timestamp); the other fields arrive as
/// raw text.
#[derive(Clone, Copy, Debug)]
pub struct CreateForm<'a> {
    pub kind: VaultKind,
    pub amount: &'a str,
    /// DiamondHands only: chosen unlock date, `None` while unset.
    pub unlock_at: Option<u64>,
    /// LegacyProtocol only: inactivity window in whole days.
    pub inactivity_days: &'a str,
    /// Optional for DiamondHands (defaults to the caller), mandatory for
    /// LegacyProtocol.
    pub beneficiary: &'a str,
}

/// Validates a create request against the caller's current slot usage.
pub fn validate_create(
    form: &CreateForm<'_>,
    existing_count: u8,
    caller: Address,
    now: u64,
) -> Result<ActionRequest, VaultError> {
    if existing_count >= MAX_VAULTS_PER_OWNER {
        return Err(VaultError::LimitReached);
    }
    let amount = parse_amount(form.amount)?;

    match form.kind {
        VaultKind::DiamondHands => {
            let unlock_at = form.unlock_at.ok_or(VaultError::MissingUnlockDate)?;
            if unlock_at < now.saturating_add(MIN_UNLOCK_LEAD_SECS) {
                return Err(VaultError::ScheduleTooSoon);
            }
            let beneficiary = match form.beneficiary.trim() {
                // Empty means self-refund.
                "" => caller,
                text => parse_address(text)?,
            };
            Ok(ActionRequest::CreateVault {
                kind: form.kind,
                amount,
                config_param: unlock_at,
                beneficiary,
            })
        }
        VaultKind::LegacyProtocol => {
            let days = form
                .inactivity_days
                .trim()
                .parse::<u64>()
                .map_err(|_| VaultError::MissingInactivityPeriod)?;
            let beneficiary = match form.beneficiary.trim() {
                "" => return Err(VaultError::MissingBeneficiary),
                text => parse_address(text)?,
            };
            Ok(ActionRequest::CreateVault {
                kind: form.kind,
                amount,
                config_param: days.saturating_mul(SECS_PER_DAY),
                beneficiary,
            })
        }
    }
}

/// Owner withdrawal. DiamondHands only; always permitted there — the
/// penalty while locked is information, not a gate.
pub fn validate_withdraw(
    record: &VaultRecord,
    view: &VaultView,
) -> Result<ActionRequest, VaultError> {
    if !view.can_withdraw {
        return Err(VaultError::WrongVaultKind);
    }
    Ok(ActionRequest::Withdraw { slot: record.slot })
}

/// Owner liveness ping. Permitted for any active LegacyProtocol vault,
/// expired ones included — pinging an expired vault is the rescue path
/// while the beneficiary has not claimed yet.
pub fn validate_ping(record: &VaultRecord) -> Result<ActionRequest, VaultError> {
    if !record.active {
        return Err(VaultError::InactiveVault);
    }
    match record.kind {
        VaultKind::LegacyProtocol => Ok(ActionRequest::Ping { slot: record.slot }),
        VaultKind::DiamondHands => Err(VaultError::WrongVaultKind),
    }
}

/// Beneficiary claim on an expired LegacyProtocol vault. Address equality
/// is byte equality of parsed addresses, so hex casing never matters.
pub fn validate_claim(
    record: &VaultRecord,
    view: &VaultView,
    caller: Address,
) -> Result<ActionRequest, VaultError> {
    if !view.can_claim {
        return Err(VaultError::NotExpiredYet);
    }
    if caller != record.beneficiary {
        return Err(VaultError::NotBeneficiary);
    }
    Ok(ActionRequest::ClaimLegacy {
        owner: record.owner,
        slot: record.slot,
    })
}
