//! Property-based tests.
//!
//! Strategies generate *semantic* values (wei amounts, window durations,
//! clock readings), not raw bytes, with edge-case weights tuned so a fair
//! share of every run sits on the boundaries the classifier branches on.

use alloy_primitives::{Address, U256};
use lifevault_engine::{
    classify, countdown, format_amount, validate_create, ActionRequest, CreateForm, PenaltyTier,
    VaultError, VaultKind, VaultRecord, VaultStatus, MIN_UNLOCK_LEAD_SECS,
};
use proptest::prelude::*;

// ── Strategies ───────────────────────────────────────────────────────────────

/// Wei amounts, biased toward display-boundary values.
///
/// Distribution:
///   10% → 0
///   10% → 1 wei (smallest dust)
///   10% → exactly 1 ETH
///   70% → uniform up to 10^9 ETH
fn amount_strategy() -> impl Strategy<Value = U256> {
    prop_oneof![
        1 => Just(U256::ZERO),
        1 => Just(U256::from(1u64)),
        1 => Just(U256::from(10u64).pow(U256::from(18))),
        7 => (1u128..=1_000_000_000_000_000_000_000_000_000u128).prop_map(U256::from),
    ]
}

/// Lock / inactivity durations in seconds, weighted around the one-day
/// penalty boundary and realistic windows.
fn duration_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        1 => Just(0u64),
        1 => Just(1u64),
        2 => Just(86_400u64),
        2 => (86_399u64..=86_401u64),
        3 => (1u64..=31_536_000u64),
        1 => Just(15_552_000u64),
    ]
}

/// Clock readings: anywhere in the protocol's plausible life.
fn now_strategy() -> impl Strategy<Value = u64> {
    1_600_000_000u64..=2_000_000_000u64
}

fn slot_strategy() -> impl Strategy<Value = u8> {
    0u8..5u8
}

fn diamond_record(slot: u8, amount: U256, timer: u64) -> VaultRecord {
    VaultRecord {
        owner: Address::repeat_byte(0x10),
        slot,
        active: true,
        kind: VaultKind::DiamondHands,
        amount,
        timer,
        last_seen: 0,
        beneficiary: Address::repeat_byte(0x10),
    }
}

fn legacy_record(slot: u8, amount: U256, timer: u64, last_seen: u64) -> VaultRecord {
    VaultRecord {
        owner: Address::repeat_byte(0x10),
        slot,
        active: true,
        kind: VaultKind::LegacyProtocol,
        amount,
        timer,
        last_seen,
        beneficiary: Address::repeat_byte(0xbe),
    }
}

// ── Classifier properties ────────────────────────────────────────────────────

proptest! {
    // The boundary resolves to Unlocked: `now == timer` is never Locked.
    #[test]
    fn diamond_boundary_resolves_unlocked(
        slot in slot_strategy(),
        amount in amount_strategy(),
        timer in now_strategy(),
    ) {
        let view = classify(&diamond_record(slot, amount, timer), timer).unwrap();
        prop_assert_eq!(view.status, VaultStatus::Unlocked);
        prop_assert!(view.can_withdraw);
        prop_assert!(!view.can_claim);
    }

    // Tier depends on time_left alone: High exactly when more than a day
    // remains, whatever the lock status is.
    #[test]
    fn diamond_tier_tracks_time_left_only(
        slot in slot_strategy(),
        amount in amount_strategy(),
        now in now_strategy(),
        offset in -200_000i64..=200_000i64,
    ) {
        let timer = now.saturating_add_signed(offset);
        let view = classify(&diamond_record(slot, amount, timer), now).unwrap();
        let expected = if i128::from(timer) - i128::from(now) > 86_400 {
            PenaltyTier::High
        } else {
            PenaltyTier::Low
        };
        prop_assert_eq!(view.penalty_tier, expected);
    }

    // A legacy vault is claimable exactly when its deadline has passed, and
    // the countdown exists exactly while it has not.
    #[test]
    fn legacy_claimable_iff_deadline_passed(
        slot in slot_strategy(),
        amount in amount_strategy(),
        timer in duration_strategy(),
        last_seen in now_strategy(),
        now in now_strategy(),
    ) {
        let view = classify(&legacy_record(slot, amount, timer, last_seen), now).unwrap();
        let deadline = last_seen.saturating_add(timer);
        prop_assert_eq!(view.can_claim, deadline <= now);
        prop_assert_eq!(view.status == VaultStatus::Secure, deadline > now);
        prop_assert_eq!(view.countdown.is_some(), deadline > now);
        if let Some(cd) = view.countdown {
            prop_assert_eq!(cd.as_secs(), deadline - now);
        }
        prop_assert!(!view.can_withdraw);
    }

    // Determinism: the same inputs always produce the same view.
    #[test]
    fn classification_is_pure(
        slot in slot_strategy(),
        amount in amount_strategy(),
        timer in duration_strategy(),
        last_seen in now_strategy(),
        now in now_strategy(),
    ) {
        let rec = legacy_record(slot, amount, timer, last_seen);
        prop_assert_eq!(classify(&rec, now).unwrap(), classify(&rec, now).unwrap());
    }
}

// ── Validator properties ─────────────────────────────────────────────────────

proptest! {
    // The 15-minute floor is exact: lead >= 900 accepted, anything less
    // rejected as ScheduleTooSoon.
    #[test]
    fn create_floor_is_exact(now in now_strategy(), lead in 0u64..=2_000u64) {
        let form = CreateForm {
            kind: VaultKind::DiamondHands,
            amount: "1.0",
            unlock_at: Some(now + lead),
            inactivity_days: "",
            beneficiary: "",
        };
        let result = validate_create(&form, 0, Address::repeat_byte(0x10), now);
        if lead >= MIN_UNLOCK_LEAD_SECS {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err(), VaultError::ScheduleTooSoon);
        }
    }

    // Whole days always convert exactly; the beneficiary is never defaulted.
    #[test]
    fn legacy_create_converts_days(now in now_strategy(), days in 1u64..=3_650u64) {
        let days_text = days.to_string();
        let form = CreateForm {
            kind: VaultKind::LegacyProtocol,
            amount: "1.0",
            unlock_at: None,
            inactivity_days: &days_text,
            beneficiary: "0x00000000000000000000000000000000000000ab",
        };
        let request = validate_create(&form, 0, Address::repeat_byte(0x10), now).unwrap();
        match request {
            ActionRequest::CreateVault { config_param, .. } => {
                prop_assert_eq!(config_param, days * 86_400);
            }
            other => prop_assert!(false, "unexpected request {:?}", other),
        }

        let empty_bene = CreateForm { beneficiary: "", ..form };
        prop_assert_eq!(
            validate_create(&empty_bene, 0, Address::repeat_byte(0x10), now).unwrap_err(),
            VaultError::MissingBeneficiary
        );
    }
}

// ── Formatting properties ────────────────────────────────────────────────────

proptest! {
    // The countdown either says "Expired" or carries all three units with
    // in-range hour/minute fields.
    #[test]
    fn countdown_is_well_formed(seconds in -1_000_000i64..=100_000_000i64) {
        let text = countdown(seconds);
        if seconds <= 0 {
            prop_assert_eq!(text, "Expired");
        } else {
            let parts: Vec<&str> = text.split(' ').collect();
            prop_assert_eq!(parts.len(), 3);
            let d: i64 = parts[0].strip_suffix('d').unwrap().parse().unwrap();
            let h: i64 = parts[1].strip_suffix('h').unwrap().parse().unwrap();
            let m: i64 = parts[2].strip_suffix('m').unwrap().parse().unwrap();
            prop_assert!(h < 24 && m < 60);
            // Whole-unit truncation: never over the real remainder, and
            // within a minute of it.
            let rebuilt = d * 86_400 + h * 3_600 + m * 60;
            prop_assert!(rebuilt <= seconds && seconds - rebuilt < 60);
        }
    }

    // Amount display keeps at most 5 fractional digits and stays within
    // half a display step of the true value.
    #[test]
    fn format_amount_is_bounded(amount in amount_strategy()) {
        let text = format_amount(amount);
        if let Some((_, frac)) = text.split_once('.') {
            prop_assert!(!frac.is_empty() && frac.len() <= 5);
            prop_assert!(!frac.ends_with('0'));
        }
        prop_assert!(!text.is_empty());
    }
}
