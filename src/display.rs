//! Dashboard card text, derived from `(record, view)` only.
//!
//! Classification stays in [`crate::classify`]; this module is the one
//! place the card's exact wording lives, so the strings below are rendered
//! by the UI verbatim.

use crate::classify::{VaultStatus, VaultView};
use crate::format::{countdown, format_date};
use crate::record::{VaultKind, VaultRecord};

/// `"Diamond Vault #1"` / `"Legacy Protocol #3"` — slots display 1-based.
pub fn card_title(record: &VaultRecord) -> String {
    match record.kind {
        VaultKind::DiamondHands => format!("Diamond Vault #{}", record.slot + 1),
        VaultKind::LegacyProtocol => format!("Legacy Protocol #{}", record.slot + 1),
    }
}

pub fn status_text(view: &VaultView) -> &'static str {
    match view.status {
        VaultStatus::Locked => "Locked",
        VaultStatus::Unlocked => "Unlocked",
        VaultStatus::Secure => "Secure",
        VaultStatus::Expired => "Expired",
    }
}

/// The line under the status badge.
pub fn status_detail(record: &VaultRecord, view: &VaultView) -> String {
    match view.status {
        VaultStatus::Locked => format!("Unlocks: {}", format_date(record.timer)),
        VaultStatus::Unlocked => "Ready to withdraw".to_string(),
        VaultStatus::Secure => {
            let remaining = view.countdown.map_or(0, |d| d.as_secs() as i64);
            format!("{} remaining", countdown(remaining))
        }
        VaultStatus::Expired => "Beneficiary hasn't claimed yet. Reset timer?".to_string(),
    }
}

/// Withdraw button: names the fee while it applies.
pub fn withdraw_label(view: &VaultView) -> String {
    match view.status {
        VaultStatus::Locked => format!("Emergency Withdraw (-{}%)", view.penalty_tier.percent()),
        _ => "Withdraw Funds".to_string(),
    }
}

/// Ping button: turns into a rescue prompt once the window has lapsed.
pub fn ping_label(view: &VaultView) -> &'static str {
    if view.can_claim {
        "Emergency Ping (Save Funds!)"
    } else {
        "Ping (I am alive)"
    }
}

/// Claim button; doubles as the disabled-state text.
pub fn claim_label(view: &VaultView) -> &'static str {
    if view.can_claim {
        "Claim Inheritance"
    } else {
        "Not Expired Yet"
    }
}

/// `"Last Ping:"` row value; LegacyProtocol cards only.
pub fn last_ping_text(record: &VaultRecord) -> Option<String> {
    match record.kind {
        VaultKind::LegacyProtocol => Some(format_date(record.last_seen)),
        VaultKind::DiamondHands => None,
    }
}
