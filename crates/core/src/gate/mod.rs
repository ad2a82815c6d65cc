//! Bound gate - keeps accepted values at or below an optional maximum.
//!
//! Exceeding the bound is not an error. The candidate is dropped and the
//! caller gets back the previous mask together with the value that mask
//! actually represents.

use log::debug;
use rust_decimal::Decimal;

use crate::config::ResolvedRule;
use crate::errors::Result;
use crate::mask::MaskedValue;
use crate::normalize::{normalize, RawInput};

/// Result of passing a candidate through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// The candidate is within the bound and becomes the new display state.
    Accepted(MaskedValue),
    /// The candidate exceeded the bound; display state stays as it was.
    Rejected(MaskedValue),
}

impl GateOutcome {
    /// The pair to hand to callers, whichever way the gate went.
    pub fn emitted(&self) -> &MaskedValue {
        match self {
            GateOutcome::Accepted(value) | GateOutcome::Rejected(value) => value,
        }
    }

    pub fn into_emitted(self) -> MaskedValue {
        match self {
            GateOutcome::Accepted(value) | GateOutcome::Rejected(value) => value,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, GateOutcome::Accepted(_))
    }
}

/// Checks `candidate` against `bound` (inclusive).
///
/// On rejection the value is recovered by normalizing `previous_masked`
/// with the same rule, so value and mask stay in sync.
pub fn gate(
    candidate: MaskedValue,
    previous_masked: &str,
    bound: Option<Decimal>,
    rule: &ResolvedRule,
) -> Result<GateOutcome> {
    match bound {
        Some(max) if candidate.value > max => {
            debug!(
                "Rejected {} above bound {}, keeping {}",
                candidate.value, max, previous_masked
            );
            let recovered = normalize(&RawInput::from(previous_masked), rule)?;
            Ok(GateOutcome::Rejected(MaskedValue::new(
                recovered,
                previous_masked,
            )))
        }
        _ => Ok(GateOutcome::Accepted(candidate)),
    }
}
