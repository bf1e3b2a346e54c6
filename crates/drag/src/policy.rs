//! The pure drag-end decision function.

use crate::outcome::DragOutcome;

/// What a completed drag means for the shelf and the source files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragDecision {
    /// Self-drop or cancelled drag: keep shelf entries, schedule nothing.
    Ignore,
    /// Effective external drop: clear the dragged entries off the shelf.
    RemoveFromShelf,
    /// Effective external drop with the modifier held: clear the entries
    /// and schedule verified deletion of the sources.
    RemoveAndVerify,
}

/// Map one drag outcome to a decision.
///
/// Exactly two decision points in sequence, then the modifier branch:
///
/// 1. landed on our own surface? → [`Ignore`](DragDecision::Ignore) —
///    an accidental self-drop must not tear entries out of the shelf,
///    whatever the other flags say;
/// 2. no effective operation? → [`Ignore`](DragDecision::Ignore);
/// 3. modifier held? → [`RemoveAndVerify`](DragDecision::RemoveAndVerify),
///    else [`RemoveFromShelf`](DragDecision::RemoveFromShelf).
///
/// Stateless across gestures.
pub fn decide(outcome: &DragOutcome) -> DragDecision {
    if outcome.dropped_inside_own_surface || !outcome.operation_effective {
        return DragDecision::Ignore;
    }
    if outcome.modifier_held { DragDecision::RemoveAndVerify } else { DragDecision::RemoveFromShelf }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn outcome(effective: bool, modifier: bool, inside: bool) -> DragOutcome {
        DragOutcome::new(vec!["/tmp/a.txt".into()], effective, modifier, inside)
    }

    #[rstest]
    #[case(outcome(true, false, true), DragDecision::Ignore)]
    #[case(outcome(true, true, true), DragDecision::Ignore)]
    #[case(outcome(false, false, true), DragDecision::Ignore)]
    #[case(outcome(false, true, true), DragDecision::Ignore)]
    #[case(outcome(false, false, false), DragDecision::Ignore)]
    #[case(outcome(false, true, false), DragDecision::Ignore)]
    #[case(outcome(true, false, false), DragDecision::RemoveFromShelf)]
    #[case(outcome(true, true, false), DragDecision::RemoveAndVerify)]
    fn test_decision_table(#[case] outcome: DragOutcome, #[case] expected: DragDecision) {
        assert_eq!(decide(&outcome), expected);
    }
}
