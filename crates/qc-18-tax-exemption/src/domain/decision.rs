//! Exemption decision table.
//!
//! Pure: takes two resolved sides, returns a verdict. First matching rule wins.
//!
//! | # | Sender  | Recipient | Exempt iff |
//! |---|---------|-----------|------------|
//! | 1 | absent  | absent    | never |
//! | 2 | zone Z  | zone Z    | always |
//! | 3 | present | absent    | `sender.outgoing` |
//! | 4 | absent  | present   | `recipient.incoming` |
//! | 5 | zone A  | zone B    | `(A.outgoing && A.cross_zone) \|\| (B.incoming && B.cross_zone)` |

use crate::domain::membership::ZoneMembership;

/// The rule of the table that produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionRule {
    /// Neither side belongs to a zone.
    NoZone,
    /// Both sides belong to the same zone.
    SameZone,
    /// Only the sender belongs to a zone.
    SenderOnly,
    /// Only the recipient belongs to a zone.
    RecipientOnly,
    /// Sides belong to two different zones.
    CrossZone,
}

/// Verdict plus the rule that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExemptionDecision {
    pub exempt: bool,
    pub rule: DecisionRule,
}

impl ExemptionDecision {
    /// Whether the levy applies.
    pub fn taxable(&self) -> bool {
        !self.exempt
    }
}

/// Apply the decision table.
pub fn decide(sender: &ZoneMembership, recipient: &ZoneMembership) -> ExemptionDecision {
    let (exempt, rule) = match (sender.zone(), recipient.zone()) {
        (None, None) => (false, DecisionRule::NoZone),
        (Some(from), Some(to)) if from.name == to.name => (true, DecisionRule::SameZone),
        (Some(from), None) => (from.outgoing, DecisionRule::SenderOnly),
        (None, Some(to)) => (to.incoming, DecisionRule::RecipientOnly),
        (Some(from), Some(to)) => (
            (from.outgoing && from.cross_zone) || (to.incoming && to.cross_zone),
            DecisionRule::CrossZone,
        ),
    };
    ExemptionDecision { exempt, rule }
}
