use std::fmt;

use serde::{Deserialize, Serialize};

use crate::answer::AnswerSet;
use crate::knowledge::{
    KnowledgeBase, GROUP_HIGH_EFFICIENCY, GROUP_HIGH_SECURITY, GROUP_SCALABILITY_GOVERNANCE,
};

/// Consensus group chosen for a recommendation, with its justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSelection {
    pub group: String,
    pub explanation: String,
}

/// One answer-driven routing rule.
#[derive(Clone, Copy)]
pub struct GroupRule {
    /// Stable identifier for logging.
    pub name: &'static str,
    pub predicate: fn(&AnswerSet) -> bool,
    pub group: &'static str,
    pub explanation: &'static str,
}

impl fmt::Debug for GroupRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupRule")
            .field("name", &self.name)
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}

impl GroupRule {
    #[must_use]
    pub fn matches(&self, answers: &AnswerSet) -> bool {
        (self.predicate)(answers)
    }
}

fn security_and_privacy(answers: &AnswerSet) -> bool {
    answers.is_yes("network_security") && answers.is_yes("privacy")
}

fn scalability_and_energy(answers: &AnswerSet) -> bool {
    answers.is_yes("scalability") && answers.is_yes("energy_efficiency")
}

fn volume_and_interoperability(answers: &AnswerSet) -> bool {
    answers.is_yes("data_volume") && answers.is_yes("interoperability")
}

/// Answer-driven rules in precedence order. The first match wins; when
/// none match, the DLT type's default group applies.
pub const GROUP_RULES: [GroupRule; 3] = [
    GroupRule {
        name: "security_and_privacy",
        predicate: security_and_privacy,
        group: GROUP_HIGH_SECURITY,
        explanation: "Network security and patient privacy are both required, \
                      so consensus with tight control over validators is preferred.",
    },
    GroupRule {
        name: "scalability_and_energy",
        predicate: scalability_and_energy,
        group: GROUP_HIGH_EFFICIENCY,
        explanation: "Scalability and energy efficiency are both required, \
                      so lightweight high-throughput consensus is preferred.",
    },
    GroupRule {
        name: "volume_and_interoperability",
        predicate: volume_and_interoperability,
        group: GROUP_SCALABILITY_GOVERNANCE,
        explanation: "Large data volumes and interoperability are both required, \
                      so consensus that scales under shared governance is preferred.",
    },
];

/// Routes a DLT type and answers to a consensus group.
///
/// Answer-driven rules take precedence over the DLT type's default group,
/// so the same type can land in different groups. An unrecognized type
/// falls back to the high-security group.
#[must_use]
pub fn select_group(
    dlt_type: &str,
    answers: &AnswerSet,
    knowledge: &KnowledgeBase,
) -> GroupSelection {
    if let Some(rule) = GROUP_RULES.iter().find(|r| r.matches(answers)) {
        tracing::debug!(rule = rule.name, group = rule.group, "consensus group from answers");
        return GroupSelection {
            group: rule.group.to_string(),
            explanation: rule.explanation.to_string(),
        };
    }

    match knowledge.default_group_for(dlt_type) {
        Some(group) => {
            tracing::debug!(dlt_type, group, "consensus group from DLT type");
            GroupSelection {
                group: group.to_string(),
                explanation: format!(
                    "No answer combination forced a group; {group} is the default for {dlt_type} ledgers."
                ),
            }
        }
        None => {
            tracing::warn!(dlt_type, "unrecognized DLT type, using high-security group");
            GroupSelection {
                group: GROUP_HIGH_SECURITY.to_string(),
                explanation: format!(
                    "DLT type '{dlt_type}' has no default group; {GROUP_HIGH_SECURITY} is used as the safe default."
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::Answer;
    use crate::knowledge::GROUP_DECENTRALIZED_TRUST;

    fn yes(questions: &[&str]) -> AnswerSet {
        questions.iter().map(|q| (*q, Answer::Yes)).collect()
    }

    #[test]
    fn test_security_rule_beats_efficiency_rule_for_every_type() {
        let kb = KnowledgeBase::builtin();
        let answers = yes(&["network_security", "privacy", "scalability", "energy_efficiency"]);
        for dlt in &kb.dlts {
            let sel = select_group(&dlt.dlt_type, &answers, &kb);
            assert_eq!(sel.group, GROUP_HIGH_SECURITY, "{}", dlt.dlt_type);
        }
        assert_eq!(
            select_group("unknown", &answers, &kb).group,
            GROUP_HIGH_SECURITY
        );
    }

    #[test]
    fn test_efficiency_rule_beats_volume_rule() {
        let kb = KnowledgeBase::builtin();
        let answers = yes(&["scalability", "energy_efficiency", "data_volume", "interoperability"]);
        let sel = select_group("public_permissionless", &answers, &kb);
        assert_eq!(sel.group, GROUP_HIGH_EFFICIENCY);
        assert_eq!(sel.explanation, GROUP_RULES[1].explanation);
    }

    #[test]
    fn test_volume_rule_applies_alone() {
        let kb = KnowledgeBase::builtin();
        let answers = yes(&["data_volume", "interoperability"]);
        let sel = select_group("dag", &answers, &kb);
        assert_eq!(sel.group, GROUP_SCALABILITY_GOVERNANCE);
    }

    #[test]
    fn test_half_a_rule_does_not_match() {
        let kb = KnowledgeBase::builtin();
        let answers = yes(&["network_security"]).with("privacy", Answer::No);
        let sel = select_group("public_permissionless", &answers, &kb);
        assert_eq!(sel.group, GROUP_DECENTRALIZED_TRUST);
        assert!(sel.explanation.contains("public_permissionless"));
    }

    #[test]
    fn test_type_default_depends_on_dlt_type() {
        let kb = KnowledgeBase::builtin();
        let answers = AnswerSet::new().with("privacy", Answer::Yes);
        assert_eq!(select_group("dag", &answers, &kb).group, GROUP_HIGH_EFFICIENCY);
        assert_eq!(
            select_group("consortium", &answers, &kb).group,
            GROUP_SCALABILITY_GOVERNANCE
        );
        assert_eq!(
            select_group("private_permissioned", &answers, &kb).group,
            GROUP_HIGH_SECURITY
        );
    }

    #[test]
    fn test_unknown_type_defaults_to_high_security() {
        let kb = KnowledgeBase::builtin();
        let sel = select_group("quantum_ledger", &AnswerSet::new(), &kb);
        assert_eq!(sel.group, GROUP_HIGH_SECURITY);
        assert!(sel.explanation.contains("quantum_ledger"));
    }
}
