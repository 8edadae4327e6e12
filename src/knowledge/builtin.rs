//! Built-in healthcare catalog.

use crate::category::{Category, MetricVector};

use super::{
    ConsensusAlgorithm, ConsensusGroup, DltEntry, KnowledgeBase, Question, TypeDefault,
    WeightRule,
};

pub const GROUP_HIGH_SECURITY: &str = "High Security & Control";
pub const GROUP_HIGH_EFFICIENCY: &str = "High Efficiency";
pub const GROUP_SCALABILITY_GOVERNANCE: &str = "Scalability & Governance";
pub const GROUP_DECENTRALIZED_TRUST: &str = "Decentralized Trust";

const WEIGHT_INCREMENT: f64 = 0.10;

fn dlt(name: &str, dlt_type: &str, metrics: [f64; 4]) -> DltEntry {
    let [security, scalability, energy_efficiency, governance] = metrics;
    DltEntry {
        name: name.to_string(),
        dlt_type: dlt_type.to_string(),
        metrics: MetricVector::new(security, scalability, energy_efficiency, governance),
    }
}

fn algorithm(name: &str, metrics: [f64; 4]) -> ConsensusAlgorithm {
    let [security, scalability, energy_efficiency, governance] = metrics;
    ConsensusAlgorithm {
        name: name.to_string(),
        metrics: MetricVector::new(security, scalability, energy_efficiency, governance),
    }
}

fn group(name: &str, algorithms: Vec<ConsensusAlgorithm>) -> ConsensusGroup {
    ConsensusGroup {
        name: name.to_string(),
        algorithms,
    }
}

fn rule(category: Category, question: &str) -> WeightRule {
    WeightRule {
        category,
        question: question.to_string(),
        increment: WEIGHT_INCREMENT,
    }
}

fn type_default(dlt_type: &str, group: &str) -> TypeDefault {
    TypeDefault {
        dlt_type: dlt_type.to_string(),
        group: group.to_string(),
    }
}

fn question(id: &str, text: &str) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
    }
}

// Metric order: security, scalability, energy_efficiency, governance.
pub(super) fn knowledge_base() -> KnowledgeBase {
    KnowledgeBase {
        dlts: vec![
            dlt("Public Blockchain", "public_permissionless", [0.80, 0.40, 0.30, 0.35]),
            dlt("Private Blockchain", "private_permissioned", [0.90, 0.70, 0.80, 0.90]),
            dlt("Consortium Blockchain", "consortium", [0.85, 0.75, 0.80, 0.85]),
            dlt("Hybrid Blockchain", "hybrid", [0.80, 0.70, 0.70, 0.75]),
            dlt("Directed Acyclic Graph", "dag", [0.70, 0.90, 0.90, 0.55]),
        ],
        groups: vec![
            group(
                GROUP_HIGH_SECURITY,
                vec![
                    algorithm("Practical Byzantine Fault Tolerance", [0.90, 0.55, 0.80, 0.85]),
                    algorithm("Proof of Authority", [0.80, 0.75, 0.90, 0.80]),
                ],
            ),
            group(
                GROUP_HIGH_EFFICIENCY,
                vec![
                    algorithm("Delegated Proof of Stake", [0.70, 0.90, 0.90, 0.65]),
                    algorithm("Proof of Elapsed Time", [0.70, 0.80, 0.95, 0.60]),
                ],
            ),
            group(
                GROUP_SCALABILITY_GOVERNANCE,
                vec![
                    algorithm("Raft", [0.65, 0.85, 0.90, 0.85]),
                    algorithm("Federated Byzantine Agreement", [0.80, 0.80, 0.85, 0.80]),
                ],
            ),
            group(
                GROUP_DECENTRALIZED_TRUST,
                vec![
                    algorithm("Proof of Stake", [0.75, 0.75, 0.85, 0.70]),
                    algorithm("Proof of Work", [0.90, 0.35, 0.10, 0.50]),
                ],
            ),
        ],
        weight_rules: vec![
            rule(Category::Security, "privacy"),
            rule(Category::Security, "network_security"),
            rule(Category::Scalability, "scalability"),
            rule(Category::Scalability, "data_volume"),
            rule(Category::EnergyEfficiency, "energy_efficiency"),
            rule(Category::Governance, "governance_flexibility"),
            rule(Category::Governance, "interoperability"),
        ],
        type_defaults: vec![
            type_default("public_permissionless", GROUP_DECENTRALIZED_TRUST),
            type_default("private_permissioned", GROUP_HIGH_SECURITY),
            type_default("consortium", GROUP_SCALABILITY_GOVERNANCE),
            type_default("hybrid", GROUP_SCALABILITY_GOVERNANCE),
            type_default("dag", GROUP_HIGH_EFFICIENCY),
        ],
        questions: vec![
            question(
                "privacy",
                "Does the use case process sensitive patient data that requires strict privacy?",
            ),
            question(
                "network_security",
                "Is protection against network-level attacks a critical requirement?",
            ),
            question(
                "scalability",
                "Must the system scale to many participants or a high transaction rate?",
            ),
            question(
                "data_volume",
                "Will the system handle large volumes of medical records or imaging data?",
            ),
            question(
                "energy_efficiency",
                "Is low energy consumption an important requirement?",
            ),
            question(
                "interoperability",
                "Must the ledger interoperate with existing healthcare systems such as HL7 FHIR?",
            ),
            question(
                "governance_flexibility",
                "Do participating institutions need flexible control over network rules?",
            ),
        ],
    }
}
