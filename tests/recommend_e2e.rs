use std::sync::Arc;

use dlt_advisor::{
    recommend, Advisor, AdvisorConfig, Answer, AnswerSet, Category, DltEntry, KnowledgeBase,
    MetricVector, Recommendation, NOT_AVAILABLE,
};

const WEIGHTED_QUESTIONS: [&str; 7] = [
    "privacy",
    "network_security",
    "scalability",
    "data_volume",
    "energy_efficiency",
    "interoperability",
    "governance_flexibility",
];

fn answers_from_mask(mask: u32) -> AnswerSet {
    WEIGHTED_QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, q)| (*q, Answer::from(mask & (1 << i) != 0)))
        .collect()
}

#[test]
fn every_questionnaire_yields_a_consistent_recommendation() {
    let advisor = Advisor::new();
    for mask in 0u32..(1 << WEIGHTED_QUESTIONS.len()) {
        let answers = answers_from_mask(mask);
        let rec = advisor.recommend(&answers);

        assert!(rec.is_available(), "mask {mask}");
        assert!((rec.weights.total() - 1.0).abs() < 1e-9, "mask {mask}");
        assert!(Category::ALL.iter().all(|c| *rec.weights.get(*c) > 0.0));
        assert!((0.0..=1.0).contains(&rec.confidence_value), "mask {mask}");
        assert_eq!(rec.confidence, rec.confidence_value > 0.7);
        assert_ne!(rec.consensus_algorithm, NOT_AVAILABLE);

        let group = advisor.knowledge().group(&rec.consensus_group).unwrap();
        assert!(group.algorithms.iter().any(|a| a.name == rec.consensus_algorithm));

        let best = rec
            .weighted_scores
            .iter()
            .map(|s| s.score)
            .fold(f64::NEG_INFINITY, f64::max);
        let chosen = rec
            .weighted_scores
            .iter()
            .find(|s| s.name == rec.dlt)
            .unwrap();
        assert_eq!(chosen.score, best);
    }
}

#[test]
fn security_rule_wins_over_efficiency_rule() {
    let answers = AnswerSet::from_labels([
        ("network_security", "Yes"),
        ("privacy", "Yes"),
        ("scalability", "Yes"),
        ("energy_efficiency", "Yes"),
    ])
    .unwrap();
    let rec = recommend(&answers);
    assert_eq!(rec.consensus_group, "High Security & Control");
}

#[test]
fn empty_questionnaire_yields_sentinel() {
    let rec = recommend(&AnswerSet::new());
    assert_eq!(rec.dlt, NOT_AVAILABLE);
    assert_eq!(rec.consensus_algorithm, NOT_AVAILABLE);
    assert!(!rec.confidence);
    assert_eq!(rec.confidence_value, 0.0);
    assert!(rec.weighted_scores.is_empty());
    assert!(rec.evaluation_matrix.is_empty());
    assert_eq!(rec.algorithm_metrics, MetricVector::zero());
}

#[test]
fn repeated_calls_are_identical() {
    let answers = answers_from_mask(0b101_0110);
    let first = recommend(&answers);
    for _ in 0..20 {
        assert_eq!(recommend(&answers), first);
    }
}

#[test]
fn tied_dlts_resolve_to_first_declared_across_runs() {
    let mut knowledge = KnowledgeBase::builtin();
    let metrics = MetricVector::new(0.95, 0.95, 0.95, 0.95);
    knowledge.dlts.insert(
        0,
        DltEntry {
            name: "Tie A".to_string(),
            dlt_type: "consortium".to_string(),
            metrics: metrics.clone(),
        },
    );
    knowledge.dlts.push(DltEntry {
        name: "Tie B".to_string(),
        dlt_type: "dag".to_string(),
        metrics,
    });
    let advisor = Advisor::with_config(Arc::new(knowledge), AdvisorConfig::default()).unwrap();

    let answers = AnswerSet::new().with("governance_flexibility", Answer::Yes);
    for _ in 0..10 {
        let rec = advisor.recommend(&answers);
        assert_eq!(rec.dlt, "Tie A");
        assert_eq!(rec.dlt_type, "consortium");
        assert_eq!(rec.consensus_group, "Scalability & Governance");
    }
}

#[test]
fn advisor_can_be_shared_across_threads() {
    let advisor = Arc::new(Advisor::new());
    let expected: Vec<Recommendation> = (0..8)
        .map(|m| advisor.recommend(&answers_from_mask(m * 13)))
        .collect();

    std::thread::scope(|s| {
        for (m, want) in expected.iter().enumerate() {
            let advisor = Arc::clone(&advisor);
            s.spawn(move || {
                let mask = u32::try_from(m).unwrap() * 13;
                assert_eq!(&advisor.recommend(&answers_from_mask(mask)), want);
            });
        }
    });
}

#[test]
fn recommendation_survives_json() {
    let rec = recommend(&answers_from_mask(0b000_0011));
    let json = serde_json::to_string(&rec).unwrap();
    let back: Recommendation = serde_json::from_str(&json).unwrap();
    assert_eq!(back.dlt, rec.dlt);
    assert_eq!(back.consensus_algorithm, rec.consensus_algorithm);
    assert_eq!(back.explanations, rec.explanations);
    assert!((back.confidence_value - rec.confidence_value).abs() < 1e-12);

    let value = serde_json::to_value(&rec).unwrap();
    assert_eq!(value["weighted_scores"][0]["name"], "Public Blockchain");
    assert!(value["explanations"]["security"].is_array());
}

#[test]
fn answers_parse_from_questionnaire_json() {
    let answers: AnswerSet = serde_json::from_str(
        r#"{"privacy": "Ja", "network_security": "yes", "scenario_telemedicine": "No"}"#,
    )
    .unwrap();
    let rec = recommend(&answers);
    assert_eq!(rec.consensus_group, "High Security & Control");
    assert_eq!(rec.explanations.security.len(), 2);
}
