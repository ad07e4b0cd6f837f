//! 파싱 → 추정 → 분류 전체 흐름 회귀 테스트.
use pipe_roughness_toolbox::config::InputUnits;
use pipe_roughness_toolbox::material_db::MaterialTable;
use pipe_roughness_toolbox::network::SectionConfig;
use pipe_roughness_toolbox::roughness::EstimatorStrategy;
use pipe_roughness_toolbox::units::LengthUnit;
use pipe_roughness_toolbox::{classify_network, ClassifyOptions, Classifier};

const EXAMPLE: &str = "\
[JUNCTIONS]
N1 10
N2 0
[PIPES]
P1 N1 N2 1000 150 130
P2 N1 N2 1500 80
[OTHER]
junk 1 2 3
";

#[test]
fn end_to_end_example() {
    let results = classify_network(EXAMPLE);
    assert_eq!(results.len(), 2);

    let p1 = &results[0];
    assert_eq!(p1.id, "P1");
    assert_eq!(p1.resolved_coefficient, 130.0);
    assert!(!p1.estimated);
    assert_eq!(p1.matched_material, "Steel with lock-bar joints, new");
    assert_eq!(p1.top_matches.len(), 3);
    assert!(p1.top_matches.iter().all(|m| m.difference == 0.0));

    let p2 = &results[1];
    assert_eq!(p2.id, "P2");
    assert!(p2.estimated);
    assert_eq!(p2.declared_coefficient, None);
    assert_eq!(p2.resolved_coefficient, 110.0);
    assert_eq!(p2.matched_material, "Riveted steel, new");

    assert!(results.iter().all(|r| r.id != "junk"));
}

#[test]
fn classification_is_deterministic() {
    let first = classify_network(EXAMPLE);
    for _ in 0..5 {
        assert_eq!(classify_network(EXAMPLE), first);
    }
}

#[test]
fn missing_non_numeric_and_zero_coefficients_are_estimated() {
    let text = "\
[PIPES]
A n1 n2 500 150
B n1 n2 500 150 rough
C n1 n2 500 150 0
D n1 n2 500 150 97.5
E n1 n2 abc 150
";
    let results = classify_network(text);
    for r in &results[..3] {
        assert!(r.estimated, "{}", r.id);
        assert!(r.resolved_coefficient.is_finite());
        assert_eq!(r.resolved_coefficient, 120.0);
    }
    assert!(!results[3].estimated);
    assert_eq!(results[3].resolved_coefficient, 97.5);
    assert_eq!(results[3].declared_coefficient, Some(97.5));

    assert!(results[4].estimated);
    assert!(results[4].resolved_coefficient.is_finite());
}

#[test]
fn results_follow_input_order() {
    let text = "[PIPES]\nZ a b 1 100 140\nA a b 1 100 60\nM a b 1 100 100\n";
    let ids: Vec<String> = classify_network(text).into_iter().map(|r| r.id).collect();
    assert_eq!(ids, ["Z", "A", "M"]);
}

#[test]
fn head_loss_strategy_uses_endpoint_elevations() {
    let options = ClassifyOptions {
        sections: SectionConfig {
            elevation_column: 1,
            ..SectionConfig::default()
        },
        estimator: EstimatorStrategy::HeadLoss {
            nominal_flow_m3_s: 0.01,
        },
        ..ClassifyOptions::default()
    };
    let classifier = Classifier::new(MaterialTable::built_in(), options);
    let results = classifier.classify(EXAMPLE);
    let p2 = &results[1];
    assert!(p2.estimated);
    assert!((p2.resolved_coefficient - 14.188).abs() < 1e-3);
    assert_eq!(p2.matched_material, "Corrugated steel");
    // 선언값이 있는 관로는 전략과 무관하다.
    assert_eq!(results[0].resolved_coefficient, 130.0);
}

#[test]
fn head_loss_without_elevation_difference_falls_back() {
    // 기본 표고 열(2)은 예제 절점 줄에 없으므로 양단 표고가 모두 0이다.
    let options = ClassifyOptions {
        estimator: EstimatorStrategy::HeadLoss {
            nominal_flow_m3_s: 0.01,
        },
        ..ClassifyOptions::default()
    };
    let results = Classifier::new(MaterialTable::built_in(), options).classify(EXAMPLE);
    assert_eq!(results[1].resolved_coefficient, 110.0);
}

#[test]
fn input_units_are_normalized_before_estimation() {
    // 1 km 길이 + 3 inch 관경 → 1000 m(감점 없음), 76.2 mm(−5)
    let text = "[PIPES]\nU1 a b 1 3\n";
    let options = ClassifyOptions {
        units: InputUnits {
            length: LengthUnit::Kilometer,
            diameter: LengthUnit::Inch,
        },
        ..ClassifyOptions::default()
    };
    let results = Classifier::new(MaterialTable::built_in(), options).classify(text);
    assert_eq!(results[0].resolved_coefficient, 115.0);
}

#[test]
fn unrecognized_input_is_empty_not_an_error() {
    assert!(classify_network("hello\nworld\n[TITLE]\nx y z\n").is_empty());
}

#[test]
fn elevations_follow_the_length_unit() {
    // 1000 m 관로, 10 m 낙차를 미터/피트로 각각 적은 같은 네트워크
    let ft = 0.3048;
    let metric = "[JUNCTIONS]\nA 10\nB 0\n[PIPES]\nP A B 1000 150\n".to_string();
    let imperial = format!(
        "[JUNCTIONS]\nA {}\nB 0\n[PIPES]\nP A B {} 150\n",
        10.0 / ft,
        1000.0 / ft
    );
    let options = |length| ClassifyOptions {
        sections: SectionConfig {
            elevation_column: 1,
            ..SectionConfig::default()
        },
        estimator: EstimatorStrategy::HeadLoss {
            nominal_flow_m3_s: 0.01,
        },
        units: InputUnits {
            length,
            diameter: LengthUnit::Millimeter,
        },
    };
    let table = MaterialTable::built_in();
    let c_m = Classifier::new(table, options(LengthUnit::Meter)).classify(&metric)[0]
        .resolved_coefficient;
    let c_ft = Classifier::new(table, options(LengthUnit::Foot)).classify(&imperial)[0]
        .resolved_coefficient;
    assert!((c_m - 5.157).abs() < 1e-3, "metric C = {c_m}");
    assert!((c_m - c_ft).abs() < 1e-6, "metric C = {c_m}, feet C = {c_ft}");
}
