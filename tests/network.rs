//! .inp 섹션 파싱 회귀 테스트.
use std::path::Path;

use pipe_roughness_toolbox::network::{
    parse_network, parse_network_file, NetworkError, SectionConfig,
};

const SAMPLE: &str = "\
N0 99 99 99 99 99
[TITLE]
demo network
[JUNCTIONS]
;ID   Elev  Demand
J1    0     12.5
J2    0     8

[PIPES]
;ID  Node1  Node2  Length  Diameter  Roughness
P1   J1     J2     1000    150       130   ; main line
P2   J1     J2     1500    80
[OTHER]
junk 1 2 3 4 5 6
[PIPES]
P3   J2     J1     abc     def       xyz
";

#[test]
fn only_recognized_sections_produce_records() {
    let net = parse_network(SAMPLE, &SectionConfig::default());
    let node_ids: Vec<&str> = net.nodes.iter().map(|n| n.id.as_str()).collect();
    let pipe_ids: Vec<&str> = net.pipes.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(node_ids, ["J1", "J2"]);
    assert_eq!(pipe_ids, ["P1", "P2", "P3"]);
    assert!(!pipe_ids.contains(&"junk"));
    assert!(!node_ids.contains(&"N0"));
    assert!(!node_ids.contains(&"demo"));
}

#[test]
fn pipe_columns_are_positional() {
    let net = parse_network(SAMPLE, &SectionConfig::default());
    let p1 = &net.pipes[0];
    assert_eq!(p1.start_node, "J1");
    assert_eq!(p1.end_node, "J2");
    assert_eq!(p1.length, 1000.0);
    assert_eq!(p1.diameter, 150.0);
    assert_eq!(p1.declared_coefficient, Some(130.0));

    let p2 = &net.pipes[1];
    assert_eq!(p2.declared_coefficient, None);
}

#[test]
fn unparseable_numbers_become_nan_or_none() {
    let net = parse_network(SAMPLE, &SectionConfig::default());
    let p3 = &net.pipes[2];
    assert!(p3.length.is_nan());
    assert!(p3.diameter.is_nan());
    assert_eq!(p3.declared_coefficient, None);
}

#[test]
fn elevation_is_read_from_configured_column() {
    // 기본 열(2)은 수요량 열이다.
    let net = parse_network(SAMPLE, &SectionConfig::default());
    assert_eq!(net.nodes[0].elevation, Some(12.5));

    let sections = SectionConfig {
        elevation_column: 1,
        ..SectionConfig::default()
    };
    let net = parse_network(SAMPLE, &sections);
    assert_eq!(net.nodes[0].elevation, Some(0.0));
}

#[test]
fn missing_elevation_defaults_to_zero_and_last_duplicate_wins() {
    let text = "[JUNCTIONS]\nA 1\nB 0 7\nB 0 9\n";
    let net = parse_network(text, &SectionConfig::default());
    assert_eq!(net.nodes[0].elevation, None);
    let elev = net.elevations();
    assert_eq!(elev["A"], 0.0);
    assert_eq!(elev["B"], 9.0);
}

#[test]
fn raw_section_lines_are_kept() {
    let net = parse_network(SAMPLE, &SectionConfig::default());
    assert_eq!(net.node_lines, ["J1    0     12.5", "J2    0     8"]);
    assert_eq!(net.link_lines.len(), 3);
    assert!(net.link_lines[0].ends_with("; main line"));
}

#[test]
fn empty_or_headerless_input_yields_nothing() {
    assert!(parse_network("", &SectionConfig::default()).pipes.is_empty());
    let net = parse_network("P1 A B 10 100 120\n", &SectionConfig::default());
    assert!(net.pipes.is_empty());
    assert!(net.nodes.is_empty());
}

#[test]
fn markers_are_case_sensitive_and_configurable() {
    let text = "[pipes]\nP1 A B 10 100 120\n";
    assert!(parse_network(text, &SectionConfig::default()).pipes.is_empty());

    let sections = SectionConfig {
        pipes_marker: "[pipes]".to_string(),
        ..SectionConfig::default()
    };
    assert_eq!(parse_network(text, &sections).pipes.len(), 1);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = parse_network_file(
        Path::new("definitely/not/here.inp"),
        &SectionConfig::default(),
    )
    .expect_err("missing file");
    assert!(matches!(err, NetworkError::Io { .. }));
    assert!(err.to_string().contains("here.inp"));
}
