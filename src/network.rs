//! EPANET `.inp` 형식의 네트워크 텍스트를 절점/관로 레코드로 파싱한다.
//!
//! 인식하는 섹션은 절점(`[JUNCTIONS]`)과 관로(`[PIPES]`) 두 가지뿐이며,
//! 다른 `[...]` 헤더를 만나면 다음 인식 헤더가 나올 때까지 모든 줄을 버린다.
//! 숫자 파싱 실패는 오류로 올리지 않고 NaN/None으로 흘려보낸다.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// 섹션 헤더/주석/열 위치 설정.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    /// 절점 섹션 표식 (대소문자 구분 부분 문자열 일치)
    pub junctions_marker: String,
    /// 관로 섹션 표식
    pub pipes_marker: String,
    /// 주석 시작 문자열
    pub comment_prefix: String,
    /// 절점 줄에서 표고를 읽을 토큰 위치 (0 = ID)
    pub elevation_column: usize,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            junctions_marker: "[JUNCTIONS]".to_string(),
            pipes_marker: "[PIPES]".to_string(),
            comment_prefix: ";".to_string(),
            elevation_column: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Nodes,
    Links,
}

/// 절점 한 줄.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub id: String,
    /// 표고 [m]. 없거나 숫자가 아니면 None.
    pub elevation: Option<f64>,
}

/// 관로 한 줄. 길이/관경은 파일 단위 그대로이며 파싱 실패 시 NaN이다.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeRecord {
    pub id: String,
    pub start_node: String,
    pub end_node: String,
    pub length: f64,
    pub diameter: f64,
    /// 파일에 적힌 C. 열이 없거나 숫자가 아니면 None.
    pub declared_coefficient: Option<f64>,
}

/// 한 번의 파싱 결과.
#[derive(Debug, Clone, Default)]
pub struct ParsedNetwork {
    pub nodes: Vec<NodeRecord>,
    pub pipes: Vec<PipeRecord>,
    /// 절점 섹션의 원본 데이터 줄(trim 적용)
    pub node_lines: Vec<String>,
    /// 관로 섹션의 원본 데이터 줄(trim 적용)
    pub link_lines: Vec<String>,
}

impl ParsedNetwork {
    /// 절점 ID → 표고 맵. 중복 ID는 나중 값이 이기고, 표고가 없으면 0으로 본다.
    pub fn elevations(&self) -> HashMap<String, f64> {
        let mut map = HashMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            map.insert(node.id.clone(), node.elevation.unwrap_or(0.0));
        }
        map
    }
}

/// 네트워크 파일 로드 오류.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("네트워크 파일을 읽을 수 없습니다 ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 파일을 읽어 파싱한다.
pub fn parse_network_file(
    path: &Path,
    sections: &SectionConfig,
) -> Result<ParsedNetwork, NetworkError> {
    let content = fs::read_to_string(path).map_err(|source| NetworkError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_network(&content, sections))
}

/// 네트워크 텍스트 전체를 파싱한다. 실패하지 않는다.
pub fn parse_network(text: &str, sections: &SectionConfig) -> ParsedNetwork {
    let mut parsed = ParsedNetwork::default();
    let mut current = Section::None;

    for (line_no, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.contains(sections.junctions_marker.as_str()) {
            debug!(line = line_no + 1, "junctions section");
            current = Section::Nodes;
            continue;
        }
        if trimmed.contains(sections.pipes_marker.as_str()) {
            debug!(line = line_no + 1, "pipes section");
            current = Section::Links;
            continue;
        }
        if trimmed.starts_with('[') {
            if current != Section::None {
                debug!(line = line_no + 1, header = trimmed, "unrecognized section, skipping");
            }
            current = Section::None;
            continue;
        }
        if current == Section::None {
            continue;
        }

        let data = strip_comment(trimmed, &sections.comment_prefix);
        if data.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = data.split_whitespace().collect();

        match current {
            Section::Nodes => {
                parsed.node_lines.push(trimmed.to_string());
                parsed.nodes.push(NodeRecord {
                    id: tokens[0].to_string(),
                    elevation: parse_optional(tokens.get(sections.elevation_column)),
                });
            }
            Section::Links => {
                parsed.link_lines.push(trimmed.to_string());
                parsed.pipes.push(PipeRecord {
                    id: tokens[0].to_string(),
                    start_node: token_string(&tokens, 1),
                    end_node: token_string(&tokens, 2),
                    length: parse_optional(tokens.get(3)).unwrap_or(f64::NAN),
                    diameter: parse_optional(tokens.get(4)).unwrap_or(f64::NAN),
                    declared_coefficient: parse_optional(tokens.get(5)),
                });
            }
            Section::None => {}
        }
    }

    debug!(
        nodes = parsed.nodes.len(),
        pipes = parsed.pipes.len(),
        "network parsed"
    );
    parsed
}

/// 줄 전체 주석이면 빈 문자열, 줄 끝 주석이면 그 앞부분만 남긴다.
fn strip_comment<'a>(line: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return line;
    }
    match line.find(prefix) {
        Some(idx) => line[..idx].trim_end(),
        None => line,
    }
}

fn token_string(tokens: &[&str], idx: usize) -> String {
    tokens.get(idx).map(|t| t.to_string()).unwrap_or_default()
}

fn parse_optional(token: Option<&&str>) -> Option<f64> {
    token.and_then(|t| t.parse::<f64>().ok())
}
