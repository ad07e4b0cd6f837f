//! 파싱 → 결측 C 추정 → 재질 분류를 하나로 묶는 순수 함수 경계.
//!
//! 입력 텍스트만으로 결과가 정해지며 호출 간 공유되는 가변 상태가 없다.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{Config, InputUnits};
use crate::material_db::{MaterialComparison, MaterialTable};
use crate::network::{parse_network, ParsedNetwork, PipeRecord, SectionConfig};
use crate::roughness::{usable_coefficient, Estimator, EstimatorStrategy, PipeGeometry};
use crate::units::{to_meters, to_millimeters};

/// 관로 하나의 분류 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipeResult {
    pub id: String,
    /// 파일에 적힌 C (없거나 숫자가 아니면 None)
    pub declared_coefficient: Option<f64>,
    /// 최종 C. 항상 유한하다.
    pub resolved_coefficient: f64,
    /// true면 resolved_coefficient가 추정값이다.
    pub estimated: bool,
    pub matched_material: String,
    /// 차이 오름차순 상위 후보
    pub top_matches: Vec<MaterialComparison>,
}

/// 분류 옵션.
#[derive(Debug, Clone, Default)]
pub struct ClassifyOptions {
    pub sections: SectionConfig,
    pub estimator: EstimatorStrategy,
    pub units: InputUnits,
}

impl From<&Config> for ClassifyOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            sections: cfg.sections.clone(),
            estimator: cfg.estimator_strategy(),
            units: cfg.units,
        }
    }
}

/// 재질 테이블과 옵션을 묶은 분류기.
#[derive(Debug, Clone)]
pub struct Classifier<'t> {
    table: &'t MaterialTable,
    options: ClassifyOptions,
    estimator: Estimator,
}

impl<'t> Classifier<'t> {
    pub fn new(table: &'t MaterialTable, options: ClassifyOptions) -> Self {
        let estimator = Estimator::new(options.estimator);
        Self {
            table,
            options,
            estimator,
        }
    }

    /// 네트워크 텍스트 전체를 분류한다. 결과는 관로 입력 순서를 따른다.
    pub fn classify(&self, text: &str) -> Vec<PipeResult> {
        let network = parse_network(text, &self.options.sections);
        self.classify_parsed(&network)
    }

    pub fn classify_parsed(&self, network: &ParsedNetwork) -> Vec<PipeResult> {
        let elevations = network.elevations();
        let results: Vec<PipeResult> = network
            .pipes
            .iter()
            .map(|pipe| self.classify_pipe(pipe, &elevations))
            .collect();
        info!(
            pipes = results.len(),
            estimated = results.iter().filter(|r| r.estimated).count(),
            "network classified"
        );
        results
    }

    fn classify_pipe(&self, pipe: &PipeRecord, elevations: &HashMap<String, f64>) -> PipeResult {
        let (resolved, estimated) = match usable_coefficient(pipe.declared_coefficient) {
            Some(c) => (c, false),
            None => {
                let geometry = PipeGeometry {
                    length_m: to_meters(pipe.length, self.options.units.length),
                    diameter_mm: to_millimeters(pipe.diameter, self.options.units.diameter),
                    start_elevation_m: self.elevation_m(elevations, &pipe.start_node),
                    end_elevation_m: self.elevation_m(elevations, &pipe.end_node),
                };
                let c = self.estimator.estimate(&geometry);
                debug!(pipe = %pipe.id, c, "coefficient estimated");
                (c, true)
            }
        };
        let matched = self.table.classify(resolved);
        PipeResult {
            id: pipe.id.clone(),
            declared_coefficient: pipe.declared_coefficient,
            resolved_coefficient: resolved,
            estimated,
            matched_material: matched.material,
            top_matches: matched.top_matches,
        }
    }

    /// 절점 표고를 미터로 환산한다. 표고는 관로 길이와 같은 단위로 적혀 있다.
    fn elevation_m(&self, elevations: &HashMap<String, f64>, node: &str) -> f64 {
        let raw = elevations.get(node).copied().unwrap_or(0.0);
        to_meters(raw, self.options.units.length)
    }
}

/// 내장 재질 테이블과 기본 옵션(기하 휴리스틱)으로 분류한다.
pub fn classify_network(text: &str) -> Vec<PipeResult> {
    Classifier::new(MaterialTable::built_in(), ClassifyOptions::default()).classify(text)
}
