use std::borrow::Cow;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::material_db::{MaterialError, MaterialReference, MaterialTable};
use crate::network::SectionConfig;
use crate::roughness::{EstimatorStrategy, DEFAULT_NOMINAL_FLOW_M3_S};
use crate::units::LengthUnit;

/// 설정 파일 기본 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 결측 C를 채울 추정 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum EstimatorKind {
    /// 길이/관경 기반 단계 감점 (기본값)
    Geometry,
    /// 표고차 + 가정 유량 기반 Hazen-Williams 역산
    HeadLoss,
}

/// 입력 파일의 길이/관경 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputUnits {
    pub length: LengthUnit,
    pub diameter: LengthUnit,
}

impl Default for InputUnits {
    fn default() -> Self {
        Self {
            length: LengthUnit::Meter,
            diameter: LengthUnit::Millimeter,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub estimator: EstimatorKind,
    /// HeadLoss 추정에 쓰는 가정 유량 [m3/s]
    pub nominal_flow_m3_s: f64,
    /// 언어 코드(auto/ko/en ...)
    pub language: String,
    /// 외부 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    pub sections: SectionConfig,
    pub units: InputUnits,
    /// 사용자 정의 재질 테이블. 없으면 내장 테이블을 쓴다.
    pub materials: Option<Vec<MaterialReference>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            estimator: EstimatorKind::Geometry,
            nominal_flow_m3_s: DEFAULT_NOMINAL_FLOW_M3_S,
            language: "auto".to_string(),
            language_pack_dir: None,
            sections: SectionConfig::default(),
            units: InputUnits::default(),
            materials: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("섹션 표식이 비어 있습니다: sections.{0}")]
    EmptyMarker(&'static str),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정 경로의 설정을 로드하고, 파일이 없으면 기본값으로 생성한다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    cfg.validate()?;
    Ok(cfg)
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(DEFAULT_CONFIG_PATH))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 빈 섹션 표식은 모든 줄과 일치하므로 거부한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sections.junctions_marker.trim().is_empty() {
            return Err(ConfigError::EmptyMarker("junctions_marker"));
        }
        if self.sections.pipes_marker.trim().is_empty() {
            return Err(ConfigError::EmptyMarker("pipes_marker"));
        }
        Ok(())
    }

    pub fn estimator_strategy(&self) -> EstimatorStrategy {
        match self.estimator {
            EstimatorKind::Geometry => EstimatorStrategy::GeometryHeuristic,
            EstimatorKind::HeadLoss => EstimatorStrategy::HeadLoss {
                nominal_flow_m3_s: self.nominal_flow_m3_s,
            },
        }
    }

    /// 사용할 재질 테이블. 사용자 정의 테이블은 여기서 검증된다.
    pub fn material_table(&self) -> Result<Cow<'static, MaterialTable>, MaterialError> {
        match &self.materials {
            Some(entries) => Ok(Cow::Owned(MaterialTable::new(entries.clone())?)),
            None => Ok(Cow::Borrowed(MaterialTable::built_in())),
        }
    }
}
