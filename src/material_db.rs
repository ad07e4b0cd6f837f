//! 배관 재질별 Hazen-Williams C 참고 테이블과 최근접 재질 검색을 제공한다.
//! 값은 일반적인 수리 설계 교재의 대표치이며, 실제 관로 진단은 현장 시험으로 검증해야 한다.
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 순위 목록에 담을 후보 재질 수.
pub const TOP_MATCHES: usize = 3;

/// 재질의 조도계수. 단일값 또는 닫힌 구간 `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Roughness {
    Scalar(f64),
    Range(f64, f64),
}

impl Roughness {
    /// 대표값. 구간이면 중앙값, 단일값이면 그 값.
    pub fn representative(&self) -> f64 {
        match *self {
            Roughness::Scalar(c) => c,
            Roughness::Range(low, high) => (low + high) / 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialReference {
    pub name: String,
    pub roughness: Roughness,
}

/// 한 재질과 입력 C 사이의 비교 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialComparison {
    pub material: String,
    /// 재질 대표 C
    pub mean: f64,
    /// |대표 C − 입력 C|
    pub difference: f64,
}

/// 최근접 재질과 상위 후보 목록.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialMatch {
    pub material: String,
    pub top_matches: Vec<MaterialComparison>,
}

/// 재질 테이블 구성 오류. 데이터 문제가 아니라 설정/프로그램 오류로 취급한다.
#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("재질 테이블이 비어 있습니다.")]
    EmptyTable,
    #[error("재질 '{name}'의 조도 구간이 잘못되었습니다: {low} > {high}")]
    InvalidRange { name: String, low: f64, high: f64 },
    #[error("재질 '{0}'의 조도값이 유한한 수가 아닙니다.")]
    NonFinite(String),
}

/// 선언 순서를 보존하는 재질 테이블. 동률일 때 먼저 선언된 재질이 우선한다.
#[derive(Debug, Clone)]
pub struct MaterialTable {
    entries: Vec<MaterialReference>,
}

static BUILT_IN: Lazy<MaterialTable> = Lazy::new(|| MaterialTable {
    entries: MATERIALS
        .iter()
        .map(|(name, roughness)| MaterialReference {
            name: (*name).to_string(),
            roughness: *roughness,
        })
        .collect(),
});

impl MaterialTable {
    /// 사용자 정의 테이블을 검증 후 생성한다.
    pub fn new(entries: Vec<MaterialReference>) -> Result<Self, MaterialError> {
        if entries.is_empty() {
            return Err(MaterialError::EmptyTable);
        }
        for entry in &entries {
            match entry.roughness {
                Roughness::Scalar(c) if !c.is_finite() => {
                    return Err(MaterialError::NonFinite(entry.name.clone()));
                }
                Roughness::Range(low, high) if !low.is_finite() || !high.is_finite() => {
                    return Err(MaterialError::NonFinite(entry.name.clone()));
                }
                Roughness::Range(low, high) if low > high => {
                    return Err(MaterialError::InvalidRange {
                        name: entry.name.clone(),
                        low,
                        high,
                    });
                }
                _ => {}
            }
        }
        Ok(Self { entries })
    }

    /// 내장 테이블. 프로세스 전체에서 한 번만 초기화되고 변경되지 않는다.
    pub fn built_in() -> &'static MaterialTable {
        &BUILT_IN
    }

    pub fn entries(&self) -> &[MaterialReference] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&MaterialReference> {
        self.entries
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
    }

    /// 모든 재질과의 비교 결과를 테이블 선언 순서대로 반환한다.
    pub fn comparisons(&self, c: f64) -> Vec<MaterialComparison> {
        self.entries
            .iter()
            .map(|m| {
                let mean = m.roughness.representative();
                MaterialComparison {
                    material: m.name.clone(),
                    mean,
                    difference: (mean - c).abs(),
                }
            })
            .collect()
    }

    /// 대표값 차이가 가장 작은 재질. 엄격한 `<` 비교이므로 동률이면 먼저 나온 재질을 유지한다.
    pub fn closest(&self, c: f64) -> &MaterialReference {
        let mut best = &self.entries[0];
        let mut best_diff = f64::INFINITY;
        for entry in &self.entries {
            let diff = (entry.roughness.representative() - c).abs();
            if diff < best_diff {
                best_diff = diff;
                best = entry;
            }
        }
        best
    }

    /// 차이 오름차순 상위 `n`개. 안정 정렬이라 동률은 선언 순서를 따른다.
    pub fn rank(&self, c: f64, n: usize) -> Vec<MaterialComparison> {
        let mut all = self.comparisons(c);
        all.sort_by(|a, b| a.difference.total_cmp(&b.difference));
        all.truncate(n);
        all
    }

    pub fn classify(&self, c: f64) -> MaterialMatch {
        MaterialMatch {
            material: self.closest(c).name.clone(),
            top_matches: self.rank(c, TOP_MATCHES),
        }
    }
}

const fn scalar(c: f64) -> Roughness {
    Roughness::Scalar(c)
}

const fn range(low: f64, high: f64) -> Roughness {
    Roughness::Range(low, high)
}

const MATERIALS: &[(&str, Roughness)] = &[
    ("Corrugated steel", scalar(60.0)),
    ("Steel with lock-bar joints, new", scalar(130.0)),
    ("Steel with lock-bar joints, used", range(90.0, 100.0)),
    ("Galvanized steel", scalar(125.0)),
    ("Riveted steel, new", scalar(110.0)),
    ("Riveted steel, used", range(85.0, 90.0)),
    ("Welded steel, new", scalar(130.0)),
    ("Welded steel, used", range(90.0, 100.0)),
    ("Welded steel with special lining", scalar(130.0)),
    ("Zinc-coated steel", range(140.0, 145.0)),
    ("Aluminium", range(140.0, 145.0)),
    ("Asbestos cement", range(130.0, 140.0)),
    ("Concrete, good finish", scalar(130.0)),
    ("Concrete, ordinary finish", scalar(120.0)),
    ("Cast iron, new", scalar(130.0)),
    ("Cast iron, used", range(90.0, 100.0)),
    ("Plastic", range(140.0, 145.0)),
    ("Rigid PVC", range(145.0, 150.0)),
];

// NOTE:
// - Several entries share a representative C (e.g. 130). Table order decides the winner, so keep it stable.
// - Ranges are closed intervals; the representative value is the midpoint.
