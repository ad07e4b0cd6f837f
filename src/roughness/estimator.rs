use tracing::warn;

/// 기하 휴리스틱의 출발값.
pub const BASELINE_C: f64 = 120.0;
/// 기하 휴리스틱 결과 하한/상한.
pub const MIN_ESTIMATED_C: f64 = 80.0;
pub const MAX_ESTIMATED_C: f64 = 140.0;
/// 길이가 0 이하이거나 숫자가 아닐 때 쓰는 동수경사.
pub const DEFAULT_GRADIENT: f64 = 0.01;
/// 가정 유량 [m3/s]. 실측값이 아닌 설계용 자리표시값이다.
pub const DEFAULT_NOMINAL_FLOW_M3_S: f64 = 0.01;

const HW_CONSTANT: f64 = 0.849;
const HW_DIAMETER_EXP: f64 = 2.63;
const HW_GRADIENT_EXP: f64 = 0.54;
const HW_FLOW_EXP: f64 = 1.85;

/// 추정 전략.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EstimatorStrategy {
    /// 길이/관경 단계 감점 방식
    #[default]
    GeometryHeuristic,
    /// 양단 표고차와 가정 유량으로 Hazen-Williams 식을 C에 대해 푸는 방식
    HeadLoss { nominal_flow_m3_s: f64 },
}

/// 추정에 필요한 관로 기하 정보. 길이는 m, 관경은 mm 기준이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeGeometry {
    pub length_m: f64,
    pub diameter_mm: f64,
    pub start_elevation_m: f64,
    pub end_elevation_m: f64,
}

/// C 값이 없는 관로에 대해 대체 C를 만든다. 결과는 항상 유한하다.
#[derive(Debug, Clone, Copy, Default)]
pub struct Estimator {
    strategy: EstimatorStrategy,
}

impl Estimator {
    pub fn new(strategy: EstimatorStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> EstimatorStrategy {
        self.strategy
    }

    pub fn estimate(&self, pipe: &PipeGeometry) -> f64 {
        match self.strategy {
            EstimatorStrategy::GeometryHeuristic => {
                geometry_heuristic(pipe.length_m, pipe.diameter_mm)
            }
            EstimatorStrategy::HeadLoss { nominal_flow_m3_s } => {
                let c = head_loss_coefficient(pipe, nominal_flow_m3_s);
                if c.is_finite() && c > 0.0 {
                    c
                } else {
                    let fallback = geometry_heuristic(pipe.length_m, pipe.diameter_mm);
                    warn!(
                        length_m = pipe.length_m,
                        diameter_mm = pipe.diameter_mm,
                        raw = c,
                        fallback,
                        "head-loss estimate degenerate, using geometry heuristic"
                    );
                    fallback
                }
            }
        }
    }
}

/// 길이/관경 위험 요인에 따른 단계 감점 후 [80, 140]으로 제한한다.
/// 물리적 유도식이 아닌 기본값 생성기이다. NaN 입력은 감점 없이 기준값이 된다.
pub fn geometry_heuristic(length_m: f64, diameter_mm: f64) -> f64 {
    let mut c = BASELINE_C;
    if length_m > 1000.0 {
        c -= 5.0;
    }
    if length_m > 2000.0 {
        c -= 10.0;
    }
    if diameter_mm < 100.0 {
        c -= 5.0;
    }
    if diameter_mm < 50.0 {
        c -= 10.0;
    }
    c.clamp(MIN_ESTIMATED_C, MAX_ESTIMATED_C)
}

/// 동수경사 S = |Δz| / L. 길이가 양수가 아니면 기본 경사를 쓴다.
pub fn hydraulic_gradient(pipe: &PipeGeometry) -> f64 {
    if pipe.length_m > 0.0 {
        (pipe.start_elevation_m - pipe.end_elevation_m).abs() / pipe.length_m
    } else {
        DEFAULT_GRADIENT
    }
}

/// C = (Q / (0.849 · D^2.63 · S^0.54))^(1/1.85), D는 m.
///
/// 관경 0이나 표고차 0이면 무한대/NaN이 나올 수 있으며 그대로 반환한다.
pub fn head_loss_coefficient(pipe: &PipeGeometry, flow_m3_s: f64) -> f64 {
    let d_m = pipe.diameter_mm / 1000.0;
    let s = hydraulic_gradient(pipe);
    let denom = HW_CONSTANT * d_m.powf(HW_DIAMETER_EXP) * s.powf(HW_GRADIENT_EXP);
    (flow_m3_s / denom).powf(1.0 / HW_FLOW_EXP)
}
