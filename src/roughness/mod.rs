//! 조도계수(C) 결측 판정과 추정 모듈 모음.

pub mod estimator;

pub use estimator::*;

/// 파일에 적힌 C를 그대로 쓸 수 있으면 Some을 반환한다.
///
/// 열이 없거나, 숫자가 아니거나, 유한하지 않거나, 0 이하이면 결측으로 본다.
/// 0은 항상 결측이다.
pub fn usable_coefficient(declared: Option<f64>) -> Option<f64> {
    declared.filter(|c| c.is_finite() && *c > 0.0)
}
