use serde::{Deserialize, Serialize};

/// 네트워크 파일의 길이/관경 단위. 내부 기준은 길이=미터, 관경=밀리미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Centimeter,
    Kilometer,
    Inch,
    Foot,
    Yard,
}

impl LengthUnit {
    /// 1 단위가 몇 미터인지 반환한다.
    fn meters_per_unit(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
        }
    }
}

/// 길이를 다른 단위로 변환한다. NaN은 그대로 전파된다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.meters_per_unit() / to.meters_per_unit()
}

/// 배관 길이를 미터로 환산한다.
pub fn to_meters(value: f64, unit: LengthUnit) -> f64 {
    convert_length(value, unit, LengthUnit::Meter)
}

/// 관경을 밀리미터로 환산한다.
pub fn to_millimeters(value: f64, unit: LengthUnit) -> f64 {
    convert_length(value, unit, LengthUnit::Millimeter)
}
