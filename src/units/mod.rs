//! 입력 파일 단위 정의 및 변환.

pub mod length;

pub use length::{convert_length, to_meters, to_millimeters, LengthUnit};
