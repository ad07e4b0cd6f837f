use std::path::PathBuf;

use clap::Parser;

use crate::config::EstimatorKind;
use crate::report::OutputFormat;

/// EPANET `.inp` 파일의 관로별 Hazen-Williams C를 검증/추정하고 재질을 분류한다.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 분류할 네트워크 파일(.inp)
    pub input: PathBuf,

    /// 설정 파일 경로 (기본: ./config.toml, 없으면 생성)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// 로그 레벨
    #[arg(long, default_value = "warn")]
    pub log_level: tracing::Level,

    /// 출력 언어 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    pub lang: String,

    /// 결측 C 추정 방식 (설정 파일 값보다 우선)
    #[arg(long, value_enum)]
    pub estimator: Option<EstimatorKind>,

    /// head-loss 추정용 가정 유량 [m3/s]
    #[arg(long, value_name = "M3_PER_S")]
    pub nominal_flow: Option<f64>,

    /// 출력 형식
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
