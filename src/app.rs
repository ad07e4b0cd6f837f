use thiserror::Error;
use tracing::info;

use crate::classify::{ClassifyOptions, Classifier, PipeResult};
use crate::cli::Cli;
use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::material_db::MaterialError;
use crate::network::{parse_network_file, NetworkError};
use crate::report::{self, OutputFormat};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("재질 테이블 오류: {0}")]
    Material(#[from] MaterialError),
    #[error("JSON 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI 인자를 설정에 덮어쓴다.
pub fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(kind) = cli.estimator {
        config.estimator = kind;
    }
    if let Some(flow) = cli.nominal_flow {
        config.nominal_flow_m3_s = flow;
    }
}

/// 입력 파일을 분류해 결과 목록을 반환한다.
pub fn classify_file(cli: &Cli, config: &Config) -> Result<Vec<PipeResult>, AppError> {
    let table = config.material_table()?;
    let options = ClassifyOptions::from(config);
    info!(
        input = %cli.input.display(),
        estimator = ?options.estimator,
        materials = table.len(),
        "classifying network"
    );
    let network = parse_network_file(&cli.input, &options.sections)?;
    let classifier = Classifier::new(&table, options);
    Ok(classifier.classify_parsed(&network))
}

/// 분류 결과를 요청된 형식의 문자열로 만든다.
pub fn render(
    results: &[PipeResult],
    format: OutputFormat,
    tr: &Translator,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(report::render_text(results, tr)),
        OutputFormat::Json => Ok(report::render_json(results)?),
    }
}

/// CLI 실행 본체.
pub fn run(cli: &Cli, config: &mut Config) -> Result<(), AppError> {
    apply_overrides(cli, config);
    let lang = i18n::resolve_language(&cli.lang, Some(config.language.as_str()));
    let tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
    let results = classify_file(cli, config)?;
    println!("{}", render(&results, cli.format, &tr)?);
    Ok(())
}
