use std::process::ExitCode;

use clap::Parser;
use pipe_roughness_toolbox::{app, cli::Cli, config, i18n};
use tracing_subscriber::FmtSubscriber;

/// 프로그램의 엔트리 포인트. 로깅과 설정을 준비한 뒤 분류를 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("logging setup failed: {err}");
    }

    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let tr = i18n::Translator::new(&i18n::resolve_language(&cli.lang, None));
            eprintln!("{} {err}", tr.t(i18n::keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli) -> Result<(), app::AppError> {
    let mut cfg = match &cli.config {
        Some(path) => config::load_or_create(path)?,
        None => config::load_or_default()?,
    };
    app::run(cli, &mut cfg)
}
