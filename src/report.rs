use std::fmt::Write as _;

use clap::ValueEnum;

use crate::classify::PipeResult;
use crate::i18n::{keys, Translator};

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// 관로별 결과 카드를 텍스트로 만든다. 수치는 소수 둘째 자리까지 표시한다.
pub fn render_text(results: &[PipeResult], tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::REPORT_TITLE));
    if results.is_empty() {
        let _ = writeln!(out, "{}", tr.t(keys::REPORT_EMPTY));
        return out;
    }
    for result in results {
        out.push('\n');
        write_card(&mut out, result, tr);
    }
    let estimated = results.iter().filter(|r| r.estimated).count();
    let _ = writeln!(
        out,
        "\n{} {}  {} {}",
        tr.t(keys::REPORT_SUMMARY),
        results.len(),
        tr.t(keys::REPORT_ESTIMATED_COUNT),
        estimated
    );
    out
}

fn write_card(out: &mut String, result: &PipeResult, tr: &Translator) {
    let _ = writeln!(out, "{} {}", tr.t(keys::PIPE_ID), result.id);
    let _ = writeln!(
        out,
        "  {} {:.2}",
        tr.t(keys::PIPE_COEFFICIENT),
        result.resolved_coefficient
    );
    if result.estimated {
        let _ = writeln!(out, "  {}", tr.t(keys::PIPE_ESTIMATED_WARNING));
    }
    if let Some(best) = result.top_matches.first() {
        let _ = writeln!(
            out,
            "  {} {}  ({} {:.2})",
            tr.t(keys::PIPE_CLOSEST),
            result.matched_material,
            tr.t(keys::PIPE_MEAN_C),
            best.mean
        );
        let _ = writeln!(
            out,
            "  {} {:.2}",
            tr.t(keys::PIPE_DIFFERENCE),
            best.difference
        );
    }
    let _ = writeln!(out, "  {}", tr.t(keys::PIPE_CANDIDATES));
    for cmp in &result.top_matches {
        let _ = writeln!(
            out,
            "    • {} (C = {:.2}, {} = {:.2})",
            cmp.material,
            cmp.mean,
            tr.t(keys::PIPE_CANDIDATE_DIFF),
            cmp.difference
        );
    }
}

/// 결과 목록을 보기 좋게 들여쓴 JSON으로 직렬화한다.
pub fn render_json(results: &[PipeResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}
