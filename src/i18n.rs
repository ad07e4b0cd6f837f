use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_EMPTY: &str = "report.empty";
    pub const REPORT_SUMMARY: &str = "report.summary";
    pub const REPORT_ESTIMATED_COUNT: &str = "report.estimated_count";

    pub const PIPE_ID: &str = "pipe.id";
    pub const PIPE_COEFFICIENT: &str = "pipe.coefficient";
    pub const PIPE_ESTIMATED_WARNING: &str = "pipe.estimated_warning";
    pub const PIPE_CLOSEST: &str = "pipe.closest";
    pub const PIPE_MEAN_C: &str = "pipe.mean_c";
    pub const PIPE_DIFFERENCE: &str = "pipe.difference";
    pub const PIPE_CANDIDATES: &str = "pipe.candidates";
    pub const PIPE_CANDIDATE_DIFF: &str = "pipe.candidate_diff";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 번역을 가져온다. 언어팩 값이 우선이고, 영어 번역이 없으면 한국어 문자열을 쓴다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).or_else(|| ko(key)).unwrap_or(key),
            Language::Ko => ko(key).unwrap_or(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류:",
        REPORT_TITLE => "=== 관로 조도계수 분류 결과 ===",
        REPORT_EMPTY => "인식된 관로가 없습니다.",
        REPORT_SUMMARY => "관로 수:",
        REPORT_ESTIMATED_COUNT => "추정된 C:",
        PIPE_ID => "관로:",
        PIPE_COEFFICIENT => "C 값:",
        PIPE_ESTIMATED_WARNING => "⚠ 파일에 조도계수가 없어 추정한 값입니다.",
        PIPE_CLOSEST => "최근접 재질:",
        PIPE_MEAN_C => "평균 C:",
        PIPE_DIFFERENCE => "차이:",
        PIPE_CANDIDATES => "가까운 재질 후보:",
        PIPE_CANDIDATE_DIFF => "차이",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error:",
        REPORT_TITLE => "=== Pipe roughness classification ===",
        REPORT_EMPTY => "No pipes recognised.",
        REPORT_SUMMARY => "Pipes:",
        REPORT_ESTIMATED_COUNT => "Estimated C:",
        PIPE_ID => "Pipe:",
        PIPE_COEFFICIENT => "C value:",
        PIPE_ESTIMATED_WARNING => "⚠ Estimated because the file has no roughness value.",
        PIPE_CLOSEST => "Closest material:",
        PIPE_MEAN_C => "mean C:",
        PIPE_DIFFERENCE => "Difference:",
        PIPE_CANDIDATES => "Closest materials:",
        PIPE_CANDIDATE_DIFF => "diff",
        _ => return None,
    })
}
