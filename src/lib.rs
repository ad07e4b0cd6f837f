//! 핵심 분류 로직을 라이브러리로 분리하여 CLI 외의 호출자(앱, 서비스)도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod classify;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod material_db;
pub mod network;
pub mod report;
pub mod roughness;
pub mod units;

pub use classify::{classify_network, ClassifyOptions, Classifier, PipeResult};
