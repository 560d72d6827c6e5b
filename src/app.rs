use std::path::Path;

use crate::catalog::CatalogError;
use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::history::{HistoryError, HistoryStore};
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 단위 변환 오류
    Conversion(ConversionError),
    /// 변환 기록 저장 오류
    History(HistoryError),
    /// 카탈로그 조회 오류
    Catalog(CatalogError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::History(e) => write!(f, "변환 기록 오류: {e}"),
            AppError::Catalog(e) => write!(f, "카탈로그 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ConversionError> for AppError {
    fn from(value: ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<HistoryError> for AppError {
    fn from(value: HistoryError) -> Self {
        AppError::History(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        AppError::Catalog(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(
    config: &mut Config,
    config_path: &Path,
    store: &mut HistoryStore,
    mut tr: Translator,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(&tr)? {
            MenuChoice::Convert => ui_cli::handle_convert(&tr, store)?,
            MenuChoice::History => ui_cli::handle_history(&tr, store)?,
            MenuChoice::ClearHistory => ui_cli::handle_clear_history(&tr, store)?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(&tr, config)? {
                    config.save(config_path)?;
                    let lang = i18n::resolve_language("auto", Some(config.language.as_str()));
                    tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
                }
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
