use std::io::{self, Write};

use crate::app::AppError;
use crate::catalog;
use crate::config::Config;
use crate::conversion;
use crate::history::{ConversionRecord, HistoryStore};
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    History,
    ClearHistory,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CONVERT));
    println!("{}", tr.t(keys::MAIN_MENU_HISTORY));
    println!("{}", tr.t(keys::MAIN_MENU_CLEAR_HISTORY));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::History),
            "3" => return Ok(MenuChoice::ClearHistory),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다. 변환 오류는 메시지만 출력하고 기록은 남기지 않는다.
pub fn handle_convert(tr: &Translator, store: &mut HistoryStore) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERT_HEADING));
    let kind = read_category(tr)?;
    println!(
        "{} {}",
        tr.t(keys::CONVERT_UNITS_LABEL),
        catalog::units_for(kind).join(", ")
    );
    let value = read_non_negative_f64(tr, &tr.t(keys::CONVERT_PROMPT_VALUE))?;
    let from_unit = read_line(&tr.t(keys::CONVERT_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(&tr.t(keys::CONVERT_PROMPT_TO_UNIT))?;
    let from_unit = from_unit.trim();
    let to_unit = to_unit.trim();
    match conversion::convert(kind, value, from_unit, to_unit) {
        Ok(result) => {
            println!("{} {result:.4} {to_unit}", tr.t(keys::CONVERT_RESULT));
            let record = ConversionRecord::new(value, from_unit, to_unit, result);
            if let Err(e) = store.append(catalog::category_name(kind), record) {
                println!("{} ({e})", tr.t(keys::HISTORY_NOT_SAVED));
            }
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 변환 기록 조회 메뉴를 처리한다.
pub fn handle_history(tr: &Translator, store: &HistoryStore) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HISTORY_HEADING));
    let kind = read_category(tr)?;
    let records = store.view(catalog::category_name(kind));
    if records.is_empty() {
        println!("{}", tr.t(keys::HISTORY_EMPTY));
        return Ok(());
    }
    for (i, record) in records.iter().enumerate() {
        println!(
            "{}) {} {} -> {} = {}",
            i + 1,
            record.value,
            record.from_unit,
            record.to_unit,
            record.result
        );
    }
    Ok(())
}

/// 변환 기록 삭제 메뉴를 처리한다. 선택한 카테고리만 비운다.
pub fn handle_clear_history(tr: &Translator, store: &mut HistoryStore) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CLEAR_HEADING));
    let kind = read_category(tr)?;
    let name = catalog::category_name(kind);
    match store.clear(name) {
        Ok(()) => println!("{} {name}", tr.t(keys::HISTORY_CLEARED)),
        Err(e) => println!("{} ({e})", tr.t(keys::HISTORY_NOT_SAVED)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어가 바뀌었으면 true를 반환한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(false);
    }
    let lang = match sel.trim() {
        "1" => "auto",
        "2" => "ko-kr",
        "3" => "en-us",
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(false);
        }
    };
    cfg.language = lang.to_string();
    println!("{} {lang}", tr.t(keys::SETTINGS_SAVED));
    Ok(true)
}

fn read_category(tr: &Translator) -> Result<QuantityKind, AppError> {
    println!("{}", tr.t(keys::CONVERT_OPTIONS));
    loop {
        let sel = read_line(&tr.t(keys::CONVERT_PROMPT_CATEGORY))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_category(n) {
                return Ok(kind);
            }
        }
        println!("{}", tr.t(keys::CONVERT_UNSUPPORTED));
    }
}

fn map_category(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Length),
        2 => Some(QuantityKind::Weight),
        3 => Some(QuantityKind::Volume),
        4 => Some(QuantityKind::Temperature),
        5 => Some(QuantityKind::Speed),
        6 => Some(QuantityKind::Time),
        _ => None,
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_non_negative_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) if v >= 0.0 => return Ok(v),
            Ok(_) => println!("{}", tr.t(keys::ERROR_NEGATIVE_VALUE)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
