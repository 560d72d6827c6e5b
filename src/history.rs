use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog;

/// 변환 1건의 기록. 기존 기록 파일과의 호환을 위해 직렬화 필드 이름을 유지한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    #[serde(rename = "Value")]
    pub value: f64,
    #[serde(rename = "From")]
    pub from_unit: String,
    #[serde(rename = "To")]
    pub to_unit: String,
    #[serde(rename = "Result")]
    pub result: String,
}

impl ConversionRecord {
    /// 변환 결과를 소수 4자리 문자열로 포맷해 기록을 만든다.
    pub fn new(value: f64, from_unit: &str, to_unit: &str, result: f64) -> Self {
        Self {
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            result: format!("{result:.4}"),
        }
    }
}

/// 기록 저장 시 발생 가능한 오류.
#[derive(Debug)]
pub enum HistoryError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 직렬화 오류
    Serialize(serde_json::Error),
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryError::Io(e) => write!(f, "기록 파일 입출력 오류: {e}"),
            HistoryError::Serialize(e) => write!(f, "기록 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for HistoryError {}

impl From<std::io::Error> for HistoryError {
    fn from(value: std::io::Error) -> Self {
        HistoryError::Io(value)
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(value: serde_json::Error) -> Self {
        HistoryError::Serialize(value)
    }
}

/// 카테고리별 변환 기록 저장소.
///
/// 모든 변경은 호출이 끝나기 전에 전체 파일 덮어쓰기로 디스크에 반영된다.
/// 단일 프로세스/단일 사용자를 가정하며 파일 잠금은 하지 않는다.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    entries: BTreeMap<String, Vec<ConversionRecord>>,
}

impl HistoryStore {
    /// 파일에서 기록을 로드한다.
    ///
    /// 파일이 없거나 내용이 손상되었으면 조용히 빈 저장소로 시작한다.
    /// 카탈로그에 없는 카테고리 키는 버리지 않고 그대로 유지한다.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut entries: BTreeMap<String, Vec<ConversionRecord>> = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        for kind in catalog::CATEGORIES {
            entries.entry(catalog::category_name(kind).to_string()).or_default();
        }
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 카테고리 기록 끝에 추가하고 전체를 저장한다.
    pub fn append(&mut self, category: &str, record: ConversionRecord) -> Result<(), HistoryError> {
        self.entries.entry(category.to_string()).or_default().push(record);
        self.persist()
    }

    /// 카테고리 기록을 비우고 저장한다. 다른 카테고리는 건드리지 않는다.
    pub fn clear(&mut self, category: &str) -> Result<(), HistoryError> {
        if let Some(records) = self.entries.get_mut(category) {
            records.clear();
        }
        self.persist()
    }

    /// 카테고리 기록을 입력 순서(시간 순)대로 반환한다.
    pub fn view(&self, category: &str) -> &[ConversionRecord] {
        self.entries
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 카테고리 기록 개수.
    pub fn record_count(&self, category: &str) -> usize {
        self.view(category).len()
    }

    fn persist(&self) -> Result<(), HistoryError> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
