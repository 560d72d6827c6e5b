use crate::quantity::QuantityKind;

/// 카탈로그 조회 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// 등록되지 않은 카테고리 이름
    NotFound(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::NotFound(name) => write!(f, "등록되지 않은 카테고리: {name}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// 화면 표시 순서대로 나열한 카테고리 목록.
pub const CATEGORIES: [QuantityKind; 6] = [
    QuantityKind::Length,
    QuantityKind::Weight,
    QuantityKind::Volume,
    QuantityKind::Temperature,
    QuantityKind::Speed,
    QuantityKind::Time,
];

/// 카테고리의 정식 이름. 기록 파일의 키로도 그대로 사용한다.
pub fn category_name(kind: QuantityKind) -> &'static str {
    match kind {
        QuantityKind::Length => "Length",
        QuantityKind::Weight => "Weight",
        QuantityKind::Volume => "Volume",
        QuantityKind::Temperature => "Temperature",
        QuantityKind::Speed => "Speed",
        QuantityKind::Time => "Time",
    }
}

/// 카테고리 이름으로 물리량을 찾는다. 대소문자는 구분하지 않는다.
pub fn find_category(name: &str) -> Result<QuantityKind, CatalogError> {
    CATEGORIES
        .into_iter()
        .find(|kind| category_name(*kind).eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| CatalogError::NotFound(name.trim().to_string()))
}

/// 카테고리에 속한 단위 식별자 목록(표시 순서 유지).
pub fn units_for(kind: QuantityKind) -> &'static [&'static str] {
    match kind {
        QuantityKind::Length => &[
            "millimeter",
            "centimeter",
            "meter",
            "kilometer",
            "inch",
            "foot",
            "yard",
            "mile",
        ],
        QuantityKind::Weight => &["kilogram", "gram", "milligram", "pound", "ounce"],
        QuantityKind::Volume => &["liter", "milliliter", "gallon", "quart", "pint"],
        QuantityKind::Temperature => &["celsius", "fahrenheit", "kelvin"],
        QuantityKind::Speed => &[
            "meter/second",
            "kilometer/hour",
            "mile/hour",
            "foot/second",
        ],
        QuantityKind::Time => &["second", "minute", "hour", "day"],
    }
}

/// 카테고리 선택 시 기본으로 제시할 입력/변환 단위 쌍.
pub fn default_units_for(kind: QuantityKind) -> (&'static str, &'static str) {
    match kind {
        QuantityKind::Length => ("meter", "foot"),
        QuantityKind::Weight => ("kilogram", "pound"),
        QuantityKind::Volume => ("liter", "gallon"),
        QuantityKind::Temperature => ("celsius", "fahrenheit"),
        QuantityKind::Speed => ("kilometer/hour", "mile/hour"),
        QuantityKind::Time => ("second", "minute"),
    }
}
