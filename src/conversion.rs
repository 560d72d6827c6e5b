use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 서로 다른 물리량에 속한 단위 쌍
    IncompatibleUnits { from: String, to: String },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::IncompatibleUnits { from, to } => {
                write!(f, "차원이 달라 변환할 수 없습니다: {from} → {to}")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열은 카탈로그의 정식 식별자(`meter`, `celsius`, `mile/hour` 등)와
/// 약어(`m`, `C`, `mph` 등)를 모두 받는다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Weight => {
            let from = parse_mass_unit(from_unit_str)?;
            let to = parse_mass_unit(to_unit_str)?;
            Ok(convert_mass(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::Speed => {
            let from = parse_velocity_unit(from_unit_str)?;
            let to = parse_velocity_unit(to_unit_str)?;
            Ok(convert_velocity(value, from, to))
        }
        QuantityKind::Time => {
            let from = parse_time_unit(from_unit_str)?;
            let to = parse_time_unit(to_unit_str)?;
            Ok(convert_time(value, from, to))
        }
    }
}

/// 입력 단위에서 물리량을 추론해 변환한다.
///
/// 두 단위가 서로 다른 물리량에 속하면 `IncompatibleUnits`, 어느 카테고리에도
/// 속하지 않으면 `UnknownUnit`을 반환한다.
pub fn convert_auto(value: f64, from_unit_str: &str, to_unit_str: &str) -> Result<f64, ConversionError> {
    let from_kind = kind_of_unit(from_unit_str)
        .ok_or_else(|| ConversionError::UnknownUnit(from_unit_str.to_string()))?;
    let to_kind = kind_of_unit(to_unit_str)
        .ok_or_else(|| ConversionError::UnknownUnit(to_unit_str.to_string()))?;
    if from_kind != to_kind {
        return Err(ConversionError::IncompatibleUnits {
            from: from_unit_str.to_string(),
            to: to_unit_str.to_string(),
        });
    }
    convert(from_kind, value, from_unit_str, to_unit_str)
}

/// 단위 식별자가 속한 물리량을 판별한다. 미등록 단위는 None.
pub fn kind_of_unit(s: &str) -> Option<QuantityKind> {
    if parse_length_unit(s).is_ok() {
        Some(QuantityKind::Length)
    } else if parse_mass_unit(s).is_ok() {
        Some(QuantityKind::Weight)
    } else if parse_volume_unit(s).is_ok() {
        Some(QuantityKind::Volume)
    } else if parse_temperature_unit(s).is_ok() {
        Some(QuantityKind::Temperature)
    } else if parse_velocity_unit(s).is_ok() {
        Some(QuantityKind::Speed)
    } else if parse_time_unit(s).is_ok() {
        Some(QuantityKind::Time)
    } else {
        None
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "mm" | "millimeter" | "millimetre" => Ok(LengthUnit::Millimeter),
        "cm" | "centimeter" | "centimetre" => Ok(LengthUnit::Centimeter),
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "km" | "kilometer" | "kilometre" => Ok(LengthUnit::Kilometer),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        "yd" | "yard" => Ok(LengthUnit::Yard),
        "mi" | "mile" => Ok(LengthUnit::Mile),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kg" | "kilogram" => Ok(MassUnit::Kilogram),
        "g" | "gram" => Ok(MassUnit::Gram),
        "mg" | "milligram" => Ok(MassUnit::Milligram),
        "lb" | "lbs" | "pound" => Ok(MassUnit::Pound),
        "oz" | "ounce" => Ok(MassUnit::Ounce),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "ml" | "milliliter" | "millilitre" => Ok(VolumeUnit::Milliliter),
        "gal" | "gallon" => Ok(VolumeUnit::Gallon),
        "qt" | "quart" => Ok(VolumeUnit::Quart),
        "pt" | "pint" => Ok(VolumeUnit::Pint),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

fn parse_velocity_unit(s: &str) -> Result<VelocityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m/s" | "meter/second" | "mps" => Ok(VelocityUnit::MeterPerSecond),
        "km/h" | "kilometer/hour" | "kph" => Ok(VelocityUnit::KilometerPerHour),
        "mi/h" | "mile/hour" | "mph" => Ok(VelocityUnit::MilePerHour),
        "ft/s" | "foot/second" | "fps" => Ok(VelocityUnit::FootPerSecond),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

fn parse_time_unit(s: &str) -> Result<TimeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "s" | "sec" | "second" => Ok(TimeUnit::Second),
        "min" | "minute" => Ok(TimeUnit::Minute),
        "h" | "hr" | "hour" => Ok(TimeUnit::Hour),
        "d" | "day" => Ok(TimeUnit::Day),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}
