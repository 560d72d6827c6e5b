use serde::{Deserialize, Serialize};

/// 부피 단위. 내부 기준은 리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Liter,
    Milliliter,
    Gallon,
    Quart,
    Pint,
}

// 갤런/쿼트/파인트는 US 액량 기준
fn to_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::Milliliter => value / 1000.0,
        VolumeUnit::Gallon => value * 3.785_411_784,
        VolumeUnit::Quart => value * 0.946_352_946,
        VolumeUnit::Pint => value * 0.473_176_473,
    }
}

fn from_liter(value_l: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value_l,
        VolumeUnit::Milliliter => value_l * 1000.0,
        VolumeUnit::Gallon => value_l / 3.785_411_784,
        VolumeUnit::Quart => value_l / 0.946_352_946,
        VolumeUnit::Pint => value_l / 0.473_176_473,
    }
}

/// 부피를 다른 단위로 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    if from == to {
        return value;
    }
    let l = to_liter(value, from);
    from_liter(l, to)
}
