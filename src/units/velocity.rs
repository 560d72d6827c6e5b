use serde::{Deserialize, Serialize};

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    KilometerPerHour,
    MilePerHour,
    FootPerSecond,
}

fn to_meter_per_second(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::KilometerPerHour => value / 3.6,
        VelocityUnit::MilePerHour => value * 0.447_04,
        VelocityUnit::FootPerSecond => value * 0.3048,
    }
}

fn from_meter_per_second(value_mps: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value_mps,
        VelocityUnit::KilometerPerHour => value_mps * 3.6,
        VelocityUnit::MilePerHour => value_mps / 0.447_04,
        VelocityUnit::FootPerSecond => value_mps / 0.3048,
    }
}

/// 속도를 다른 단위로 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    if from == to {
        return value;
    }
    let mps = to_meter_per_second(value, from);
    from_meter_per_second(mps, to)
}
