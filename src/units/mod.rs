//! 단위 정의 및 변환 모듈 모음.

pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;
pub mod velocity;
pub mod volume;

pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use temperature::{convert_temperature, from_kelvin, to_kelvin, TemperatureUnit};
pub use time::{convert_time, TimeUnit};
pub use velocity::{convert_velocity, VelocityUnit};
pub use volume::{convert_volume, VolumeUnit};
