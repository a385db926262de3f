use common::subject_observer::SharedObserver;
use serde::{Deserialize, Serialize};

pub mod display;
pub mod station;

pub use station::WeatherData;

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Measurement {
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

impl Measurement {
    pub fn new(temperature: f64, humidity: f64, pressure: f64) -> Self {
        Measurement {
            temperature,
            humidity,
            pressure,
        }
    }
}

impl From<(f64, f64, f64)> for Measurement {
    fn from((temperature, humidity, pressure): (f64, f64, f64)) -> Self {
        Measurement::new(temperature, humidity, pressure)
    }
}

pub type WeatherObserver = SharedObserver<WeatherData, Measurement>;
