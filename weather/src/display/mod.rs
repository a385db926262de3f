mod current_conditions;
mod forecast;
mod statistics;

use std::rc::Rc;

pub use current_conditions::CurrentConditionsDisplay;
pub use forecast::ForecastDisplay;
pub use statistics::{FieldStatistics, Statistics, StatisticsDisplay};

use serde::Deserialize;
use strum::{Display, EnumIter};

use crate::{Measurement, WeatherData, WeatherObserver};

pub trait Screen {
    fn show(&self, text: &str);
}

pub struct StdoutScreen;

impl Screen for StdoutScreen {
    fn show(&self, text: &str) {
        println!("{text}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DisplayKind {
    CurrentConditions,
    Statistics,
    Forecast,
}

impl DisplayKind {
    pub fn attach(self, station: &mut WeatherData, screen: Rc<dyn Screen>) -> WeatherObserver {
        match self {
            DisplayKind::CurrentConditions => {
                CurrentConditionsDisplay::new(station, screen) as WeatherObserver
            }
            DisplayKind::Statistics => StatisticsDisplay::new(station, screen) as WeatherObserver,
            DisplayKind::Forecast => ForecastDisplay::new(station, screen) as WeatherObserver,
        }
    }
}

fn conditions_line(label: &str, measurement: Measurement) -> String {
    format!(
        "{label}: {} F degrees and {} [%] humidity and pressure {}",
        measurement.temperature, measurement.humidity, measurement.pressure
    )
}
