use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

use common::subject_observer::{Observer, Subject};
use log::trace;

use crate::{Measurement, WeatherData};

use super::Screen;

const HISTORY_WEIGHT: f64 = 9.0;
const TOTAL_WEIGHT: f64 = HISTORY_WEIGHT + 1.0;

/// `0.0` doubles as the "not yet set" marker for `min` and `max`: a stored zero is
/// always replaced by the next value, even when zero was a real reading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldStatistics {
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl FieldStatistics {
    pub fn record(&mut self, value: f64) {
        self.average = (self.average * HISTORY_WEIGHT + value) / TOTAL_WEIGHT;
        if self.min == 0.0 || value < self.min {
            self.min = value;
        }
        if self.max == 0.0 || value > self.max {
            self.max = value;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Statistics {
    pub temperature: FieldStatistics,
    pub humidity: FieldStatistics,
    pub pressure: FieldStatistics,
}

impl Statistics {
    pub fn record(&mut self, measurement: Measurement) {
        self.temperature.record(measurement.temperature);
        self.humidity.record(measurement.humidity);
        self.pressure.record(measurement.pressure);
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Current Statistics:")?;
        for (name, field) in [
            ("Temperature", &self.temperature),
            ("Humidity", &self.humidity),
            ("Pressure", &self.pressure),
        ] {
            write!(
                f,
                "\n{name}:\n\tAvg: {}\n\tMin: {}\n\tMax: {}",
                field.average, field.min, field.max
            )?;
        }
        Ok(())
    }
}

pub struct StatisticsDisplay {
    measurement: Cell<Measurement>,
    statistics: RefCell<Statistics>,
    screen: Rc<dyn Screen>,
}

impl StatisticsDisplay {
    pub fn new(station: &mut WeatherData, screen: Rc<dyn Screen>) -> Rc<Self> {
        let display = Rc::new(StatisticsDisplay {
            measurement: Cell::default(),
            statistics: RefCell::default(),
            screen,
        });
        station.register_observer(display.clone());
        display
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement.get()
    }

    pub fn statistics(&self) -> Statistics {
        *self.statistics.borrow()
    }

    pub fn display(&self) {
        self.screen.show(&self.statistics.borrow().to_string());
    }
}

impl Observer<WeatherData, Measurement> for StatisticsDisplay {
    fn update(&self, _: &WeatherData, event: Measurement) {
        self.measurement.set(event);
        self.statistics.borrow_mut().record(event);
        trace!("Statistics updated: {:?}", self.statistics.borrow());
        self.display();
    }
}
