use std::{cell::Cell, rc::Rc};

use common::subject_observer::{Observer, Subject};

use crate::{Measurement, WeatherData};

use super::{conditions_line, Screen};

const HUMIDITY_TO_TEMPERATURE: f64 = 0.11;
const PRESSURE_TO_TEMPERATURE: f64 = 0.2;
const HUMIDITY_DECAY: f64 = 0.9;
const TEMPERATURE_TO_PRESSURE: f64 = 0.01;
const PRESSURE_DECAY: f64 = 0.21;

pub fn forecast(current: Measurement) -> Measurement {
    Measurement {
        temperature: current.temperature
            + HUMIDITY_TO_TEMPERATURE * current.humidity
            + PRESSURE_TO_TEMPERATURE * current.pressure,
        humidity: current.humidity - HUMIDITY_DECAY * current.humidity,
        pressure: current.pressure + TEMPERATURE_TO_PRESSURE * current.temperature
            - PRESSURE_DECAY * current.pressure,
    }
}

pub struct ForecastDisplay {
    forecast: Cell<Measurement>,
    screen: Rc<dyn Screen>,
}

impl ForecastDisplay {
    pub fn new(station: &mut WeatherData, screen: Rc<dyn Screen>) -> Rc<Self> {
        let display = Rc::new(ForecastDisplay {
            forecast: Cell::default(),
            screen,
        });
        station.register_observer(display.clone());
        display
    }

    pub fn forecast(&self) -> Measurement {
        self.forecast.get()
    }

    pub fn display(&self) {
        self.screen
            .show(&conditions_line("Forecast conditions", self.forecast.get()));
    }
}

impl Observer<WeatherData, Measurement> for ForecastDisplay {
    fn update(&self, source: &WeatherData, _event: Measurement) {
        self.forecast.set(forecast(source.measurements()));
        self.display();
    }
}
