use std::{cell::Cell, rc::Rc};

use common::subject_observer::{Observer, Subject};

use crate::{Measurement, WeatherData};

use super::{conditions_line, Screen};

pub struct CurrentConditionsDisplay {
    measurement: Cell<Measurement>,
    screen: Rc<dyn Screen>,
}

impl CurrentConditionsDisplay {
    pub fn new(station: &mut WeatherData, screen: Rc<dyn Screen>) -> Rc<Self> {
        let display = Rc::new(CurrentConditionsDisplay {
            measurement: Cell::default(),
            screen,
        });
        station.register_observer(display.clone());
        display
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement.get()
    }

    pub fn display(&self) {
        self.screen
            .show(&conditions_line("Current conditions", self.measurement.get()));
    }
}

impl Observer<WeatherData, Measurement> for CurrentConditionsDisplay {
    fn update(&self, _: &WeatherData, event: Measurement) {
        self.measurement.set(event);
        self.display();
    }
}
