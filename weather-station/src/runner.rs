use std::rc::Rc;

use common::subject_observer::Subject;
use log::{debug, info};
use strum::IntoEnumIterator;
use weather::{
    display::{DisplayKind, Screen},
    Measurement, WeatherData, WeatherObserver,
};

use crate::{config::app::AppConfig, AppError};

pub fn run(config: &AppConfig, screen: Rc<dyn Screen>) -> Result<WeatherData, AppError> {
    let mut station = WeatherData::new();
    let displays = DisplayKind::iter()
        .map(|kind| (kind, kind.attach(&mut station, screen.clone())))
        .collect::<Vec<_>>();
    info!("Station started with {} displays", station.observer_count());

    let split = config.detach_after.min(config.readings.len());
    let (before, after) = config.readings.split_at(split);

    apply(&mut station, before);
    detach(&mut station, &displays, config.detached_display)?;
    apply(&mut station, after);

    info!(
        "Station done: {} readings applied, {} displays still attached",
        config.readings.len(),
        station.observer_count()
    );
    Ok(station)
}

fn apply(station: &mut WeatherData, readings: &[Measurement]) {
    for reading in readings {
        debug!("New reading: {:?}", reading);
        station.set_measurements(reading.temperature, reading.humidity, reading.pressure);
    }
}

fn detach(
    station: &mut WeatherData,
    displays: &[(DisplayKind, WeatherObserver)],
    detached: DisplayKind,
) -> Result<(), AppError> {
    for (_, observer) in displays.iter().filter(|(kind, _)| *kind == detached) {
        station.unregister_observer(observer.clone())?;
        info!("Display {detached} detached");
    }
    Ok(())
}
