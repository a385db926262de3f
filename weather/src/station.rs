use std::rc::Rc;

use common::subject_observer::{SharedObserver, SharedObservers, Subject, SubjectError};
use log::{debug, trace, warn};

use crate::Measurement;

#[derive(Default)]
pub struct WeatherData {
    observers: SharedObservers<Self, Measurement>,
    measurements: Measurement,
}

impl Subject<Measurement> for WeatherData {
    fn register_observer(&mut self, observer: SharedObserver<Self, Measurement>) {
        self.observers.push(observer);
        debug!("Observer registered ({} in total)", self.observers.len());
    }

    fn unregister_observer(
        &mut self,
        observer: SharedObserver<Self, Measurement>,
    ) -> Result<(), SubjectError> {
        match self
            .observers
            .iter()
            .position(|obs| Rc::ptr_eq(obs, &observer))
        {
            Some(index) => {
                self.observers.remove(index);
                debug!(
                    "Observer at position {index} unregistered ({} left)",
                    self.observers.len()
                );
                Ok(())
            }
            None => {
                warn!("Attempt to unregister an observer that is not registered");
                Err(SubjectError::ObserverNotFound)
            }
        }
    }

    fn notify_observers(&self, event: Measurement) {
        trace!("Notifying {} observers of {:?}", self.observers.len(), event);
        for obs in &self.observers {
            obs.update(self, event);
        }
    }

    fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl WeatherData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn measurements(&self) -> Measurement {
        self.measurements
    }

    pub fn set_measurements(&mut self, temperature: f64, humidity: f64, pressure: f64) {
        self.measurements = Measurement::new(temperature, humidity, pressure);
        self.measurements_changed();
    }

    pub fn measurements_changed(&self) {
        self.notify_observers(self.measurements);
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use common::subject_observer::{Observer, Subject, SubjectError};
    use common_test::{get_seeded_rng, random_reading, random_readings};
    use mockall::{mock, Sequence};
    use rand::Rng;

    use crate::Measurement;

    use super::WeatherData;

    mock! {
        Listener {}

        impl Observer<WeatherData, Measurement> for Listener {
            fn update(&self, source: &WeatherData, event: Measurement);
        }
    }

    fn listener_called_once(sequence: &mut Sequence) -> MockListener {
        let mut listener = MockListener::new();
        listener
            .expect_update()
            .times(1)
            .in_sequence(sequence)
            .return_const(());
        listener
    }

    #[test]
    fn test_new_station_is_empty() {
        // When
        let station = WeatherData::new();

        // Then
        assert_eq!(Measurement::default(), station.measurements());
        assert_eq!(0, station.observer_count());
    }

    #[test]
    fn test_notify_observers_in_registration_order() {
        // Given
        let mut rng = get_seeded_rng().unwrap();
        let count = rng.gen_range(1..16);
        let mut sequence = Sequence::new();
        let mut station = WeatherData::new();
        for _ in 0..count {
            station.register_observer(Rc::new(listener_called_once(&mut sequence)));
        }

        // When
        station.measurements_changed();

        // Then
        assert_eq!(count, station.observer_count());
    }

    #[test]
    fn test_notify_observers_once_per_registration() {
        // Given
        let mut listener = MockListener::new();
        listener.expect_update().times(2).return_const(());
        let listener = Rc::new(listener);
        let mut station = WeatherData::new();
        station.register_observer(listener.clone());
        station.register_observer(listener.clone());

        // When
        station.measurements_changed();

        // Then
        assert_eq!(
            2,
            station.observer_count(),
            "Should accept the same observer twice"
        );
    }

    #[test]
    fn test_set_measurements_notifies_with_new_reading() {
        // Given
        let mut rng = get_seeded_rng().unwrap();
        let expected = Measurement::from(random_reading(&mut rng));
        let mut listener = MockListener::new();
        listener
            .expect_update()
            .withf(move |source, event| *event == expected && source.measurements() == expected)
            .times(1)
            .return_const(());
        let mut station = WeatherData::new();
        station.register_observer(Rc::new(listener));

        // When
        station.set_measurements(expected.temperature, expected.humidity, expected.pressure);

        // Then
        assert_eq!(expected, station.measurements());
    }

    #[test]
    fn test_set_measurements_stores_reading() {
        // Given
        let mut rng = get_seeded_rng().unwrap();
        let mut station = WeatherData::new();

        for (temperature, humidity, pressure) in random_readings(&mut rng, 8) {
            // When
            station.set_measurements(temperature, humidity, pressure);

            // Then
            let result = station.measurements();
            assert_eq!(temperature, result.temperature);
            assert_eq!(humidity, result.humidity);
            assert_eq!(pressure, result.pressure);
        }
    }

    #[test]
    fn test_unregister_observer_stops_notifications() {
        // Given
        let mut sequence = Sequence::new();
        let mut removed = MockListener::new();
        removed.expect_update().never();
        let removed = Rc::new(removed);
        let mut station = WeatherData::new();
        station.register_observer(removed.clone());
        station.register_observer(Rc::new(listener_called_once(&mut sequence)));

        // When
        let result = station.unregister_observer(removed.clone());
        station.set_measurements(120.0, 100.0, 1000.0);

        // Then
        assert!(matches!(result, Ok(())), "Should remove a registered observer");
        assert_eq!(1, station.observer_count());
    }

    #[test]
    fn test_unregister_observer_removes_first_entry_only() {
        // Given
        let mut sequence = Sequence::new();
        let mut kept = MockListener::new();
        kept.expect_update()
            .times(1)
            .in_sequence(&mut sequence)
            .return_const(());
        let duplicated = Rc::new(listener_called_once(&mut sequence));
        let mut station = WeatherData::new();
        station.register_observer(duplicated.clone());
        station.register_observer(Rc::new(kept));
        station.register_observer(duplicated.clone());

        // When
        let result = station.unregister_observer(duplicated.clone());
        station.measurements_changed();

        // Then
        assert!(matches!(result, Ok(())));
        assert_eq!(2, station.observer_count());
    }

    #[test]
    fn test_unregister_unknown_observer() {
        // Given
        let mut registered = MockListener::new();
        registered.expect_update().times(1).return_const(());
        let mut unknown = MockListener::new();
        unknown.expect_update().never();
        let mut station = WeatherData::new();
        station.register_observer(Rc::new(registered));

        // When
        let result = station.unregister_observer(Rc::new(unknown));

        // Then
        assert_eq!(Err(SubjectError::ObserverNotFound), result);
        assert_eq!(
            1,
            station.observer_count(),
            "Should leave the registered observers untouched"
        );
        station.measurements_changed();
    }
}
