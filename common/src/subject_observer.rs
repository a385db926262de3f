use std::rc::Rc;

use thiserror::Error;

pub type SharedObserver<S, E> = Rc<dyn Observer<S, E>>;

pub type SharedObservers<S, E> = Vec<SharedObserver<S, E>>;

#[derive(Error, Debug, PartialEq)]
pub enum SubjectError {
    #[error("Observer not found: it is not registered on this subject")]
    ObserverNotFound,
}

pub trait Observer<S: Subject<E>, E: Clone> {
    fn update(&self, source: &S, event: E);
}

pub trait Subject<E: Clone>: Sized {
    fn register_observer(&mut self, observer: SharedObserver<Self, E>);

    fn unregister_observer(&mut self, observer: SharedObserver<Self, E>)
        -> Result<(), SubjectError>;

    fn notify_observers(&self, event: E);

    fn observer_count(&self) -> usize;
}
