use std::rc::Rc;

use weather::display::StdoutScreen;

use crate::config::app::AppConfig;

mod config;
mod error;
mod runner;

pub use error::AppError;

fn main() -> Result<(), AppError> {
    config::log::init();

    let app_config = AppConfig::new()?;
    runner::run(&app_config, Rc::new(StdoutScreen))?;
    Ok(())
}
