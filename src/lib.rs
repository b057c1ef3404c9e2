// Fix for html! macro doing unit value assignments. (yew 0.19.3)
#![allow(clippy::let_unit_value)]

mod consts;
mod error;
mod logger;
mod routes;
mod statics;
mod utils;

use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::start_app_in_element;

pub use error::Error;
pub use routes::home::Home;
pub use routes::not_found::NotFound;
pub use routes::{App, Route};
pub use statics::Config;

use consts::DEFAULT_LOG_LEVEL;

/// Entry point called from JavaScript with the config object. Omitted fields, or an omitted
/// object, use the defaults.
#[wasm_bindgen]
pub fn run(config: JsValue) {
    let config = match Config::from_js(config) {
        Ok(config) => config,
        Err(err) => {
            logger::init(DEFAULT_LOG_LEVEL);
            log::error!("Fatal error: {}", err);
            return;
        }
    };

    if let Err(err) = run_with_config(config) {
        log::error!("Fatal error: Failed to mount app: {}", err);
    }
}

pub fn run_with_config(config: Config) -> Result<(), Error> {
    logger::init(config.log_level());

    let element = utils::document()
        .get_element_by_id(config.mountpoint())
        .ok_or_else(|| Error::MountpointNotFound(config.mountpoint().to_owned()))?;

    statics::set_config(config)?;

    mount(element);
    Ok(())
}

/// Mounts the [`App`] into `element` using the current config.
pub fn mount(element: Element) {
    log::info!("Mounting app under root {:?}", statics::config().root());

    start_app_in_element::<App>(element);
}
