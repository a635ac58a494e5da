//! `navigator.geolocation` bindings.

use std::{cell::RefCell, rc::Rc};

use futures_channel::oneshot;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{GeolocationPosition, GeolocationPositionError, Navigator};

use crate::{Coordinates, Error, PositionOptions, Result};

type Resolver = Rc<RefCell<Option<oneshot::Sender<Result<Coordinates>>>>>;

fn navigator() -> Option<Navigator> {
    web_sys::window().map(|window| window.navigator())
}

pub fn is_supported() -> bool {
    let Some(navigator) = navigator() else {
        return false;
    };

    // `Navigator::geolocation` happily casts `undefined`, so look at the property itself
    js_sys::Reflect::get(&navigator, &JsValue::from_str("geolocation"))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

pub fn user_agent() -> Option<String> {
    navigator()?.user_agent().ok()
}

pub async fn current_position(options: &PositionOptions) -> Result<Coordinates> {
    let geolocation = navigator()
        .ok_or(Error::Unsupported)?
        .geolocation()
        .map_err(|_| Error::Unsupported)?;

    let (sender, receiver) = oneshot::channel();
    let resolver: Resolver = Rc::new(RefCell::new(Some(sender)));

    let on_success = {
        let resolver = resolver.clone();
        Closure::<dyn FnMut(GeolocationPosition)>::new(move |position: GeolocationPosition| {
            let coords = position.coords();
            resolve(
                &resolver,
                Ok(Coordinates::new(coords.latitude(), coords.longitude())),
            );
        })
    };

    let on_error = {
        let resolver = resolver.clone();
        Closure::<dyn FnMut(GeolocationPositionError)>::new(
            move |error: GeolocationPositionError| {
                resolve(&resolver, Err(Error::from_code(error.code())));
            },
        )
    };

    let web_options = web_sys::PositionOptions::new();
    web_options.set_enable_high_accuracy(options.enable_high_accuracy);
    web_options.set_timeout(options.timeout_millis());
    web_options.set_maximum_age(options.maximum_age_millis());

    geolocation
        .get_current_position_with_error_callback_and_options(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
            &web_options,
        )
        .map_err(|err| {
            tracing::error!("getCurrentPosition threw: {err:?}");
            Error::Unknown(0)
        })?;

    let callbacks = Callbacks {
        resolver,
        on_success: Some(on_success),
        on_error: Some(on_error),
    };
    let result = receiver.await.unwrap_or(Err(Error::Unknown(0)));
    drop(callbacks);
    result
}

/// The two closures handed to `getCurrentPosition`.
///
/// The browser calls at most one of them, at any point after the request. If
/// this is dropped before that happens (the awaiting task was cancelled), the
/// closures are leaked instead of freed, so the late call still lands on live
/// code and only finds a closed channel.
struct Callbacks {
    resolver: Resolver,
    on_success: Option<Closure<dyn FnMut(GeolocationPosition)>>,
    on_error: Option<Closure<dyn FnMut(GeolocationPositionError)>>,
}

impl Drop for Callbacks {
    fn drop(&mut self) {
        let pending = self.resolver.borrow().is_some();
        if pending {
            tracing::debug!("position request abandoned before the browser answered");
            if let Some(closure) = self.on_success.take() {
                closure.forget();
            }
            if let Some(closure) = self.on_error.take() {
                closure.forget();
            }
        }
    }
}

fn resolve(resolver: &Resolver, result: Result<Coordinates>) {
    if let Some(sender) = resolver.borrow_mut().take() {
        _ = sender.send(result);
    }
}
