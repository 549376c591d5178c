use js_sys::Function;
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Event, EventTarget};

/// Attach a persistent listener to a DOM target. The closure is converted with
/// [`Closure::into_js_value()`] and handed to the JS garbage collector, which keeps it
/// alive for as long as the target itself.
pub fn listen<T, F>(target: &T, event_type: &str, callback: F)
where
    T: AsRef<EventTarget>,
    F: 'static + Fn(Event),
{
    let function: Function = Closure::<dyn Fn(Event)>::new(callback)
        .into_js_value()
        .unchecked_into();

    if let Err(error) = target
        .as_ref()
        .add_event_listener_with_callback(event_type, &function)
    {
        tracing::error!(?error, event_type, "failed to bind listener");
    }
}
