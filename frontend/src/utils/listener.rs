use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget};

/// A DOM event listener that is removed again when the guard is dropped.
///
/// The guard owns the closure, so the callback cannot outlive its registration.
/// Keep guards inside an effect's cleanup to tie them to a component's lifetime.
pub struct EventListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn Fn(Event)>,
}

impl EventListenerGuard {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: Fn(Event) + 'static,
    {
        let callback = Closure::<dyn Fn(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Like [`EventListenerGuard::new`], but logs and returns `None` when the browser
    /// refuses the registration.
    pub fn attach<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: Fn(Event) + 'static,
    {
        match Self::new(target, event, handler) {
            Ok(guard) => Some(guard),
            Err(e) => {
                log::warn!("Failed to attach {} listener: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove {} listener: {:?}", self.event, e);
        }
    }
}
