//! Leptos Frame Utilities
//!
//! A self-rescheduling `requestAnimationFrame` loop with a cancellable handle,
//! plus viewport measurement. The loop hands the elapsed milliseconds since
//! the previous frame to its callback.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Frame duration assumed for the very first frame
pub const NOMINAL_FRAME_MS: f64 = 1000.0 / 60.0;

type FrameSlot = RefCell<Option<Closure<dyn FnMut(f64)>>>;

/// Running animation loop. Dropping the handle stops it.
pub struct FrameLoop {
    // Owns the frame closure; the closure itself only holds a weak reference
    slot: Rc<FrameSlot>,
    request_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Start calling `on_frame(dt_ms)` once per display frame.
    /// Returns `None` when there is no window to animate in.
    pub fn start<F>(mut on_frame: F) -> Option<FrameLoop>
    where
        F: FnMut(f64) + 'static,
    {
        let win = web_sys::window()?;
        let slot: Rc<FrameSlot> = Rc::new(RefCell::new(None));
        let request_id = Rc::new(Cell::new(None));
        let last_ts = Cell::new(None::<f64>);

        let weak: Weak<FrameSlot> = Rc::downgrade(&slot);
        let ids = request_id.clone();
        let frame_win = win.clone();
        let closure = Closure::<dyn FnMut(f64)>::new(move |ts: f64| {
            let dt = last_ts.get().map(|prev| ts - prev).unwrap_or(NOMINAL_FRAME_MS);
            last_ts.set(Some(ts));
            on_frame(dt.max(0.0));

            // Handle dropped during the callback: do not reschedule
            let Some(slot) = weak.upgrade() else { return };
            let next = match slot.borrow().as_ref() {
                Some(cb) => frame_win.request_animation_frame(cb.as_ref().unchecked_ref()).ok(),
                None => None,
            };
            ids.set(next);
        });

        let first = win.request_animation_frame(closure.as_ref().unchecked_ref());
        match first {
            Ok(id) => request_id.set(Some(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                return None;
            }
        }
        *slot.borrow_mut() = Some(closure);
        log::debug!("frame loop started");
        Some(FrameLoop { slot, request_id })
    }

    /// Cancel the pending frame
    pub fn stop(&self) {
        if let Some(id) = self.request_id.take() {
            if let Some(win) = web_sys::window() {
                let _ = win.cancel_animation_frame(id);
            }
            log::debug!("frame loop stopped");
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        self.slot.borrow_mut().take();
    }
}

/// Inner size of the browser window in CSS pixels
pub fn viewport_size() -> Option<(f64, f64)> {
    let win = web_sys::window()?;
    let width = win.inner_width().ok()?.as_f64()?;
    let height = win.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Run `on_frame` every display frame while `active` is true.
/// The loop is stopped when `active` turns false or the owner is cleaned up.
pub fn use_frame_loop<F>(active: Signal<bool>, on_frame: F)
where
    F: FnMut(f64) + Clone + 'static,
{
    let handle = StoredValue::new_local(None::<FrameLoop>);

    Effect::new(move |_| {
        if active.get() {
            if handle.with_value(|h| h.is_none()) {
                handle.set_value(FrameLoop::start(on_frame.clone()));
            }
        } else {
            handle.set_value(None);
        }
    });

    on_cleanup(move || {
        let _ = handle.try_set_value(None);
    });
}
