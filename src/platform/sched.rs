//! rAF + setInterval scheduler
//!
//! The two callbacks are created once at bootstrap and live as long as
//! the scheduler; arming hands the browser a reference to them and
//! keeps the returned id as the cancellable handle. A zero handle
//! stands in when the browser refuses to schedule; cancelling zero is
//! harmless on both APIs.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::scheduler::Scheduler;

pub struct WebScheduler {
    window: Window,
    on_frame: Closure<dyn FnMut()>,
    on_second: Closure<dyn FnMut()>,
}

impl WebScheduler {
    pub fn new(
        window: Window,
        on_frame: Closure<dyn FnMut()>,
        on_second: Closure<dyn FnMut()>,
    ) -> Self {
        Self {
            window,
            on_frame,
            on_second,
        }
    }
}

impl Scheduler for WebScheduler {
    type FrameHandle = i32;
    type RepeatHandle = i32;

    fn schedule_frame(&mut self) -> i32 {
        self.window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
            .unwrap_or_else(|_| {
                warn!("failed to schedule animation frame");
                0
            })
    }

    fn cancel_frame(&mut self, handle: i32) {
        let _ = self.window.cancel_animation_frame(handle);
    }

    fn schedule_repeating(&mut self, interval_ms: u32) -> i32 {
        self.window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.on_second.as_ref().unchecked_ref(),
                interval_ms as i32,
            )
            .unwrap_or_else(|_| {
                warn!("failed to schedule countdown interval");
                0
            })
    }

    fn cancel_repeating(&mut self, handle: i32) {
        self.window.clear_interval_with_handle(handle);
    }
}
