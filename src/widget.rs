//! Floem front-end: the press button view.
//!
//! The [`Interaction`] lives in an `Rc<RefCell<_>>` shared by the pointer
//! handlers and the timer callbacks. Frames are stepped and reveal stages
//! delivered with `exec_after`; everything the core reports lands in signals
//! the view reads.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use floem::action::exec_after;
use floem::event::{EventListener, EventPropagation};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::SystemClock;
use crate::color::ColorSample;
use crate::constants;
use crate::interaction::Interaction;
use crate::names::{ColorNameTable, NameResolution};
use crate::observer::RevealObserver;
use crate::reveal::{RevealEvent, RevealTiming};
use crate::schedule::{FrameScheduler, Timers};
use crate::tracker::FrameToken;

type Core = Interaction<SystemClock, StdRng, ColorNameTable>;

const WHITE_RGB: (u8, u8, u8) = (255, 255, 255);

/// Signals the view renders from.
#[derive(Clone, Copy)]
struct ViewState {
    button: RwSignal<(u8, u8, u8)>,
    background: RwSignal<(u8, u8, u8)>,
    readout: RwSignal<String>,
    name: RwSignal<String>,
    final_hex: RwSignal<String>,
    press_ms: RwSignal<u64>,
    locked: RwSignal<bool>,
}

impl ViewState {
    fn new() -> Self {
        Self {
            button: RwSignal::new(constants::IDLE_BUTTON_RGB),
            background: RwSignal::new(WHITE_RGB),
            readout: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            final_hex: RwSignal::new(String::new()),
            press_ms: RwSignal::new(0),
            locked: RwSignal::new(false),
        }
    }
}

impl RevealObserver for ViewState {
    fn on_tick(&mut self, sample: &ColorSample, elapsed: Duration) {
        self.button.set(sample.to_rgb());
        self.press_ms.set(elapsed.as_millis() as u64);
    }

    fn on_released(&mut self, _duration: Duration) {
        self.button.set(constants::IDLE_BUTTON_RGB);
        self.press_ms.set(0);
        self.readout.set(String::new());
        self.name.set(String::new());
        self.final_hex.set(String::new());
    }

    fn on_reveal_begin(&mut self, sample: &ColorSample, name: &NameResolution) {
        self.background.set(sample.to_rgb());
        self.final_hex.set(sample.css_hex());
        self.name.set(name.label());
    }

    fn on_reveal_stage(&mut self, chunk: &str, _index: usize) {
        self.readout.update(|r| r.push_str(chunk));
    }

    fn on_lockout_changed(&mut self, locked: bool) {
        self.locked.set(locked);
    }
}

/// Routes pointer input and scheduler callbacks into the shared core.
#[derive(Clone)]
struct Driver {
    core: Rc<RefCell<Core>>,
    view: ViewState,
}

impl Driver {
    fn press_start(&self) {
        let mut frames = self.clone();
        self.core.borrow_mut().press_start(&mut frames);
    }

    fn press_end(&self) {
        let mut timers = self.clone();
        let mut view = self.view;
        self.core.borrow_mut().press_end(&mut timers, &mut view);
    }

    fn frame(&self, token: FrameToken) {
        let mut frames = self.clone();
        let mut view = self.view;
        self.core
            .borrow_mut()
            .on_frame(token, &mut frames, &mut view);
    }

    fn fire(&self, event: RevealEvent) {
        let mut view = self.view;
        self.core.borrow_mut().on_timer(event, &mut view);
    }
}

impl FrameScheduler for Driver {
    fn request_frame(&mut self, token: FrameToken) {
        let driver = self.clone();
        exec_after(constants::FRAME_INTERVAL, move |_| driver.frame(token));
    }
}

impl Timers for Driver {
    fn schedule(&mut self, after: Duration, event: RevealEvent) {
        let driver = self.clone();
        exec_after(after, move |_| driver.fire(event));
    }
}

/// Creates the press button view.
///
/// Hold the circle to cycle its color; release to paint the background and
/// reveal the hex code and nearest color name.
pub(crate) fn press_button_view(timing: RevealTiming, palette: ColorNameTable) -> impl IntoView {
    let view = ViewState::new();
    let core = Interaction::new(SystemClock, StdRng::from_entropy(), palette, timing);
    let driver = Driver {
        core: Rc::new(RefCell::new(core)),
        view,
    };

    let down = driver.clone();
    let circle = empty()
        .style(move |s| {
            let (r, g, b) = view.button.get();
            let cursor = if view.locked.get() {
                floem::style::CursorStyle::Default
            } else {
                floem::style::CursorStyle::Pointer
            };
            s.size(constants::CIRCLE_SIZE, constants::CIRCLE_SIZE)
                .border_radius(constants::CIRCLE_SIZE / 2.0)
                .background(Color::rgb8(r, g, b))
                .cursor(cursor)
        })
        .on_event_stop(EventListener::PointerDown, move |_| {
            down.press_start();
        });

    let readout = h_stack((
        label(move || view.readout.get()).style(|s| {
            s.font_size(constants::READOUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::WHITE)
        }),
        copy_button(move || view.final_hex.get()),
    ))
    .style(|s| s.items_center().gap(constants::GAP / 2.0));

    let name = label(move || view.name.get()).style(|s| {
        s.font_size(constants::NAME_FONT)
            .color(Color::WHITE)
    });

    let press_time = label(move || format!("Press Time: {}ms", view.press_ms.get())).style(|s| {
        s.font_size(constants::LABEL_FONT)
            .color(Color::rgb8(120, 120, 120))
    });

    // Releases anywhere on the page end the press
    let up = driver;
    v_stack((circle, readout, name, press_time))
        .style(move |s| {
            let (r, g, b) = view.background.get();
            s.size_full()
                .items_center()
                .justify_center()
                .gap(constants::GAP)
                .background(Color::rgb8(r, g, b))
        })
        .on_event_stop(EventListener::PointerUp, move |_| {
            up.press_end();
        })
}

/// A small copy button that copies the result of `get_text` to the clipboard.
fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(230, 230, 230)
            } else {
                Color::WHITE
            };
            s.font_size(18.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(24.0, 24.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
    })
    .on_event_stop(EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    // Let the release bubble so a press dragged here still ends
    .on_event(EventListener::PointerUp, move |_| {
        pressed.set(false);
        let text = get_text();
        if !text.is_empty() {
            copy_to_clipboard(&text);
        }
        EventPropagation::Continue
    })
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                tracing::warn!("Failed to copy {text}: {e}");
            }
        }
        Err(e) => tracing::warn!("Clipboard unavailable: {e}"),
    }
}
