//! Simulated playback for the audio items: a play/pause control driving a
//! one-second tick timer and a progress bar. No real media is decoded; each
//! item counts up to a fixed demo duration and then loops back to zero.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

/// Demo track length in seconds.
pub const TRACK_DURATION_SECS: u32 = 30;
/// Period of the simulated playback tick.
pub const TICK_PERIOD_MS: i32 = 1_000;

const GLYPH_PLAY: &str = "▶";
const GLYPH_PAUSE: &str = "⏸";
const BG_IDLE: &str = "#667eea";
const BG_PLAYING: &str = "#dc3545";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Playback {
    #[default]
    Paused,
    Playing,
}

/// Timer action the DOM glue must carry out after a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transport {
    Start,
    Stop,
}

/// Outcome of one playback tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Still playing, progress advanced by one second.
    Advanced,
    /// Demo duration reached: now paused, elapsed reset to zero.
    Finished,
}

/// Playback state machine, one instance per audio item. Pure: the DOM glue
/// interprets [`Transport`] and [`Tick`] into timer and style mutations.
///
/// Invariant: `elapsed` stays in `[0, TRACK_DURATION_SECS)`; `tick()` is only
/// driven while the item is playing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    playback: Playback,
    elapsed: u32,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Progress bar width for the current position, in percent.
    pub fn progress_percent(&self) -> f64 {
        f64::from(self.elapsed) / f64::from(TRACK_DURATION_SECS) * 100.0
    }

    /// Play/pause flip; tells the caller whether to arm or cancel the timer.
    pub fn toggle(&mut self) -> Transport {
        match self.playback {
            Playback::Paused => {
                self.playback = Playback::Playing;
                Transport::Start
            }
            Playback::Playing => {
                self.playback = Playback::Paused;
                Transport::Stop
            }
        }
    }

    /// Advance simulated playback by one second.
    pub fn tick(&mut self) -> Tick {
        self.elapsed += 1;
        if self.elapsed >= TRACK_DURATION_SECS {
            self.playback = Playback::Paused;
            self.elapsed = 0;
            Tick::Finished
        } else {
            Tick::Advanced
        }
    }
}

/// Per-item DOM handles plus the state machine. Both the click closure and
/// the tick closure hold an `Rc` to this; the resulting cycle is deliberate
/// since widgets live for the page lifetime.
struct AudioWidget {
    win: Window,
    state: RefCell<PlayerState>,
    timer: Cell<Option<i32>>,
    button: Option<HtmlElement>,
    progress: Option<HtmlElement>,
    tick_cb: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl AudioWidget {
    fn render_progress(&self) {
        if let Some(bar) = &self.progress {
            let pct = self.state.borrow().progress_percent();
            let _ = bar.style().set_property("width", &format!("{pct}%"));
        }
    }

    fn show_playing(&self) {
        if let Some(btn) = &self.button {
            btn.set_text_content(Some(GLYPH_PAUSE));
            let _ = btn.style().set_property("background", BG_PLAYING);
        }
    }

    fn show_paused(&self) {
        if let Some(btn) = &self.button {
            btn.set_text_content(Some(GLYPH_PLAY));
            let _ = btn.style().set_property("background", BG_IDLE);
        }
    }

    /// Arms the tick timer. Any stale handle is cleared first, so an item
    /// never carries two timers.
    fn arm_timer(&self) {
        self.cancel_timer();
        if let Some(cb) = self.tick_cb.borrow().as_ref() {
            if let Ok(handle) = self
                .win
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    TICK_PERIOD_MS,
                )
            {
                self.timer.set(Some(handle));
            }
        }
    }

    fn cancel_timer(&self) {
        if let Some(handle) = self.timer.take() {
            self.win.clear_interval_with_handle(handle);
        }
    }
}

pub(crate) fn init_audio_players(win: &Window, doc: &Document) -> Result<(), JsValue> {
    let items = doc.query_selector_all(".audio-item-compact")?;
    for i in 0..items.length() {
        let Some(node) = items.item(i) else { continue };
        let item: Element = node.dyn_into()?;
        bind_player(win, &item)?;
    }
    Ok(())
}

fn bind_player(win: &Window, item: &Element) -> Result<(), JsValue> {
    // Both children are optional; a missing one degrades to a no-op.
    let button = item
        .query_selector(".play-btn-mini")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let progress = item
        .query_selector(".progress-mini")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    let widget = Rc::new(AudioWidget {
        win: win.clone(),
        state: RefCell::new(PlayerState::new()),
        timer: Cell::new(None),
        button,
        progress,
        tick_cb: RefCell::new(None),
    });

    // Draw the empty bar before any interaction.
    widget.render_progress();

    let tick_widget = Rc::clone(&widget);
    *widget.tick_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let outcome = tick_widget.state.borrow_mut().tick();
        tick_widget.render_progress();
        if outcome == Tick::Finished {
            tick_widget.cancel_timer();
            tick_widget.show_paused();
        }
    }) as Box<dyn FnMut()>));

    if let Some(btn) = widget.button.clone() {
        let click_widget = Rc::clone(&widget);
        let cb = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            let transport = click_widget.state.borrow_mut().toggle();
            match transport {
                Transport::Start => {
                    click_widget.show_playing();
                    click_widget.arm_timer();
                }
                Transport::Stop => {
                    click_widget.show_paused();
                    click_widget.cancel_timer();
                }
            }
        }) as Box<dyn FnMut(_)>);
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}
