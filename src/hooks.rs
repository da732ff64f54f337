use chrono::Local;
use fdd_site::countdown::Countdown;
use fdd_site::defaults::TICK_MS;
use fdd_site::now_ms;
use fdd_site::simulator::{generate_fdd, reference_code, SimulatorAction, SimulatorState, Stage};
use gloo_timers::callback::{Interval, Timeout};
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Tracks `window.scrollY`. The listener is removed when the component unmounts.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state_eq(|| 0.0_f64);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with((), move |_| {
            let window = gloo_utils::window();
            scroll_y.set(window.scroll_y().unwrap_or(0.0));

            let listener = {
                let window = window.clone();
                Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                    scroll_y.set(window.scroll_y().unwrap_or(0.0));
                })
            };
            if let Err(e) = window
                .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            {
                warn!("Could not attach scroll listener: {:?}", e);
            }

            move || {
                if let Err(e) = window
                    .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                {
                    warn!("Could not detach scroll listener: {:?}", e);
                }
                drop(listener);
            }
        });
    }

    *scroll_y
}

/// Recomputes the countdown to `target_ms` once per second.
///
/// The value is computed immediately on mount. The effect is keyed on
/// `is_live`, so the tick that first reports `Live` re-runs it: the interval
/// is dropped and no new one is started.
#[hook]
pub fn use_countdown(target_ms: i64) -> Countdown {
    let countdown = use_state_eq(|| Countdown::until(target_ms, now_ms()));

    {
        let countdown = countdown.clone();
        let live = countdown.is_live();
        use_effect_with((target_ms, live), move |&(target_ms, _)| -> Box<dyn FnOnce()> {
            let current = Countdown::until(target_ms, now_ms());
            countdown.set(current);
            if current.is_live() {
                info!("Premiere reached, countdown is live");
                return Box::new(|| ());
            }

            let interval = Interval::new(TICK_MS, move || {
                countdown.set(Countdown::until(target_ms, now_ms()));
            });
            Box::new(move || drop(interval))
        });
    }

    *countdown
}

/// State and callbacks for the FDD simulator widget.
#[derive(Clone)]
pub struct Simulator {
    pub state: SimulatorState,
    /// Footer reference, renewed on every reset.
    pub reference: String,
    pub on_start: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
}

/// Custom hook driving the staged simulator.
///
/// Each timed stage owns a single pending `Timeout`; it is dropped, and so
/// cancelled, as soon as the stage changes or the component unmounts.
#[hook]
pub fn use_simulator() -> Simulator {
    let state = use_reducer(SimulatorState::default);
    let reference = use_state(|| reference_code(&mut rand::rng()));

    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.stage, move |&stage| {
            let pending = stage.delay_ms().map(|delay| {
                Timeout::new(delay, move || match stage {
                    Stage::Scanning => dispatcher.dispatch(SimulatorAction::Scanned),
                    Stage::Calculating => {
                        let today = Local::now().date_naive();
                        match generate_fdd(today, &mut rand::rng()) {
                            Some(date) => dispatcher.dispatch(SimulatorAction::Calculated(date)),
                            None => warn!("Could not build an FDD from {}", today),
                        }
                    }
                    Stage::Idle | Stage::Done => {}
                })
            });
            move || drop(pending)
        });
    }

    let on_start = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            info!("Simulator protocol started");
            dispatcher.dispatch(SimulatorAction::Start);
        })
    };

    let on_reset = {
        let dispatcher = state.dispatcher();
        let reference = reference.clone();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(SimulatorAction::Reset);
            reference.set(reference_code(&mut rand::rng()));
        })
    };

    Simulator {
        state: (*state).clone(),
        reference: (*reference).clone(),
        on_start,
        on_reset,
    }
}
