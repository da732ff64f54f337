//! State machine behind the "receive your FDD" simulator.
//!
//! The sequence is strictly linear: `Idle -> Scanning -> Calculating -> Done`,
//! and only `Done` can go back to `Idle`. Actions that arrive in the wrong
//! stage are dropped, so a late timer can never rewind or skip a stage.

use crate::defaults::{
    CALC_DELAY_MS, MAX_DAY_OF_MONTH, MAX_YEARS_AHEAD, MIN_YEARS_AHEAD, REF_LEN, SCAN_DELAY_MS,
};
use chrono::{Datelike, NaiveDate};
use log::debug;
use rand::Rng;
use std::rc::Rc;
use yew::Reducible;

const REF_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Idle,
    Scanning,
    Calculating,
    Done,
}

impl Stage {
    pub fn is_processing(self) -> bool {
        matches!(self, Stage::Scanning | Stage::Calculating)
    }

    /// How long the stage lasts before the next automatic transition.
    pub fn delay_ms(self) -> Option<u32> {
        match self {
            Stage::Scanning => Some(SCAN_DELAY_MS),
            Stage::Calculating => Some(CALC_DELAY_MS),
            Stage::Idle | Stage::Done => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulatorAction {
    /// User pressed the start button.
    Start,
    /// First delay elapsed.
    Scanned,
    /// Second delay elapsed with the generated date.
    Calculated(NaiveDate),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimulatorState {
    pub stage: Stage,
    pub fdd: Option<NaiveDate>,
}

impl SimulatorState {
    /// Apply an action, returning `None` when it does not fit the current stage.
    pub fn apply(&self, action: SimulatorAction) -> Option<Self> {
        let next = match (self.stage, action) {
            (Stage::Idle, SimulatorAction::Start) => Self {
                stage: Stage::Scanning,
                fdd: None,
            },
            (Stage::Scanning, SimulatorAction::Scanned) => Self {
                stage: Stage::Calculating,
                fdd: None,
            },
            (Stage::Calculating, SimulatorAction::Calculated(date)) => Self {
                stage: Stage::Done,
                fdd: Some(date),
            },
            (Stage::Done, SimulatorAction::Reset) => Self::default(),
            (stage, action) => {
                debug!("Ignoring {:?} while {:?}", action, stage);
                return None;
            }
        };
        Some(next)
    }
}

impl Reducible for SimulatorState {
    type Action = SimulatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

/// Synthesize a cosmetic FDD: `today` plus 20..=69 years, with a random month
/// and a day between 1 and 28.
pub fn generate_fdd<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> Option<NaiveDate> {
    let years = rng.random_range(MIN_YEARS_AHEAD..=MAX_YEARS_AHEAD);
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=MAX_DAY_OF_MONTH);
    NaiveDate::from_ymd_opt(today.year() + years, month, day)
}

/// Random uppercase base-36 reference shown in the simulator footer.
pub fn reference_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..REF_LEN)
        .map(|_| REF_ALPHABET[rng.random_range(0..REF_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn full_run_reaches_done_with_a_date() {
        let idle = SimulatorState::default();
        assert_eq!(idle.stage, Stage::Idle);
        assert!(idle.fdd.is_none());

        let scanning = idle.apply(SimulatorAction::Start).unwrap();
        assert_eq!(scanning.stage, Stage::Scanning);
        assert_eq!(scanning.stage.delay_ms(), Some(SCAN_DELAY_MS));

        let calculating = scanning.apply(SimulatorAction::Scanned).unwrap();
        assert_eq!(calculating.stage, Stage::Calculating);
        assert_eq!(calculating.stage.delay_ms(), Some(CALC_DELAY_MS));

        let date = NaiveDate::from_ymd_opt(2070, 2, 14).unwrap();
        let done = calculating.apply(SimulatorAction::Calculated(date)).unwrap();
        assert_eq!(done.stage, Stage::Done);
        assert_eq!(done.fdd, Some(date));
        assert_eq!(done.stage.delay_ms(), None);
    }

    #[test]
    fn reset_from_done_clears_the_date() {
        let done = SimulatorState {
            stage: Stage::Done,
            fdd: Some(today()),
        };
        let reset = done.apply(SimulatorAction::Reset).unwrap();
        assert_eq!(reset, SimulatorState::default());
    }

    #[test]
    fn out_of_order_actions_are_ignored() {
        let idle = SimulatorState::default();
        assert!(idle.apply(SimulatorAction::Scanned).is_none());
        assert!(idle.apply(SimulatorAction::Reset).is_none());
        assert!(idle.apply(SimulatorAction::Calculated(today())).is_none());

        let scanning = idle.apply(SimulatorAction::Start).unwrap();
        assert!(scanning.apply(SimulatorAction::Start).is_none());
        assert!(scanning.apply(SimulatorAction::Reset).is_none());
        assert!(scanning.apply(SimulatorAction::Calculated(today())).is_none());
    }

    #[test]
    fn reducer_keeps_the_same_state_on_ignored_actions() {
        let state = Rc::new(SimulatorState::default());
        let same = state.clone().reduce(SimulatorAction::Reset);
        assert!(Rc::ptr_eq(&state, &same));

        let started = state.reduce(SimulatorAction::Start);
        assert_eq!(started.stage, Stage::Scanning);
    }

    #[test]
    fn processing_flag_covers_the_timed_stages() {
        assert!(!Stage::Idle.is_processing());
        assert!(Stage::Scanning.is_processing());
        assert!(Stage::Calculating.is_processing());
        assert!(!Stage::Done.is_processing());
    }

    #[test]
    fn generated_dates_stay_within_the_year_window() {
        let mut rng = StdRng::seed_from_u64(7);
        let today = today();
        let ceiling = NaiveDate::from_ymd_opt(today.year() + 70, today.month(), today.day())
            .unwrap();
        for _ in 0..2_000 {
            let fdd = generate_fdd(today, &mut rng).unwrap();
            let ahead = fdd.year() - today.year();
            assert!((MIN_YEARS_AHEAD..=MAX_YEARS_AHEAD).contains(&ahead));
            assert!(fdd > today);
            assert!(fdd < ceiling);
            assert!((1..=MAX_DAY_OF_MONTH).contains(&fdd.day()));
        }
    }

    #[test]
    fn reference_codes_are_base36() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let code = reference_code(&mut rng);
            assert_eq!(code.len(), REF_LEN);
            assert!(code
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }
}
