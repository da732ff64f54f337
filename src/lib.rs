use chrono::NaiveDate;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;

/// Fixed values shared by the countdown, the simulator and the card decks.
pub mod defaults {
    /// Premiere instant, 2026-09-15T00:00:00Z, in epoch milliseconds.
    pub const PREMIERE_MS: i64 = 1_789_430_400_000;
    pub const TICK_MS: u32 = 1_000;

    pub const SCAN_DELAY_MS: u32 = 1_500;
    pub const CALC_DELAY_MS: u32 = 2_000;

    /// Year offsets drawn for a generated FDD, both ends inclusive.
    pub const MIN_YEARS_AHEAD: i32 = 20;
    pub const MAX_YEARS_AHEAD: i32 = 69;
    /// Days are drawn from 1..=28 so every month is valid.
    pub const MAX_DAY_OF_MONTH: u32 = 28;

    pub const FDD_MASK: &str = "██/██/████";
    pub const REF_PREFIX: &str = "FDD-2026-";
    pub const REF_LEN: usize = 9;
}

/// A dossier shown in the characters deck.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Character {
    pub name: String,
    pub role: String,
    pub description: String,
    /// Display-only string, not necessarily a date (e.g. `[MÚLTIPLE]`).
    pub fdd: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Episode {
    pub number: u8,
    pub title: String,
    pub synopsis: String,
}

// Errors raised while decoding the embedded decks
#[derive(Debug)]
pub enum DataError {
    Malformed { line: u64, reason: String },
    EmptyDeck(&'static str),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Malformed { line, reason } => {
                write!(f, "Malformed record on line {}: {}", line, reason)
            }
            DataError::EmptyDeck(deck) => write!(f, "The {} deck has no records", deck),
        }
    }
}

impl std::error::Error for DataError {}

fn read_records<T: DeserializeOwned>(
    csv_content: &str,
    deck: &'static str,
) -> Result<Vec<T>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    let mut records = Vec::new();
    for result in reader.deserialize::<T>() {
        let record = result.map_err(|e| DataError::Malformed {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            reason: e.to_string(),
        })?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(DataError::EmptyDeck(deck));
    }
    debug!("Decoded {} records for the {} deck", records.len(), deck);
    Ok(records)
}

/// Decode the character deck. Expects a header row `name,role,description,fdd`.
pub fn read_characters_from_csv_string(csv_content: &str) -> Result<Vec<Character>, DataError> {
    read_records(csv_content, "characters")
}

/// Decode the episode deck. Expects a header row `number,title,synopsis`.
pub fn read_episodes_from_csv_string(csv_content: &str) -> Result<Vec<Episode>, DataError> {
    read_records(csv_content, "episodes")
}

fn load_or_empty<T>(loaded: Result<Vec<T>, DataError>) -> Vec<T> {
    match loaded {
        Ok(records) => records,
        Err(e) => {
            warn!("{}", e);
            Vec::new()
        }
    }
}

pub static CHARACTERS: Lazy<Vec<Character>> = Lazy::new(|| {
    let deck = load_or_empty(read_characters_from_csv_string(include_str!("characters.csv")));
    info!("Loaded {} character dossiers", deck.len());
    deck
});

pub static EPISODES: Lazy<Vec<Episode>> = Lazy::new(|| {
    let deck = load_or_empty(read_episodes_from_csv_string(include_str!("episodes.csv")));
    info!("Loaded {} episodes", deck.len());
    deck
});

/// Current wall-clock time in epoch milliseconds.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Format a date the way es-ES renders `2-digit/2-digit/numeric`.
pub fn format_fdd_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Pick the masked placeholder or the stored FDD for a character card.
pub fn shown_fdd(revealed: bool, fdd: &str) -> &str {
    if revealed {
        fdd
    } else {
        defaults::FDD_MASK
    }
}

pub mod countdown;
pub mod simulator;
