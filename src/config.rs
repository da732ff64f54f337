//! Application-level configuration constants.

use log::Level;

// Navigation
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 100.0;
pub const PARALLAX_FACTOR: f64 = 0.3;

// In-page anchors, in menu order: (section id, link label)
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("sistema", "SISTEMA"),
    ("personajes", "EXPEDIENTES"),
    ("episodios", "EPISODIOS"),
    ("simular", "SIMULAR"),
];

// Logging
pub const LOG_LEVEL: Level = Level::Info;
