use crate::config::{NAV_SCROLL_THRESHOLD_PX, PARALLAX_FACTOR};

/// Class list for the top navigation bar at the given scroll offset.
pub fn nav_class(scroll_y: f64) -> &'static str {
    if scroll_y > NAV_SCROLL_THRESHOLD_PX {
        "nav nav-scrolled"
    } else {
        "nav"
    }
}

/// Inline style that parallax-shifts the hero background.
pub fn hero_bg_style(scroll_y: f64) -> String {
    format!("transform: translateY({}px)", scroll_y * PARALLAX_FACTOR)
}

pub fn nav_links_class(menu_open: bool) -> &'static str {
    if menu_open {
        "nav-links open"
    } else {
        "nav-links"
    }
}

/// Caption above the countdown; the premiere wording is dropped once live.
pub fn countdown_heading(live: bool) -> &'static str {
    if live {
        "ESTADO:"
    } else {
        "ESTRENO EN:"
    }
}

/// Episode ordinal as shown on the card, e.g. `03`.
pub fn format_episode_number(number: u8) -> String {
    format!("{:02}", number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_switches_strictly_above_threshold() {
        assert_eq!(nav_class(0.0), "nav");
        assert_eq!(nav_class(NAV_SCROLL_THRESHOLD_PX), "nav");
        assert_eq!(nav_class(NAV_SCROLL_THRESHOLD_PX + 0.5), "nav nav-scrolled");
        assert_eq!(nav_class(2_400.0), "nav nav-scrolled");
    }

    #[test]
    fn parallax_follows_scroll() {
        assert_eq!(hero_bg_style(0.0), "transform: translateY(0px)");
        assert_eq!(hero_bg_style(200.0), "transform: translateY(60px)");
    }

    #[test]
    fn menu_class_tracks_open_flag() {
        assert_eq!(nav_links_class(false), "nav-links");
        assert_eq!(nav_links_class(true), "nav-links open");
    }

    #[test]
    fn heading_drops_premiere_wording_when_live() {
        assert_eq!(countdown_heading(false), "ESTRENO EN:");
        assert_eq!(countdown_heading(true), "ESTADO:");
    }

    #[test]
    fn episode_numbers_are_two_digits() {
        assert_eq!(format_episode_number(1), "01");
        assert_eq!(format_episode_number(12), "12");
    }
}
