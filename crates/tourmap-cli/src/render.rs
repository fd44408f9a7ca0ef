//! Plain-text output for `tourmap search`.

use std::fmt::Write as _;

use tourmap_core::{PlaceQuery, SearchResult};
use tourmap_weather::CurrentWeather;

const NAME_WIDTH: usize = 32;

pub(crate) fn render_search(
    query: &PlaceQuery,
    result: &SearchResult,
    weather: Option<&CurrentWeather>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{query}  ({})", result.center);

    if let Some(weather) = weather {
        let _ = writeln!(out, "{}", weather_line(weather));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{:<4}{:<NAME_WIDTH$}{:<16}LOCATION", "#", "NAME", "TYPE");
    for (i, poi) in result.pois.iter().enumerate() {
        let marker = if poi.synthetic { "*" } else { "" };
        let _ = writeln!(
            out,
            "{:<4}{:<NAME_WIDTH$}{:<16}{}",
            format!("{}{marker}", i + 1),
            truncate(poi.short_name(), NAME_WIDTH - 2),
            poi.kind,
            poi.coordinate
        );
    }

    if result.synthetic_count() > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "* suggested spot, no upstream match nearby");
    }
    out
}

fn weather_line(weather: &CurrentWeather) -> String {
    let badge = weather.badge();
    let mut line = format!(
        "{} {}  {:.1}°C  wind {:.1} km/h",
        badge.emoji(),
        badge.label(),
        weather.temperature,
        weather.windspeed
    );
    if let Some(time) = weather.time {
        let _ = write!(line, "  (as of {})", time.format("%H:%M"));
    }
    line
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        format!("{}...", s.chars().take(max_chars - 3).collect::<String>())
    } else {
        s.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourmap_core::{Coordinate, Poi};

    fn poi(name: &str, kind: &str, synthetic: bool) -> Poi {
        Poi {
            coordinate: Coordinate::new(16.05, 108.21).unwrap(),
            display_name: name.to_owned(),
            kind: kind.to_owned(),
            synthetic,
        }
    }

    fn sample() -> SearchResult {
        SearchResult {
            center: Coordinate::new(16.047_079, 108.206_23).unwrap(),
            pois: vec![
                poi("Cầu Rồng, Sơn Trà, Đà Nẵng", "attraction", false),
                poi("Khách sạn Mường Thanh", "hotel", false),
                poi("Địa điểm gợi ý du lịch #1", "suggested", true),
                poi("Địa điểm gợi ý du lịch #2", "suggested", true),
                poi("Địa điểm gợi ý du lịch #3", "suggested", true),
            ],
        }
    }

    #[test]
    fn lists_every_poi_with_short_names() {
        let query = PlaceQuery::parse("Da Nang").unwrap();
        let text = render_search(&query, &sample(), None);

        assert!(text.starts_with("Da Nang  (16.047079, 108.206230)"));
        assert!(text.contains("Cầu Rồng "));
        assert!(!text.contains("Sơn Trà"));
        assert_eq!(text.lines().filter(|l| l.contains("16.050000")).count(), 5);
    }

    #[test]
    fn marks_synthetic_rows() {
        let query = PlaceQuery::parse("Da Nang").unwrap();
        let text = render_search(&query, &sample(), None);

        assert!(text.lines().any(|l| l.starts_with("1   Cầu Rồng")));
        assert!(text.lines().any(|l| l.starts_with("3*  Địa điểm gợi ý")));
        assert!(text.contains("* suggested spot"));
    }

    #[test]
    fn no_footnote_when_all_real() {
        let query = PlaceQuery::parse("Da Nang").unwrap();
        let mut result = sample();
        for p in &mut result.pois {
            p.synthetic = false;
        }
        let text = render_search(&query, &result, None);
        assert!(!text.contains("suggested spot"));
    }

    #[test]
    fn weather_panel_only_when_present() {
        let query = PlaceQuery::parse("Da Nang").unwrap();
        let weather = CurrentWeather {
            temperature: 31.46,
            windspeed: 9.0,
            weathercode: 96,
            time: chrono::NaiveDate::from_ymd_opt(2024, 7, 10)
                .and_then(|d| d.and_hms_opt(15, 0, 0)),
        };

        let with = render_search(&query, &sample(), Some(&weather));
        assert!(with.contains("⛈️ Thunderstorm  31.5°C  wind 9.0 km/h  (as of 15:00)"));

        let without = render_search(&query, &sample(), None);
        assert!(!without.contains("°C"));
    }

    #[test]
    fn long_names_are_truncated() {
        let long = "A".repeat(80);
        assert_eq!(truncate(&long, 10), "AAAAAAA...");
        assert_eq!(truncate("Hội An", 10), "Hội An");
    }
}
