// src/silk.rs
//
// Per-part-kind silkscreen outline generators. All of them work on the
// already-expanded silkscreen box and return the segments in drawing order.

use crate::kicad::{KiLine, Layer};
use crate::layout::BoundingBox;
use crate::record::PartKind;
use crate::settings::Settings;
use glam::Vec2;

/// Silkscreen outline for `kind` over `bbox`. An unrecognized kind yields
/// no lines; the rest of the footprint is unaffected.
pub fn outline(kind: Option<PartKind>, bbox: &BoundingBox, settings: &Settings) -> Vec<KiLine> {
    match kind {
        Some(PartKind::Resistor) => split_rectangle(bbox, settings.line_width),
        Some(PartKind::Capacitor) => closed_rectangle(bbox, settings.line_width),
        Some(PartKind::Diode) => diode(bbox, settings),
        Some(PartKind::Transistor) => transistor(bbox, settings),
        None => Vec::new(),
    }
}

fn line(start: Vec2, end: Vec2, width: f32) -> KiLine {
    KiLine {
        layer: Layer::Silkscreen,
        start,
        end,
        width,
    }
}

/// Corners in drawing order: A=(xmin,ymin), B=(xmax,ymin), C=(xmax,ymax),
/// D=(xmin,ymax).
fn corners(bbox: &BoundingBox) -> (Vec2, Vec2, Vec2, Vec2) {
    (
        Vec2::new(bbox.xmin, bbox.ymin),
        Vec2::new(bbox.xmax, bbox.ymin),
        Vec2::new(bbox.xmax, bbox.ymax),
        Vec2::new(bbox.xmin, bbox.ymax),
    )
}

/// Rectangle with the two pin edges split open: only a 20%-length stub is
/// drawn inward from each corner, so the silkscreen never crosses the pads.
fn split_rectangle(bbox: &BoundingBox, width: f32) -> Vec<KiLine> {
    let (a, b, c, d) = corners(bbox);
    let l = 0.2 * (b - a);
    vec![
        line(a, d, width),
        line(a, a + l, width),
        line(b, b - l, width),
        line(b, c, width),
        line(c, c - l, width),
        line(d, d + l, width),
    ]
}

/// Plain closed rectangle, used for capacitors.
fn closed_rectangle(bbox: &BoundingBox, width: f32) -> Vec<KiLine> {
    let (a, b, c, d) = corners(bbox);
    vec![
        line(a, b, width),
        line(b, c, width),
        line(c, d, width),
        line(d, a, width),
    ]
}

/// Split rectangle plus a cathode bar one silk margin left of the body.
fn diode(bbox: &BoundingBox, settings: &Settings) -> Vec<KiLine> {
    let (a, _, _, d) = corners(bbox);
    let bar = Vec2::new(settings.silk_margin(), 0.0);
    let mut lines = split_rectangle(bbox, settings.line_width);
    lines.push(line(a - bar, d - bar, settings.line_width));
    lines
}

/// Split rectangle plus a flag stub off the right edge marking lead 3.
fn transistor(bbox: &BoundingBox, settings: &Settings) -> Vec<KiLine> {
    let (_, b, c, _) = corners(bbox);
    let stub = Vec2::new(2.0 * settings.silk_margin(), 0.0);
    let (e, f) = (b + stub, c + stub);
    let mut lines = split_rectangle(bbox, settings.line_width);
    lines.push(line(e, f, settings.line_width));
    lines.push(line(b, e, settings.line_width));
    lines.push(line(c, f, settings.line_width));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox() -> BoundingBox {
        BoundingBox {
            xmin: -1.0,
            xmax: 1.0,
            ymin: -0.5,
            ymax: 0.5,
        }
    }

    fn settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn capacitor_is_a_closed_rectangle_of_four_segments() {
        let lines = outline(Some(PartKind::Capacitor), &bbox(), &settings());
        assert_eq!(lines.len(), 4);
        // Closed: each segment starts where the previous one ended.
        for pair in lines.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(lines[3].end, lines[0].start);
        assert_eq!(lines[0].start, Vec2::new(-1.0, -0.5));
        assert_eq!(lines[1].start, Vec2::new(1.0, -0.5));
    }

    #[test]
    fn resistor_pin_edges_are_corner_stubs_of_fifth_width() {
        let lines = outline(Some(PartKind::Resistor), &bbox(), &settings());
        assert_eq!(lines.len(), 6);
        // Full left and right sides.
        assert_eq!((lines[0].start, lines[0].end), (Vec2::new(-1.0, -0.5), Vec2::new(-1.0, 0.5)));
        assert_eq!((lines[3].start, lines[3].end), (Vec2::new(1.0, -0.5), Vec2::new(1.0, 0.5)));
        // Stubs run 0.2 * width = 0.4 inward from each corner.
        let stub = 0.2 * 2.0;
        assert_eq!(lines[1].end, Vec2::new(-1.0 + stub, -0.5));
        assert_eq!(lines[2].end, Vec2::new(1.0 - stub, -0.5));
        assert_eq!(lines[4].end, Vec2::new(1.0 - stub, 0.5));
        assert_eq!(lines[5].end, Vec2::new(-1.0 + stub, 0.5));
    }

    #[test]
    fn diode_adds_one_cathode_bar_left_of_the_body() {
        let settings = settings();
        let lines = outline(Some(PartKind::Diode), &bbox(), &settings);
        assert_eq!(lines.len(), 7);
        let bar = &lines[6];
        let x = -1.0 - settings.silk_margin();
        assert_eq!(bar.start, Vec2::new(x, -0.5));
        assert_eq!(bar.end, Vec2::new(x, 0.5));
    }

    #[test]
    fn transistor_adds_a_flag_stub_on_the_right() {
        let settings = settings();
        let lines = outline(Some(PartKind::Transistor), &bbox(), &settings);
        assert_eq!(lines.len(), 9);
        let x = 1.0 + 2.0 * settings.silk_margin();
        assert_eq!((lines[6].start, lines[6].end), (Vec2::new(x, -0.5), Vec2::new(x, 0.5)));
        assert_eq!((lines[7].start, lines[7].end), (Vec2::new(1.0, -0.5), Vec2::new(x, -0.5)));
        assert_eq!((lines[8].start, lines[8].end), (Vec2::new(1.0, 0.5), Vec2::new(x, 0.5)));
    }

    #[test]
    fn unknown_kind_draws_nothing() {
        assert!(outline(None, &bbox(), &settings()).is_empty());
    }

    #[test]
    fn stroke_width_comes_from_settings() {
        let settings = Settings {
            line_width: 0.12,
            ..Settings::default()
        };
        for kind in [
            PartKind::Resistor,
            PartKind::Capacitor,
            PartKind::Diode,
            PartKind::Transistor,
        ] {
            for l in outline(Some(kind), &bbox(), &settings) {
                assert_eq!(l.width, 0.12);
                assert_eq!(l.layer, Layer::Silkscreen);
            }
        }
    }
}
