// src/layout.rs
//
// The layout engine: turns one part record into a complete footprint.
// Everything here is closed-form geometry; no state survives a record.

use crate::kicad::{
    KiFootprint, KiLine, KiModelRef, KiPad, KiProperty, KiText, Layer,
};
use crate::record::{PartKind, PartRecord};
use crate::settings::Settings;
use crate::silk;
use glam::Vec2;

/// Fab and courtyard outline stroke. Fixed by the file format conventions,
/// not by the process settings.
const OUTLINE_STROKE: f32 = 0.05;
/// Font of the `${REFERENCE}` placeholder on the fab layer.
const REFERENCE_FONT_SIZE: f32 = 0.5;
const REFERENCE_FONT_THICKNESS: f32 = 0.08;

/// Axis-aligned bounding box accumulated over the pads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub xmin: f32,
    pub xmax: f32,
    pub ymin: f32,
    pub ymax: f32,
}

impl BoundingBox {
    /// The accumulator starts as a zero-size box at the origin, so the
    /// result always contains (0,0) even when every pad sits on one side.
    /// Existing libraries depend on the outlines this produces; keep it.
    pub fn at_origin() -> BoundingBox {
        BoundingBox {
            xmin: 0.0,
            xmax: 0.0,
            ymin: 0.0,
            ymax: 0.0,
        }
    }

    /// Box of `width` x `height` centered on the origin.
    pub fn centered(width: f32, height: f32) -> BoundingBox {
        BoundingBox {
            xmin: -width / 2.0,
            xmax: width / 2.0,
            ymin: -height / 2.0,
            ymax: height / 2.0,
        }
    }

    /// Grows the box to cover the pad's rectangle.
    pub fn include_pad(&mut self, pad: &KiPad) {
        self.xmin = self.xmin.min(pad.pos.x - pad.size.x / 2.0);
        self.xmax = self.xmax.max(pad.pos.x + pad.size.x / 2.0);
        self.ymin = self.ymin.min(pad.pos.y - pad.size.y / 2.0);
        self.ymax = self.ymax.max(pad.pos.y + pad.size.y / 2.0);
    }

    /// The box expanded uniformly on all four sides.
    pub fn expand(&self, margin: f32) -> BoundingBox {
        BoundingBox {
            xmin: self.xmin - margin,
            xmax: self.xmax + margin,
            ymin: self.ymin - margin,
            ymax: self.ymax + margin,
        }
    }
}

/// Computes the full footprint for one record: pads, silkscreen, fab and
/// courtyard outlines, the six properties and the 3D model references.
pub fn build_footprint(record: &PartRecord, settings: &Settings) -> KiFootprint {
    let (pad1_name, pad2_name) = PartKind::pad_names(record.kind);
    let pads = vec![
        KiPad {
            name: pad1_name.to_string(),
            pos: Vec2::new(-record.pad1_offset, 0.0),
            size: Vec2::new(record.pad1_span, record.pad_width),
        },
        KiPad {
            name: pad2_name.to_string(),
            pos: Vec2::new(record.pad2_offset, 0.0),
            size: Vec2::new(record.pad2_span, record.pad_width),
        },
    ];

    let mut bbox = BoundingBox::at_origin();
    for pad in &pads {
        bbox.include_pad(pad);
    }

    let margin = settings.silk_margin();
    // With an explicit courtyard the centered box replaces all three
    // derived outlines, margins included, and anchors the text instead of
    // the pad bbox.
    let (silk_box, court_box, anchor_box) = match record.courtyard {
        None => (
            bbox.expand(margin),
            bbox.expand(settings.courtyard_margin),
            bbox,
        ),
        Some((x, y)) => {
            let explicit = BoundingBox::centered(x, y);
            (explicit, explicit, explicit)
        }
    };
    let fab_box = silk_box;

    let text = settings.text_size;
    let reference_y = anchor_box.ymin - 2.0 * margin - 0.5 * text;
    let value_y = anchor_box.ymax + 2.0 * margin + text;
    let description_y = anchor_box.ymax + 2.0 * margin + 2.5 * text;
    let tested_y = anchor_box.ymax + 2.0 * margin + 4.0 * text;

    let properties = vec![
        property("Reference", "REF**", reference_y, Layer::Silkscreen, false),
        property("Value", "Val**", value_y, Layer::Fab, true),
        property("Description", &record.description, description_y, Layer::Fab, true),
        property("Is_tested", &record.tested, tested_y, Layer::Fab, true),
        property("Footprint", "", 0.0, Layer::Fab, true),
        property("Datasheet", "", 0.0, Layer::Fab, true),
    ];

    let mut models = Vec::new();
    if let Some(path) = &record.model_3d {
        models.push(KiModelRef {
            path: path.clone(),
            hidden: false,
        });
    }
    models.extend(record.alt_models.iter().map(|path| KiModelRef {
        path: path.clone(),
        hidden: true,
    }));

    KiFootprint {
        name: record.name.clone(),
        description: record.description.clone(),
        pads,
        silk: silk::outline(record.kind, &silk_box, settings),
        fab: outline_rectangle(&fab_box, Layer::Fab),
        fab_texts: vec![KiText {
            layer: Layer::Fab,
            text: "${REFERENCE}".to_string(),
            pos: Vec2::ZERO,
            rotation: 0.0,
            font_size: REFERENCE_FONT_SIZE,
            thickness: REFERENCE_FONT_THICKNESS,
        }],
        courtyard: outline_rectangle(&court_box, Layer::Courtyard),
        properties,
        models,
    }
}

/// Closed rectangle over `bbox` with the fixed outline stroke.
fn outline_rectangle(bbox: &BoundingBox, layer: Layer) -> Vec<KiLine> {
    let a = Vec2::new(bbox.xmin, bbox.ymin);
    let b = Vec2::new(bbox.xmax, bbox.ymin);
    let c = Vec2::new(bbox.xmax, bbox.ymax);
    let d = Vec2::new(bbox.xmin, bbox.ymax);
    [(a, b), (b, c), (c, d), (d, a)]
        .into_iter()
        .map(|(start, end)| KiLine {
            layer,
            start,
            end,
            width: OUTLINE_STROKE,
        })
        .collect()
}

fn property(name: &'static str, value: &str, y: f32, layer: Layer, hidden: bool) -> KiProperty {
    KiProperty {
        name,
        value: value.to_string(),
        pos: Vec2::new(0.0, y),
        rotation: 0.0,
        layer,
        hidden,
    }
}
