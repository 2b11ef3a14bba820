// src/kicad.rs

use crate::settings::Settings;
use crate::uid::UidSource;
use glam::Vec2;
use std::fmt::Write;

/// Drawing layers used by generated footprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Silkscreen,
    Fab,
    Courtyard,
}

impl Layer {
    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Silkscreen => "F.SilkS",
            Layer::Fab => "F.Fab",
            Layer::Courtyard => "F.CrtYd",
        }
    }
}

/// SMD roundrect pad. The copper/paste/mask layer set and the roundrect
/// ratio are the same for every pad this tool produces.
#[derive(Debug, Clone, PartialEq)]
pub struct KiPad {
    pub name: String,
    pub pos: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KiLine {
    pub layer: Layer,
    pub start: Vec2,
    pub end: Vec2,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KiText {
    pub layer: Layer,
    pub text: String,
    pub pos: Vec2,
    pub rotation: f32,
    pub font_size: f32,
    pub thickness: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KiProperty {
    pub name: &'static str,
    pub value: String,
    pub pos: Vec2,
    pub rotation: f32,
    pub layer: Layer,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KiModelRef {
    pub path: String,
    pub hidden: bool,
}

/// A complete footprint, ready to serialize.
///
/// The line work is kept per layer so the file comes out in the fixed
/// order: pads, silkscreen, fab outline, fab text, courtyard, properties,
/// models.
#[derive(Debug, Clone)]
pub struct KiFootprint {
    pub name: String,
    pub description: String,
    pub pads: Vec<KiPad>,
    pub silk: Vec<KiLine>,
    pub fab: Vec<KiLine>,
    pub fab_texts: Vec<KiText>,
    pub courtyard: Vec<KiLine>,
    pub properties: Vec<KiProperty>,
    pub models: Vec<KiModelRef>,
}

impl KiFootprint {
    /// Generates the full s-expression string for a .kicad_mod file.
    ///
    /// Every element gets a fresh uid from `uids`; everything else is a
    /// pure function of the footprint and the settings.
    pub fn to_kicad_mod(&self, settings: &Settings, uids: &mut dyn UidSource) -> String {
        let mut out = String::new();
        writeln!(out, "(footprint \"{}\"", self.name).unwrap();
        writeln!(out, "\t(version 20240108)").unwrap();
        writeln!(out, "\t(generator \"footprint_generator\")").unwrap();
        writeln!(out, "\t(generator_version \"0.1\")").unwrap();
        writeln!(out, "\t(layer \"F.Cu\")").unwrap();
        writeln!(out, "\t(descr \"{}\")", self.description).unwrap();
        writeln!(out, "\t(attr smd)").unwrap();

        for pad in &self.pads {
            write_pad(&mut out, pad, settings, uids);
        }
        for line in self.silk.iter().chain(&self.fab) {
            write_line(&mut out, line, uids);
        }
        for text in &self.fab_texts {
            write_text(&mut out, text, uids);
        }
        for line in &self.courtyard {
            write_line(&mut out, line, uids);
        }
        for property in &self.properties {
            write_property(&mut out, property, settings, uids);
        }
        for model in &self.models {
            write_model(&mut out, model);
        }

        writeln!(out, ")").unwrap();
        out
    }
}

fn write_pad(out: &mut String, pad: &KiPad, settings: &Settings, uids: &mut dyn UidSource) {
    writeln!(out, "\t(pad \"{}\" smd roundrect", pad.name).unwrap();
    writeln!(out, "\t\t(at {} {})", pad.pos.x, pad.pos.y).unwrap();
    writeln!(out, "\t\t(size {} {})", pad.size.x, pad.size.y).unwrap();
    writeln!(out, "\t\t(layers \"F.Cu\" \"F.Paste\" \"F.Mask\")").unwrap();
    writeln!(out, "\t\t(roundrect_rratio 0.25)").unwrap();
    writeln!(out, "\t\t(solder_mask_margin {})", settings.solder_mask_opening).unwrap();
    writeln!(
        out,
        "\t\t(solder_paste_margin_ratio {})",
        settings.solder_paste_ratio
    )
    .unwrap();
    writeln!(
        out,
        "\t\t(thermal_bridge_angle {})",
        settings.thermal_bridge_angle
    )
    .unwrap();
    writeln!(out, "\t\t(uuid \"{}\")", uids.next_uid()).unwrap();
    writeln!(out, "\t)").unwrap();
}

fn write_line(out: &mut String, line: &KiLine, uids: &mut dyn UidSource) {
    writeln!(out, "\t(fp_line").unwrap();
    writeln!(out, "\t\t(start {} {})", line.start.x, line.start.y).unwrap();
    writeln!(out, "\t\t(end {} {})", line.end.x, line.end.y).unwrap();
    writeln!(out, "\t\t(stroke").unwrap();
    writeln!(out, "\t\t\t(width {})", line.width).unwrap();
    writeln!(out, "\t\t\t(type default)").unwrap();
    writeln!(out, "\t\t)").unwrap();
    // Line layers are emitted unquoted, unlike text and property layers.
    writeln!(out, "\t\t(layer {})", line.layer.as_str()).unwrap();
    writeln!(out, "\t\t(uuid \"{}\")", uids.next_uid()).unwrap();
    writeln!(out, "\t)").unwrap();
}

fn write_text(out: &mut String, text: &KiText, uids: &mut dyn UidSource) {
    writeln!(out, "\t(fp_text user \"{}\"", text.text).unwrap();
    writeln!(out, "\t\t(at {} {} {})", text.pos.x, text.pos.y, text.rotation).unwrap();
    writeln!(out, "\t\t(layer \"{}\")", text.layer.as_str()).unwrap();
    writeln!(out, "\t\t(uuid \"{}\")", uids.next_uid()).unwrap();
    writeln!(out, "\t\t(effects").unwrap();
    writeln!(out, "\t\t\t(font").unwrap();
    writeln!(out, "\t\t\t\t(size {} {})", text.font_size, text.font_size).unwrap();
    writeln!(out, "\t\t\t\t(thickness {})", text.thickness).unwrap();
    writeln!(out, "\t\t\t)").unwrap();
    writeln!(out, "\t\t)").unwrap();
    writeln!(out, "\t)").unwrap();
}

fn write_property(
    out: &mut String,
    property: &KiProperty,
    settings: &Settings,
    uids: &mut dyn UidSource,
) {
    writeln!(out, "\t(property \"{}\" \"{}\"", property.name, property.value).unwrap();
    writeln!(
        out,
        "\t\t(at {} {} {})",
        property.pos.x, property.pos.y, property.rotation
    )
    .unwrap();
    writeln!(out, "\t\t(layer \"{}\")", property.layer.as_str()).unwrap();
    if property.hidden {
        writeln!(out, "\t\t(hide yes)").unwrap();
    }
    writeln!(out, "\t\t(uuid \"{}\")", uids.next_uid()).unwrap();
    writeln!(out, "\t\t(effects").unwrap();
    writeln!(out, "\t\t\t(font").unwrap();
    writeln!(out, "\t\t\t\t(size {} {})", settings.text_size, settings.text_size).unwrap();
    writeln!(out, "\t\t\t\t(thickness {})", settings.line_width).unwrap();
    writeln!(out, "\t\t\t)").unwrap();
    writeln!(out, "\t\t)").unwrap();
    writeln!(out, "\t)").unwrap();
}

fn write_model(out: &mut String, model: &KiModelRef) {
    writeln!(out, "\t(model \"{}\"", model.path).unwrap();
    if model.hidden {
        writeln!(out, "\t\t(hide yes)").unwrap();
    }
    writeln!(out, "\t\t(offset").unwrap();
    writeln!(out, "\t\t\t(xyz 0 0 0)").unwrap();
    writeln!(out, "\t\t)").unwrap();
    writeln!(out, "\t\t(scale").unwrap();
    writeln!(out, "\t\t\t(xyz 1 1 1)").unwrap();
    writeln!(out, "\t\t)").unwrap();
    writeln!(out, "\t\t(rotate").unwrap();
    writeln!(out, "\t\t\t(xyz 0 0 0)").unwrap();
    writeln!(out, "\t\t)").unwrap();
    writeln!(out, "\t)").unwrap();
}
