// src/record.rs

/// Part-type vocabulary of the sheet. Anything outside it is kept as an
/// unrecognized kind: the footprint is still written, just without a
/// silkscreen outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Resistor,
    Capacitor,
    Diode,
    Transistor,
}

impl PartKind {
    /// Exact-match tag lookup ("R"/"C"/"D"/"T").
    pub fn from_tag(tag: &str) -> Option<PartKind> {
        match tag {
            "R" => Some(PartKind::Resistor),
            "C" => Some(PartKind::Capacitor),
            "D" => Some(PartKind::Diode),
            "T" => Some(PartKind::Transistor),
            _ => None,
        }
    }

    /// Pad names for the two terminals. Diodes get cathode/anode, the
    /// transistor-style parts get N/P, everything else plain numbers.
    pub fn pad_names(kind: Option<PartKind>) -> (&'static str, &'static str) {
        match kind {
            Some(PartKind::Diode) => ("C", "A"),
            Some(PartKind::Transistor) => ("N", "P"),
            _ => ("1", "2"),
        }
    }
}

/// One row of the parameter sheet, fully parsed.
///
/// A and B are the pad x-spans, C1/C2 the pad center offsets from the part
/// origin, D the shared pad y-span. All dimensions in mm.
#[derive(Debug, Clone)]
pub struct PartRecord {
    pub name: String,
    pub description: String,
    /// Carried from the sheet for traceability; not emitted into the file.
    pub version: String,
    pub kind: Option<PartKind>,
    pub pad1_span: f32,
    pub pad2_span: f32,
    pub pad1_offset: f32,
    pub pad2_offset: f32,
    pub pad_width: f32,
    pub tested: String,
    /// `Some((x, y))` only when both courtyard cells carry numbers; the
    /// sentinel in either cell means "derive the boxes from the pads".
    pub courtyard: Option<(f32, f32)>,
    pub model_3d: Option<String>,
    pub alt_models: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_lookup_is_exact() {
        assert_eq!(PartKind::from_tag("R"), Some(PartKind::Resistor));
        assert_eq!(PartKind::from_tag("C"), Some(PartKind::Capacitor));
        assert_eq!(PartKind::from_tag("D"), Some(PartKind::Diode));
        assert_eq!(PartKind::from_tag("T"), Some(PartKind::Transistor));
        assert_eq!(PartKind::from_tag("r"), None);
        assert_eq!(PartKind::from_tag("RES"), None);
        assert_eq!(PartKind::from_tag(""), None);
    }

    #[test]
    fn pad_names_follow_kind() {
        assert_eq!(PartKind::pad_names(Some(PartKind::Resistor)), ("1", "2"));
        assert_eq!(PartKind::pad_names(Some(PartKind::Capacitor)), ("1", "2"));
        assert_eq!(PartKind::pad_names(Some(PartKind::Diode)), ("C", "A"));
        assert_eq!(PartKind::pad_names(Some(PartKind::Transistor)), ("N", "P"));
        assert_eq!(PartKind::pad_names(None), ("1", "2"));
    }
}
