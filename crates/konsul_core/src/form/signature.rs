use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;

/// Logical canvas size, matching the original 600x200 signature area.
const CANVAS_WIDTH: u32 = 600;
const CANVAS_HEIGHT: u32 = 200;

pub const SIGNATURE_MEDIA_TYPE: &str = "image/svg+xml";

/// One continuous pen-down movement: a polyline of (x, y) points.
pub type Stroke = Vec<(f32, f32)>;

/// The serialized signature image attached to a submitted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureArtifact {
    svg: String,
}

impl SignatureArtifact {
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// Data URL form, the representation stored on the record.
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            SIGNATURE_MEDIA_TYPE,
            BASE64.encode(self.svg.as_bytes())
        )
    }

    /// Recovers the image bytes from a stored data URL. Returns None when
    /// the value is not a base64 data URL (e.g. legacy plain text).
    pub fn decode_data_url(url: &str) -> Option<Vec<u8>> {
        let (_, payload) = url.split_once(";base64,")?;
        BASE64.decode(payload).ok()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing drawn yet. The pad stays open and the caller should show
    /// an inline warning.
    Empty,
    Saved(SignatureArtifact),
}

/// Freehand signature surface. Accumulates strokes; `save` serializes them
/// into an image only when something has actually been drawn.
#[derive(Debug, Default, Clone)]
pub struct SignaturePad {
    strokes: Vec<Stroke>,
    closed: bool,
}

impl SignaturePad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        !self.closed
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.iter().all(|s| s.is_empty())
    }

    pub fn add_stroke(&mut self, stroke: Stroke) {
        if self.closed || stroke.is_empty() {
            return;
        }
        self.strokes.push(stroke);
    }

    /// Resets the surface to blank. The pad stays open.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Serializes the drawing to an image artifact and closes the pad.
    /// A blank surface is a no-op that leaves the pad open.
    pub fn save(&mut self) -> SaveOutcome {
        if self.is_empty() {
            return SaveOutcome::Empty;
        }
        let svg = render_svg(&self.strokes);
        self.closed = true;
        SaveOutcome::Saved(SignatureArtifact { svg })
    }
}

// ---------------------------------------------------------------------------
// SVG serialization
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename = "svg")]
struct SvgDocument {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "@width")]
    width: u32,
    #[serde(rename = "@height")]
    height: u32,
    #[serde(rename = "@viewBox")]
    view_box: String,
    #[serde(rename = "path")]
    paths: Vec<SvgPath>,
}

#[derive(Serialize)]
struct SvgPath {
    #[serde(rename = "@d")]
    d: String,
    #[serde(rename = "@fill")]
    fill: &'static str,
    #[serde(rename = "@stroke")]
    stroke: &'static str,
    #[serde(rename = "@stroke-width")]
    stroke_width: &'static str,
    #[serde(rename = "@stroke-linecap")]
    stroke_linecap: &'static str,
}

fn path_data(stroke: &Stroke) -> String {
    let mut d = String::new();
    for (i, (x, y)) in stroke.iter().enumerate() {
        let op = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            d.push(' ');
        }
        d.push_str(&format!("{} {} {}", op, x, y));
    }
    // A single tap still leaves a visible dot.
    if stroke.len() == 1 {
        let (x, y) = stroke[0];
        d.push_str(&format!(" L {} {}", x + 0.5, y));
    }
    d
}

fn render_svg(strokes: &[Stroke]) -> String {
    let doc = SvgDocument {
        xmlns: "http://www.w3.org/2000/svg",
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        view_box: format!("0 0 {} {}", CANVAS_WIDTH, CANVAS_HEIGHT),
        paths: strokes
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| SvgPath {
                d: path_data(s),
                fill: "none",
                stroke: "black",
                stroke_width: "2",
                stroke_linecap: "round",
            })
            .collect(),
    };

    // Serialization over plain structs cannot fail here; fall back to an
    // empty image rather than panicking if it ever does.
    quick_xml::se::to_string(&doc).unwrap_or_else(|_| {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\"/>",
            CANVAS_WIDTH, CANVAS_HEIGHT
        )
    })
}
