use serde::{Deserialize, Serialize};

/// An sRGB colour as 0–255 channels.
pub type Rgb8 = (u8, u8, u8);

/// Layout and branding for the PDF report card.
///
/// All lengths are millimetres, all font sizes points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfStyles {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    /// Inset of the card frame from the page edge.
    pub card_margin_mm: f32,
    pub header_height_mm: f32,

    pub title_size: f32,
    pub subtitle_size: f32,
    pub field_size: f32,
    pub heading_size: f32,
    pub body_size: f32,
    pub footer_size: f32,
    pub watermark_size: f32,

    /// Vertical distance between the labelled fields.
    pub field_gap_mm: f32,
    /// Vertical distance between wrapped body lines.
    pub body_gap_mm: f32,

    /// Shown in the footer as "Generated by ...".
    pub issuer: String,
    /// Two or three letters printed inside the seal.
    pub seal_text: String,
    pub watermark_text: String,
    /// Degrees, counter-clockwise.
    pub watermark_angle: f32,

    pub header_color: Rgb8,
    pub accent_color: Rgb8,
    pub seal_ring_color: Rgb8,
    pub watermark_color: Rgb8,
    pub rule_color: Rgb8,
    pub text_color: Rgb8,
    pub footer_text_color: Rgb8,
}

impl Default for PdfStyles {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            card_margin_mm: 10.0,
            header_height_mm: 24.0,
            title_size: 16.0,
            subtitle_size: 9.0,
            field_size: 11.0,
            heading_size: 12.0,
            body_size: 10.0,
            footer_size: 11.0,
            watermark_size: 34.0,
            field_gap_mm: 8.0,
            body_gap_mm: 5.0,
            issuer: "VitalWatch".to_string(),
            seal_text: "VW".to_string(),
            watermark_text: "VITALWATCH".to_string(),
            watermark_angle: 28.0,
            header_color: (15, 23, 42),
            accent_color: (37, 99, 235),
            seal_ring_color: (191, 219, 254),
            watermark_color: (214, 228, 245),
            rule_color: (203, 213, 225),
            text_color: (15, 23, 42),
            footer_text_color: (30, 41, 59),
        }
    }
}
