use std::f32::consts::PI;
use std::io::{BufWriter, Cursor};

use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Polygon, Rgb, TextMatrix,
};

use crate::error::ReportError;
use crate::styles::{PdfStyles, Rgb8};

/// Average glyph advance of the built-in Helvetica, as a fraction of the
/// font size. Used only for wrapping.
const GLYPH_WIDTH_RATIO: f32 = 0.5;
const PT_TO_MM: f32 = 0.352_778;
const SEAL_RADIUS_MM: f32 = 8.0;
const SEAL_SEGMENTS: usize = 36;
const WATERMARK_LOGO_MM: f32 = 60.0;
const TEXT_INSET_MM: f32 = 8.0;

/// One line of rendered template output.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// `# text`, printed in the header band.
    Title(String),
    /// `> text`, printed under the title.
    Subtitle(String),
    /// `**Label:** value`
    Field { label: String, value: String },
    /// `## text`
    Heading(String),
    /// `- text`
    Bullet(String),
    /// `---`; everything after it belongs to the footer.
    Rule,
    Paragraph(String),
}

/// Parse the markdown-ish subset emitted by the report template.
///
/// Blank lines are dropped.
pub fn parse_blocks(rendered: &str) -> Vec<Block> {
    rendered
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if let Some(text) = line.strip_prefix("## ") {
                Block::Heading(text.to_string())
            } else if let Some(text) = line.strip_prefix("# ") {
                Block::Title(text.to_string())
            } else if let Some(text) = line.strip_prefix("> ") {
                Block::Subtitle(text.to_string())
            } else if line.starts_with("- ") {
                Block::Bullet(line.to_string())
            } else if line == "---" {
                Block::Rule
            } else if let Some((label, value)) = parse_field(line) {
                Block::Field { label, value }
            } else {
                Block::Paragraph(line.to_string())
            }
        })
        .collect()
}

fn parse_field(line: &str) -> Option<(String, String)> {
    let rest = line.strip_prefix("**")?;
    let end = rest.find("**")?;
    let label = rest[..end].to_string();
    let value = rest[end + 2..].trim().to_string();
    Some((label, value))
}

/// Greedy word wrap on character count.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = current.chars().count() + word.chars().count() + 1;
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn color((r, g, b): Rgb8) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

fn point(x: f32, y: f32) -> (Point, bool) {
    (Point::new(Mm(x), Mm(y)), false)
}

fn pdf_err(context: &str) -> impl Fn(printpdf::Error) -> ReportError + '_ {
    move |e| ReportError::Pdf(format!("{context}: {e}"))
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Drawing state: the current page layer and the text cursor.
struct Canvas<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: Fonts,
    styles: &'a PdfStyles,
    /// Text cursor, millimetres from the page bottom.
    y: f32,
    pages: usize,
}

impl Canvas<'_> {
    fn card_left(&self) -> f32 {
        self.styles.card_margin_mm
    }

    fn card_width(&self) -> f32 {
        self.styles.page_width_mm - 2.0 * self.styles.card_margin_mm
    }

    fn card_top(&self) -> f32 {
        self.styles.page_height_mm - self.styles.card_margin_mm - 2.0
    }

    fn card_bottom(&self) -> f32 {
        self.styles.card_margin_mm + 2.0
    }

    fn footer_baseline(&self) -> f32 {
        self.card_bottom() + 10.0
    }

    /// Lowest baseline body content may use before spilling onto a new page.
    fn content_floor(&self) -> f32 {
        self.footer_baseline() + 12.0
    }

    fn text_left(&self) -> f32 {
        self.card_left() + TEXT_INSET_MM
    }

    fn wrap_width(&self, font_size: f32) -> usize {
        let usable = self.card_width() - 2.0 * TEXT_INSET_MM;
        (usable / (font_size * GLYPH_WIDTH_RATIO * PT_TO_MM)).floor() as usize
    }

    fn fill_rect(&self, x: f32, y: f32, w: f32, h: f32, fill: Rgb8) {
        self.layer.set_fill_color(color(fill));
        self.layer.add_polygon(Polygon {
            rings: vec![vec![
                point(x, y),
                point(x + w, y),
                point(x + w, y + h),
                point(x, y + h),
            ]],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn stroke_line(&self, from: (f32, f32), to: (f32, f32), stroke: Rgb8, thickness: f32) {
        self.layer.set_outline_color(color(stroke));
        self.layer.set_outline_thickness(thickness);
        self.layer.add_line(Line {
            points: vec![point(from.0, from.1), point(to.0, to.1)],
            is_closed: false,
        });
    }

    fn circle(&self, cx: f32, cy: f32, radius: f32, mode: PaintMode) {
        let ring = (0..SEAL_SEGMENTS)
            .map(|i| {
                let angle = 2.0 * PI * i as f32 / SEAL_SEGMENTS as f32;
                point(cx + radius * angle.cos(), cy + radius * angle.sin())
            })
            .collect();
        self.layer.add_polygon(Polygon {
            rings: vec![ring],
            mode,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn text(&self, text: &str, size: f32, x: f32, y: f32, bold: bool, fill: Rgb8) {
        let font = if bold { &self.fonts.bold } else { &self.fonts.regular };
        self.layer.set_fill_color(color(fill));
        self.layer.use_text(text, size, Mm(x), Mm(y), font);
    }

    fn draw_frame(&self) {
        let (left, bottom) = (self.card_left(), self.card_bottom());
        let (right, top) = (left + self.card_width(), self.card_top());

        self.layer.set_outline_color(color(self.styles.accent_color));
        self.layer.set_outline_thickness(1.2);
        self.layer.add_line(Line {
            points: vec![
                point(left, bottom),
                point(right, bottom),
                point(right, top),
                point(left, top),
            ],
            is_closed: true,
        });
    }

    /// The logo centred behind the content when one was supplied; otherwise
    /// the rotated watermark text.
    fn draw_watermark(&self, logo: Option<Image>) {
        let styles = self.styles;
        if let Some(image) = logo {
            let natural_mm = image.image.width.0 as f32 / 300.0 * 25.4;
            let scale = if natural_mm > 0.0 {
                WATERMARK_LOGO_MM / natural_mm
            } else {
                1.0
            };
            let natural_height_mm = image.image.height.0 as f32 / 300.0 * 25.4 * scale;
            let x = self.card_left() + (self.card_width() - WATERMARK_LOGO_MM) / 2.0;
            let y = (self.card_top() + self.card_bottom() - natural_height_mm) / 2.0;
            image.add_to_layer(
                self.layer.clone(),
                ImageTransform {
                    translate_x: Some(Mm(x)),
                    translate_y: Some(Mm(y)),
                    scale_x: Some(scale),
                    scale_y: Some(scale),
                    dpi: Some(300.0),
                    ..Default::default()
                },
            );
            return;
        }

        if styles.watermark_text.is_empty() {
            return;
        }
        let x = self.card_left() + 24.0;
        let y = self.card_top() - 150.0;

        self.layer.save_graphics_state();
        self.layer.set_fill_color(color(styles.watermark_color));
        self.layer.begin_text_section();
        self.layer.set_font(&self.fonts.bold, styles.watermark_size);
        self.layer.set_text_matrix(TextMatrix::TranslateRotate(
            Mm(x).into(),
            Mm(y).into(),
            styles.watermark_angle,
        ));
        self.layer.write_text(styles.watermark_text.as_str(), &self.fonts.bold);
        self.layer.end_text_section();
        self.layer.restore_graphics_state();
    }

    fn draw_header(&self, title: &str, subtitle: Option<&str>) {
        let styles = self.styles;
        let band_bottom = self.card_top() - styles.header_height_mm;
        let white = (255, 255, 255);

        self.fill_rect(
            self.card_left(),
            band_bottom,
            self.card_width(),
            styles.header_height_mm,
            styles.header_color,
        );
        self.text(title, styles.title_size, self.text_left(), self.card_top() - 15.0, true, white);
        if let Some(subtitle) = subtitle {
            self.text(
                subtitle,
                styles.subtitle_size,
                self.text_left(),
                self.card_top() - 20.0,
                false,
                white,
            );
        }

        let seal_x = self.card_left() + self.card_width() - 20.0;
        let seal_y = band_bottom + styles.header_height_mm / 2.0;
        self.layer.set_fill_color(color(styles.accent_color));
        self.circle(seal_x, seal_y, SEAL_RADIUS_MM, PaintMode::Fill);
        self.layer.set_outline_color(color(styles.seal_ring_color));
        self.layer.set_outline_thickness(0.8);
        self.circle(seal_x, seal_y, SEAL_RADIUS_MM, PaintMode::Stroke);
        self.text(&styles.seal_text, 7.0, seal_x - 2.5, seal_y - 1.0, true, white);
    }

    /// Start a continuation page when the cursor would cross the footer.
    fn ensure_room(&mut self, needed_mm: f32) {
        if self.y - needed_mm >= self.content_floor() {
            return;
        }
        let (page, layer) = self.doc.add_page(
            Mm(self.styles.page_width_mm),
            Mm(self.styles.page_height_mm),
            "Layer 1",
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.pages += 1;
        self.draw_frame();
        self.y = self.card_top() - 12.0;
    }

    fn field(&mut self, label: &str, value: &str) {
        let size = self.styles.field_size;
        let label_width = (label.chars().count() + 1) as f32 * size * GLYPH_WIDTH_RATIO * PT_TO_MM;
        let width = self.wrap_width(size).saturating_sub(label.chars().count() + 1).max(10);
        let lines = wrap_text(value, width);

        self.ensure_room(self.styles.field_gap_mm * lines.len() as f32);
        let text_color = self.styles.text_color;
        self.text(label, size, self.text_left(), self.y, true, text_color);
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                self.y -= self.styles.body_gap_mm;
            }
            self.text(line, size, self.text_left() + label_width, self.y, false, text_color);
        }
        self.y -= self.styles.field_gap_mm;
    }

    fn heading(&mut self, text: &str) {
        self.ensure_room(14.0);
        self.y -= 2.0;
        let text_color = self.styles.text_color;
        self.text(text, self.styles.heading_size, self.text_left(), self.y, true, text_color);
        self.y -= 6.0;
    }

    fn body(&mut self, text: &str) {
        let size = self.styles.body_size;
        let text_color = self.styles.text_color;
        for line in wrap_text(text, self.wrap_width(size)) {
            self.ensure_room(self.styles.body_gap_mm);
            self.text(&line, size, self.text_left(), self.y, false, text_color);
            self.y -= self.styles.body_gap_mm;
        }
        self.y -= 1.0;
    }

    fn footer(&self, lines: &[String]) {
        let styles = self.styles;
        let baseline = self.footer_baseline();
        let right_edge = self.card_left() + self.card_width() - TEXT_INSET_MM;

        self.stroke_line(
            (self.text_left(), baseline + 6.0),
            (right_edge, baseline + 6.0),
            styles.rule_color,
            0.3,
        );
        for (i, line) in lines.iter().take(2).enumerate() {
            let x = if i == 0 {
                self.text_left()
            } else {
                self.card_left() + self.card_width() - 62.0
            };
            self.text(line, styles.footer_size, x, baseline, false, styles.footer_text_color);
        }
    }
}

fn decode_logo(bytes: &[u8]) -> Option<Image> {
    let decoder = match PngDecoder::new(Cursor::new(bytes)) {
        Ok(decoder) => decoder,
        Err(e) => {
            tracing::warn!(error = %e, "logo is not a readable PNG, using the text watermark");
            return None;
        }
    };
    match Image::try_from(decoder) {
        Ok(image) => Some(image),
        Err(e) => {
            tracing::warn!(error = %e, "logo could not be embedded, using the text watermark");
            None
        }
    }
}

/// Generate the PDF report card from rendered template output.
///
/// The `rendered` content uses a small line syntax (see [`Block`]). The
/// optional `logo` is a PNG drawn as the page watermark; when it is missing
/// or cannot be decoded the text watermark is drawn instead and generation
/// still succeeds.
pub fn generate_pdf(
    rendered: &str,
    styles: &PdfStyles,
    logo: Option<&[u8]>,
) -> Result<Vec<u8>, ReportError> {
    let blocks = parse_blocks(rendered);

    let title = blocks
        .iter()
        .find_map(|b| match b {
            Block::Title(t) => Some(t.as_str()),
            _ => None,
        })
        .unwrap_or_default();
    let subtitle = blocks.iter().find_map(|b| match b {
        Block::Subtitle(t) => Some(t.as_str()),
        _ => None,
    });

    let (doc, page, layer) = PdfDocument::new(
        title,
        Mm(styles.page_width_mm),
        Mm(styles.page_height_mm),
        "Layer 1",
    );
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_err("font error"))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_err("font error"))?,
    };

    let mut canvas = Canvas {
        layer: doc.get_page(page).get_layer(layer),
        doc: &doc,
        fonts,
        styles,
        y: 0.0,
        pages: 1,
    };
    canvas.y = canvas.card_top() - styles.header_height_mm - 10.0;

    canvas.draw_frame();
    canvas.draw_watermark(logo.and_then(decode_logo));
    canvas.draw_header(title, subtitle);

    let mut footer_lines = Vec::new();
    let mut in_footer = false;
    for block in &blocks {
        match block {
            Block::Title(_) | Block::Subtitle(_) => {}
            Block::Rule => in_footer = true,
            Block::Paragraph(text) if in_footer => footer_lines.push(text.clone()),
            Block::Field { label, value } => canvas.field(label, value),
            Block::Heading(text) => canvas.heading(text),
            Block::Bullet(text) | Block::Paragraph(text) => canvas.body(text),
        }
    }
    canvas.footer(&footer_lines);

    tracing::debug!(pages = canvas.pages, blocks = blocks.len(), "report card rendered");

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf).map_err(pdf_err("save error"))?;
    buf.into_inner()
        .map_err(|e| ReportError::Pdf(format!("buffer error: {e}")))
}
