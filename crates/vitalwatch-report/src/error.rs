use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("payload decoding failed: {0}")]
    PayloadDecode(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ReportError {
    fn from(e: tera::Error) -> Self {
        ReportError::TemplateRender(e.to_string())
    }
}
