use serde::Serialize;
use tera::{Context, Tera};

use crate::card::ReportCard;
use crate::error::ReportError;

pub const REPORT_TEMPLATE_NAME: &str = "report-card.md";

/// Built-in report-card layout.
///
/// Uses the line syntax understood by [`crate::pdf::generate_pdf`].
pub const REPORT_TEMPLATE: &str = r#"# HEALTH MONITORING CERTIFICATE
> AI Health Summary & Risk Evaluation Card

**Patient Name:** {{ patient_name }}
**Age Profile:** {{ age_label }}
**Health Level:** {{ health_level }}
**Health Score:** {{ health_score }}
**Health Badge:** {{ health_badge }}
**Risks:** {{ risks }}
**Detected Conditions:** {{ conditions }}
**Doctor Review:** {{ doctor_review }}

## Health Reports
{{ health_reports }}

## Advices
{% if advices | length > 0 %}{% for advice in advices %}- {{ advice }}
{% endfor %}{% else %}- No advice available
{% endif %}
---
Generated by {{ issuer }}
Generated on: {{ generated_on }}
"#;

/// Render any serializable value through a Tera template.
///
/// The value's fields become the template context variables.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    value: &T,
) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(value)?;
    let context =
        Context::from_value(value).map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    Ok(tera.render(template_name, &context)?)
}

/// Render a report card with the built-in template.
pub fn render_report_card(card: &ReportCard, issuer: &str) -> Result<String, ReportError> {
    #[derive(Serialize)]
    struct CardContext<'a> {
        #[serde(flatten)]
        card: &'a ReportCard,
        issuer: &'a str,
    }

    render_template(
        REPORT_TEMPLATE_NAME,
        REPORT_TEMPLATE,
        &CardContext { card, issuer },
    )
}
