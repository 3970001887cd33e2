// Turns one consultant's aggregated projects into a reminder email.
use crate::catalog::project_name;
use crate::config::EmailConfig;
use crate::error::Result;
use crate::locale::{localized_month, resolve_language, Language, UPLOAD_FORM_URL};
use crate::names::first_name;
use crate::types::{ConsultantAggregate, RenderedEmail};
use crate::util::{format_money, format_quantity};
use std::fmt::Write;

/// Render the subject and body for `consultant`.
///
/// The grand total is printed in the currency of the last project in the
/// body; mixed currencies across projects are not reconciled.
pub fn render_email(
    consultant: &str,
    projects: &ConsultantAggregate,
    month: &str,
    config: &EmailConfig,
) -> Result<RenderedEmail> {
    let language = resolve_language(consultant, &config.language_overrides);
    let labels = language.labels();
    let first = first_name(consultant);
    let month = localized_month(month, language);
    let year = config.year;

    let subject = format!("{} - Fees {} {} {}", config.company_name, month, year, first);

    let mut body = String::new();
    writeln!(body, "{}\n", subject)?;
    match language {
        Language::Es => {
            writeln!(body, "Hola {}, ¿cómo estás?\n", first)?;
            writeln!(
                body,
                "Te envío el detalle para la facturación de {} {}:\n",
                month, year
            )?;
        }
        Language::En => {
            writeln!(body, "Hi {}, how are you?\n", first)?;
            writeln!(
                body,
                "I hope you're doing well. Here are the details for {} {} invoicing:\n",
                month, year
            )?;
        }
    }

    let mut total = 0.0;
    let mut currency: &str = "";
    for (code, project) in projects {
        currency = &project.currency;
        writeln!(body, "{}", project_name(code).to_uppercase())?;
        writeln!(body, "{}: {}", labels.project, code)?;
        for bucket in project.activities.values() {
            writeln!(
                body,
                "- {}: {} {} @ {} {}/{}",
                bucket.activity,
                format_quantity(bucket.hours),
                labels.hours_unit,
                bucket.currency,
                format_quantity(bucket.rate),
                labels.rate_unit
            )?;
        }
        if config.include_ids {
            writeln!(body, "- IDs: {}", project.internal_ids.join(", "))?;
        }
        writeln!(
            body,
            "- Subtotal: {} {}\n",
            currency,
            format_money(project.total_cost)
        )?;
        total += project.total_cost;
    }

    let total_line = format!("{} {}", currency, format_money(total));
    writeln!(body, "{}: {}\n", labels.total, total_line)?;
    writeln!(body, "{}", labels.reminder_heading)?;
    writeln!(body, "- {}: {}", labels.upload_reminder, UPLOAD_FORM_URL)?;
    writeln!(body, "- {}\n", labels.codes_reminder)?;
    write!(body, "{}", labels.sign_off)?;

    Ok(RenderedEmail {
        consultant: consultant.to_string(),
        first_name: first.to_string(),
        subject,
        body,
        is_english: language.is_english(),
        language,
        project_count: projects.len(),
        total: total_line,
    })
}
