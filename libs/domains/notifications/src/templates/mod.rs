//! Email template rendering engine.
//!
//! This module provides Handlebars-based template rendering for emails.
//! HTML templates use `{{ }}` so every interpolated field is HTML-escaped.
//! Plain-text templates use `{{{ }}}` and keep the visitor's text verbatim.

use crate::error::{NotificationError, NotificationResult};
use crate::models::InquiryNotification;
use handlebars::Handlebars;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

const INQUIRY_HTML: &str = "inquiry_html";
const INQUIRY_TEXT: &str = "inquiry_text";

/// Rendered email content.
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    /// HTML body content.
    pub html: String,
    /// Plain text body content.
    pub text: String,
    /// Email subject line.
    pub subject: String,
}

/// Template engine for rendering email templates.
#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Arc<Handlebars<'static>>,
}

impl TemplateEngine {
    /// Create a new template engine with all templates registered.
    pub fn new() -> NotificationResult<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);

        handlebars
            .register_template_string(INQUIRY_HTML, INQUIRY_HTML_TEMPLATE)
            .map_err(|e| {
                NotificationError::TemplateError(format!("Failed to register {INQUIRY_HTML}: {e}"))
            })?;
        handlebars
            .register_template_string(INQUIRY_TEXT, INQUIRY_TEXT_TEMPLATE)
            .map_err(|e| {
                NotificationError::TemplateError(format!("Failed to register {INQUIRY_TEXT}: {e}"))
            })?;

        Ok(Self {
            handlebars: Arc::new(handlebars),
        })
    }

    /// Render a template with the given data.
    fn render<T: Serialize>(&self, template_name: &str, data: &T) -> NotificationResult<String> {
        Ok(self.handlebars.render(template_name, data)?)
    }

    /// Render the owner notification for a new inquiry.
    pub fn render_inquiry(&self, data: &InquiryNotification) -> NotificationResult<RenderedEmail> {
        debug!(name = %data.name, "Rendering inquiry email");

        Ok(RenderedEmail {
            html: self.render(INQUIRY_HTML, data)?,
            text: self.render(INQUIRY_TEXT, data)?,
            subject: format!("📩 Pesan Baru: {}", data.name),
        })
    }
}

const INQUIRY_HTML_TEMPLATE: &str = r#"<h3>Pesan Baru dari Website Pasokari</h3>
<p><strong>Nama:</strong> {{name}}</p>
<p><strong>Email:</strong> {{email}}</p>
<p><strong>Telepon:</strong> {{phone}}</p>
<hr/>
<p><strong>Pesan:</strong></p>
<blockquote style="background:#f9f9f9; padding:15px; border-left: 4px solid #00a859;">
  {{message}}
</blockquote>
"#;

const INQUIRY_TEXT_TEMPLATE: &str = r#"Pesan Baru dari Website Pasokari

Nama: {{{name}}}
Email: {{{email}}}
Telepon: {{{phone}}}

Pesan:
{{{message}}}
"#;
