use crate::finalize::SealedDocument;
use crate::templates::*;
use crate::theme::RenderOptions;
use crate::{DocumentTemplate, PDFError};

/// Renders payloads into sealed PDFs with a fixed set of [RenderOptions].
///
/// An engine only holds its options, so a single engine can be shared
/// between threads and used for any number of concurrent renders.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: RenderOptions,
}

impl Engine {
    pub fn new(options: RenderOptions) -> Engine {
        Engine { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn certificate(&self, payload: &CertificatePayload) -> DocumentTemplate {
        certificate_template(payload, &self.options)
    }

    pub fn progress_report(&self, payload: &ProgressReportPayload) -> DocumentTemplate {
        progress_report_template(payload, &self.options)
    }

    pub fn resource_guide(&self, payload: &ResourceGuidePayload) -> DocumentTemplate {
        resource_guide_template(payload, &self.options)
    }

    pub fn render_certificate(
        &self,
        payload: &CertificatePayload,
    ) -> Result<SealedDocument, PDFError> {
        self.certificate(payload).render()
    }

    pub fn render_progress_report(
        &self,
        payload: &ProgressReportPayload,
    ) -> Result<SealedDocument, PDFError> {
        self.progress_report(payload).render()
    }

    pub fn render_resource_guide(
        &self,
        payload: &ResourceGuidePayload,
    ) -> Result<SealedDocument, PDFError> {
        self.resource_guide(payload).render()
    }
}

/// Render a certificate of completion with the default options
pub fn render_certificate(payload: &CertificatePayload) -> Result<SealedDocument, PDFError> {
    Engine::default().render_certificate(payload)
}

/// Render a progress report with the default options
pub fn render_progress_report(
    payload: &ProgressReportPayload,
) -> Result<SealedDocument, PDFError> {
    Engine::default().render_progress_report(payload)
}

/// Render a resource guide with the default options
pub fn render_resource_guide(
    payload: &ResourceGuidePayload,
) -> Result<SealedDocument, PDFError> {
    Engine::default().render_resource_guide(payload)
}
