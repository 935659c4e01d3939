use super::entitlement::Entitlement;
use crate::config::{ConfigRecord, DocType};
use crate::error::{Error, Result};
use crate::markdown::page::PageRenderer;
use crate::templates::generate;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ExportFormat {
    Markdown,
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Html => "text/html",
        }
    }
}

/// A file ready to be handed to the host, e.g. written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub mime: &'static str,
    pub payload: String,
}

pub fn file_name(doc: DocType, format: ExportFormat) -> String {
    format!("{}.{}", doc.file_stem(), format.extension())
}

/// Builds export artifacts, reusing one page template for HTML.
pub struct Exporter {
    pages: PageRenderer,
}

impl Exporter {
    pub fn new() -> Result<Self> {
        Ok(Self { pages: PageRenderer::new()? })
    }

    /// Packages an already generated document.
    pub fn export(&self, doc: DocType, markdown: &str, format: ExportFormat) -> Result<Artifact> {
        let payload = match format {
            ExportFormat::Markdown => markdown.to_string(),
            ExportFormat::Html => self.pages.render(doc.label(), markdown)?,
        };
        Ok(Artifact { file_name: file_name(doc, format), mime: format.mime(), payload })
    }
}

/// Generates every document as Markdown. Needs premium.
pub fn export_all(config: &ConfigRecord, entitlement: Entitlement) -> Result<Vec<Artifact>> {
    if !entitlement.premium {
        return Err(Error::PremiumRequired { document: "All documents".to_string() });
    }
    let exporter = Exporter::new()?;
    DocType::ALL
        .into_iter()
        .map(|doc| exporter.export(doc, &generate(doc, config), ExportFormat::Markdown))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_all_lists_five_markdown_files() {
        let artifacts = export_all(&ConfigRecord::default(), Entitlement::PREMIUM).unwrap();
        let names: Vec<&str> = artifacts.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "privacy-policy.md",
                "terms-of-service.md",
                "cookie-policy.md",
                "disclaimer.md",
                "refund-policy.md"
            ]
        );
        assert!(artifacts.iter().all(|a| a.mime == "text/markdown"));
    }

    #[test]
    fn export_all_is_premium_only() {
        let err = export_all(&ConfigRecord::default(), Entitlement::FREE).unwrap_err();
        assert!(matches!(err, Error::PremiumRequired { .. }));
    }

    #[test]
    fn html_export_wraps_page() {
        let exporter = Exporter::new().unwrap();
        let artifact = exporter.export(DocType::Disclaimer, "# Disclaimer\n", ExportFormat::Html).unwrap();
        assert_eq!(artifact.file_name, "disclaimer.html");
        assert_eq!(artifact.mime, "text/html");
        assert!(artifact.payload.contains("<title>Disclaimer</title>"));
        assert!(artifact.payload.contains("<h1>Disclaimer</h1>"));
    }
}
