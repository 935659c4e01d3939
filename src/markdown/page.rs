use crate::error::Result;
use minijinja::{context, Environment, Value};

const PAGE_TEMPLATE_NAME: &str = "page.html";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{{ title }}</title>
<style>
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 800px; margin: 40px auto; padding: 0 20px; color: #1f2937; line-height: 1.7; }
h1 { font-size: 28px; margin-bottom: 8px; }
h2 { font-size: 22px; margin: 32px 0 12px; color: #1e40af; }
h3 { font-size: 18px; margin: 20px 0 8px; }
p { margin-bottom: 12px; }
ul { margin-bottom: 12px; padding-left: 24px; }
li { margin-bottom: 4px; }
table { width: 100%; border-collapse: collapse; margin: 16px 0; }
th, td { padding: 10px 14px; border: 1px solid #e5e7eb; text-align: left; font-size: 14px; }
th { background: #f3f4f6; font-weight: 600; }
strong { font-weight: 600; }
a { color: #2563eb; }
</style>
</head>
<body>
{{ body }}
</body>
</html>
"#;

/// Wraps rendered documents in a standalone HTML page.
///
/// The template is registered as `page.html`, so MiniJinja auto-escapes the
/// title. The body is marked safe and inserted as is.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders `markdown` and embeds it in the page titled `title`.
    pub fn render(&self, title: &str, markdown: &str) -> Result<String> {
        let body = super::render(markdown);
        let page = self.env.get_template(PAGE_TEMPLATE_NAME)?;
        Ok(page.render(context! {
            title => title,
            body => Value::from_safe_string(body),
        })?)
    }
}

/// One-shot helper around [`PageRenderer`].
pub fn render_page(title: &str, markdown: &str) -> Result<String> {
    PageRenderer::new()?.render(title, markdown)
}
