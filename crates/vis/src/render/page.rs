use crate::error::Result;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::escape_html;
use crate::view::ViewKind;

const PLOTLY_SCRIPT: &str =
    r#"<script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>"#;

pub(crate) const STYLESHEET: &str = r#"
body { font-family: sans-serif; margin: 0 2em 2em 2em; color: #222; }
nav { padding: 1em 0; border-bottom: 1px solid #ccc; margin-bottom: 1em; }
nav a { margin-right: 1.5em; color: #2a6f61; text-decoration: none; }
nav a.current { font-weight: bold; }
.parameters { color: #555; font-size: 0.9em; }
.movie-grid { display: flex; flex-wrap: wrap; gap: 20px; }
.movie { width: 420px; border: 1px solid #ccc; border-radius: 5px; padding: 10px; }
.movie img { max-width: 120px; float: left; margin-right: 10px; }
.movie-title { font-weight: bold; font-size: 1.1em; margin-bottom: 0.5em; }
.movie-info { display: flex; gap: 20px; clear: both; }
.movie-info p { margin: 0.3em 0; }
details { margin: 0.3em 0; }
"#;

/// A complete HTML document for one view: head, navigation and content.
pub(crate) struct Page<'a, C> {
    kind: ViewKind,
    content: &'a C,
}

impl<'a, C> Page<'a, C> {
    pub(crate) fn new(kind: ViewKind, content: &'a C) -> Page<'a, C> {
        Self { kind, content }
    }
}

impl<C: Render> Render for Page<'_, C> {
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream,
    {
        let title = escape_html(self.kind.title());

        output.write("<!DOCTYPE html>")?;
        output.write(r#"<html lang="en">"#)?;
        output.write(&format!(
            r#"<head>
                 <meta charset="utf-8" />
                 <title>{title}</title>
                 {PLOTLY_SCRIPT}
                 <style>{STYLESHEET}</style>
               </head>
            "#
        ))?;
        output.write("<body>")?;

        output.write(r#"<nav><a href="../index.html">Overview</a>"#)?;
        for kind in ViewKind::ALL {
            let class = if kind == self.kind { r#" class="current""# } else { "" };
            output.write(&format!(
                r#"<a href="{file}"{class}>{name}</a>"#,
                file = kind.file_name(),
                name = escape_html(kind.title()),
            ))?;
        }
        output.write("</nav>")?;

        output.write(&format!("<h1>{title}</h1>"))?;
        self.content.render(output)?;

        output.write("</body>")?;
        output.write("</html>")
    }
}
