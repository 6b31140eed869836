//! Writing views as HTML onto an output stream.

pub(crate) mod output;
mod page;

use crate::error::Result;

pub(crate) use crate::render::page::Page;
pub(crate) use crate::render::page::STYLESHEET;

/// A sink the rendered HTML is written to.
pub trait OutputStream {
    /// Appends `data` to the output.
    fn write(&mut self, data: &str) -> Result<()>;
}

impl OutputStream for String {
    fn write(&mut self, data: &str) -> Result<()> {
        self.push_str(data);
        Ok(())
    }
}

/// An element that knows how to write itself as HTML.
pub trait Render {
    /// Writes the element onto `output`.
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream;
}

/// Escapes text for use in HTML element content and attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    tinytemplate::escape(text, &mut escaped);
    escaped
}

/// Serializes `value` as JSON that is safe to embed in a `<script>` element.
pub(crate) fn script_json<T>(value: &T) -> Result<String>
where
    T: serde::Serialize + ?Sized,
{
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_markup() {
        assert_eq!(
            "Tom &amp; Jerry &lt;3",
            escape_html("Tom & Jerry <3")
        );
    }

    #[test]
    fn script_json_cannot_close_the_script() {
        let json = script_json(&["</script><script>alert(1)"]).unwrap();

        assert_eq!(r#"["<\/script><script>alert(1)"]"#, json);
    }
}
