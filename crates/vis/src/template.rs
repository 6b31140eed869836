use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::error::Result;

pub(crate) const INDEX_TEMPLATE: &str = "index";
pub(crate) const COLLECTION_TEMPLATE: &str = "collection";

/// The page templates of the report, registered once.
pub(crate) struct TemplateEngine {
    templates: TinyTemplate<'static>,
}

impl TemplateEngine {
    pub(crate) fn new() -> Result<TemplateEngine> {
        let mut templates = TinyTemplate::new();
        templates.add_template(INDEX_TEMPLATE, include_str!("./template/index.html.tt"))?;
        templates.add_template(
            COLLECTION_TEMPLATE,
            include_str!("./template/collection.html.tt"),
        )?;

        Ok(Self { templates })
    }

    pub(crate) fn render<C>(&self, name: &str, context: &C) -> Result<String>
    where
        C: Serialize,
    {
        let text = self.templates.render(name, context)?;
        Ok(text)
    }
}
