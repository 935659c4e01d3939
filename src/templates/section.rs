use crate::config::ConfigRecord;

/// Gate deciding whether a section is part of the document.
pub type Predicate = fn(&ConfigRecord) -> bool;

/// Produces the Markdown of one section, ending in a blank line.
pub type Builder = fn(&ConfigRecord) -> String;

/// A fixed-position block of a generated document.
#[derive(Clone, Copy)]
pub struct Section {
    pub name: &'static str,
    include: Option<Predicate>,
    build: Builder,
}

impl Section {
    /// A section present in every document of its type.
    pub const fn always(name: &'static str, build: Builder) -> Self {
        Self { name, include: None, build }
    }

    /// A section present only when `include` holds for the configuration.
    pub const fn when(name: &'static str, include: Predicate, build: Builder) -> Self {
        Self { name, include: Some(include), build }
    }

    pub fn applies(&self, config: &ConfigRecord) -> bool {
        self.include.map_or(true, |include| include(config))
    }

    pub fn render(&self, config: &ConfigRecord) -> String {
        (self.build)(config)
    }
}

impl std::fmt::Debug for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Section")
            .field("name", &self.name)
            .field("conditional", &self.include.is_some())
            .finish()
    }
}

/// Evaluates `sections` in order and concatenates the ones that apply.
///
/// The result always ends in exactly one newline.
pub fn assemble(sections: &[Section], config: &ConfigRecord) -> String {
    let mut doc = String::new();
    for section in sections {
        if section.applies(config) {
            doc.push_str(&section.render(config));
        } else {
            log::trace!("Skipping section '{}'", section.name);
        }
    }
    doc.truncate(doc.trim_end().len());
    doc.push('\n');
    doc
}
