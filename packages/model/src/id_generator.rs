use crate::document::ReportDocument;

/// Sequential id generator with a fixed prefix.
///
/// Ids look like `component-7`. Uniqueness is per document; resuming an
/// editing session seeds the counter past every id already present so
/// loaded documents never collide with fresh ones.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: String,
    count: u64,
}

impl IdGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            count: 0,
        }
    }

    /// Generator whose counter starts past every `component-<n>` id
    /// already present in `doc`.
    pub fn for_document(doc: &ReportDocument) -> Self {
        let mut gen = Self::new("component");
        for component in &doc.components {
            if let Some(n) = gen.parse_suffix(&component.id) {
                gen.count = gen.count.max(n);
            }
        }
        gen
    }

    /// Generate the next id.
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.prefix, self.count)
    }

    fn parse_suffix(&self, id: &str) -> Option<u64> {
        id.strip_prefix(self.prefix.as_str())?
            .strip_prefix('-')?
            .parse()
            .ok()
    }
}
