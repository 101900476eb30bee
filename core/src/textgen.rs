//! Text-generation placeholder.
//!
//! Not part of the ETL path. The trait is the seam: a real generation
//! backend can replace the stub without touching import or storage code.

/// The single capability a generation backend must provide.
pub trait TextGenerator {
    fn produce_text(&self, input: &str) -> String;
}

/// Canned-output stand-in for a real model.
#[derive(Debug, Clone)]
pub struct StubTextModel {
    pub model_name: String,
    pub version: String,
}

impl StubTextModel {
    pub fn new(model_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            version: version.into(),
        }
    }

    /// One-line identification, e.g. for a dialog banner.
    pub fn describe(&self) -> String {
        format!("{} version {}", self.model_name, self.version)
    }
}

impl TextGenerator for StubTextModel {
    fn produce_text(&self, input: &str) -> String {
        format!("Generated output based on: {input}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_echoes_input_in_canned_frame() {
        let model = StubTextModel::new("NSC-ABC", "1.0");
        assert_eq!(model.describe(), "NSC-ABC version 1.0");
        assert_eq!(
            model.produce_text("hello"),
            "Generated output based on: hello"
        );
    }
}
