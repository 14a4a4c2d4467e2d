//! SSML markup for phonetic transcriptions.
//!
//! Each phonetic word becomes one empty `<phoneme>` element whose `ph`
//! attribute carries the transcription, wrapped in a fixed header and footer.

use derive_builder::Builder;

pub const DEFAULT_HEADER: &str = "<speak><!--USE_LUCID-->";
pub const DEFAULT_FOOTER: &str = "</speak>";
pub const DEFAULT_ALPHABET: &str = "ipa";

/// Header, footer and phoneme alphabet name for rendered SSML.
///
/// ```rust
/// use coptic_ipa::ssml::SsmlTemplateBuilder;
///
/// let template = SsmlTemplateBuilder::default()
///     .header("<speak>")
///     .build()?;
/// assert_eq!(
///     template.render(["peɪ"]),
///     r#"<speak><phoneme alphabet="ipa" ph="peɪ"></phoneme></speak>"#
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), default)]
pub struct SsmlTemplate {
    pub header: String,
    pub footer: String,
    /// Value of each `<phoneme>`'s `alphabet` attribute.
    pub alphabet: String,
}

impl Default for SsmlTemplate {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
            alphabet: DEFAULT_ALPHABET.to_string(),
        }
    }
}

impl SsmlTemplate {
    /// Render phonetic words, in order, into one SSML document.
    pub fn render<I, S>(&self, words: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alphabet = escape_attribute(&self.alphabet);
        let mut out = self.header.clone();
        for word in words {
            out.push_str(&format!(
                "<phoneme alphabet=\"{alphabet}\" ph=\"{}\"></phoneme>",
                escape_attribute(word.as_ref())
            ));
        }
        out.push_str(&self.footer);
        out
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{SsmlTemplate, SsmlTemplateBuilder};

    #[test]
    fn renders_one_tag_per_word() {
        let ssml = SsmlTemplate::default().render(["fnuːtiː", "peɪ"]);
        assert_eq!(
            ssml,
            "<speak><!--USE_LUCID-->\
             <phoneme alphabet=\"ipa\" ph=\"fnuːtiː\"></phoneme>\
             <phoneme alphabet=\"ipa\" ph=\"peɪ\"></phoneme>\
             </speak>"
        );
    }

    #[test]
    fn renders_empty_word_list() {
        let words: [&str; 0] = [];
        assert_eq!(
            SsmlTemplate::default().render(words),
            "<speak><!--USE_LUCID--></speak>"
        );
    }

    #[test]
    fn escapes_attribute_values() {
        let template = SsmlTemplateBuilder::default()
            .header("<s>")
            .footer("</s>")
            .alphabet("x-sampa")
            .build()
            .unwrap();
        assert_eq!(
            template.render(["a\"b&"]),
            "<s><phoneme alphabet=\"x-sampa\" ph=\"a&quot;b&amp;\"></phoneme></s>"
        );
    }

    #[test]
    fn builder_defaults_unset_fields() {
        let template = SsmlTemplateBuilder::default().footer("</x>").build().unwrap();
        assert_eq!(template.header, super::DEFAULT_HEADER);
        assert_eq!(template.alphabet, "ipa");
        assert_eq!(template.footer, "</x>");
    }
}
