use anyhow::Result;
use async_trait::async_trait;

use crate::models::SourceFile;

pub const GREETING_REPLY: &str = "Hello! I'm here to help you analyze your uploaded documents and media. What would you like to know?";
pub const PDF_REPLY: &str = "I can help you analyze PDF documents. I can extract text, summarize content, answer questions about the document, and more. Please upload a PDF file to get started.";
pub const IMAGE_REPLY: &str = "I can analyze images and describe their content. Upload an image and ask me questions about it, such as identifying objects, reading text, or describing scenes.";
pub const FALLBACK_REPLY: &str = "I'm analyzing your uploaded sources to provide you with an answer. Based on the content available in your workspace, I can help you understand, summarize, and extract information from your documents and media files.";

/// Produces the assistant reply for a user message. Implementations must be
/// total (always return a non-empty reply) and free of side effects on the
/// stores; the source list is context a retrieval-backed implementation may
/// use.
#[async_trait]
pub trait ChatResponder: Send + Sync + 'static {
    async fn respond(&self, message: &str, sources: &[SourceFile]) -> Result<String>;
}

/// Deterministic keyword matcher standing in for a retrieval-augmented
/// engine. The reply is a function of the lower-cased message text only.
#[derive(Default)]
pub struct KeywordResponder;

#[async_trait]
impl ChatResponder for KeywordResponder {
    async fn respond(&self, message: &str, _sources: &[SourceFile]) -> Result<String> {
        let lowered = message.to_lowercase();

        // Greeting keywords match whole words only; a bare substring test
        // would let "this" trigger the greeting via "hi".
        let greeted = lowered
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| word == "hello" || word == "hi");

        let reply = if greeted {
            GREETING_REPLY
        } else if lowered.contains("pdf") || lowered.contains("document") {
            PDF_REPLY
        } else if lowered.contains("image") || lowered.contains("picture") {
            IMAGE_REPLY
        } else {
            FALLBACK_REPLY
        };

        Ok(reply.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn reply(message: &str) -> String {
        KeywordResponder
            .respond(message, &[])
            .await
            .expect("keyword responder is total")
    }

    #[tokio::test]
    async fn greets_on_hello_or_hi_case_insensitively() {
        assert_eq!(reply("Hello there").await, GREETING_REPLY);
        assert_eq!(reply("HI!").await, GREETING_REPLY);
        assert_eq!(reply("well hi friend").await, GREETING_REPLY);
    }

    #[tokio::test]
    async fn hi_does_not_match_inside_other_words() {
        assert_eq!(reply("Tell me about this PDF").await, PDF_REPLY);
        assert_eq!(reply("which picture is this").await, IMAGE_REPLY);
    }

    #[tokio::test]
    async fn keyword_priority_is_greeting_pdf_image() {
        assert_eq!(reply("hello, summarize the pdf").await, GREETING_REPLY);
        assert_eq!(reply("a document with an image").await, PDF_REPLY);
        assert_eq!(reply("describe the picture").await, IMAGE_REPLY);
    }

    #[tokio::test]
    async fn falls_back_to_generic_reply() {
        assert_eq!(reply("xyz").await, FALLBACK_REPLY);
        assert!(!reply("xyz").await.is_empty());
    }
}
