//! AI review features: a qualitative resume review and a one-bullet rewrite.
//!
//! Both are pass-through calls to the text-generation capability with fixed
//! prompt templates. The matching engine never depends on this module, and
//! this module never inspects engine output.

use crate::analysis::prompts::{
    BULLET_PROMPT_TEMPLATE, BULLET_SYSTEM, REVIEW_PROMPT_TEMPLATE, REVIEW_SYSTEM,
};
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

/// Generates a qualitative review of a resume against a job description.
pub async fn review_resume(
    resume_text: &str,
    job_text: &str,
    generator: &dyn TextGenerator,
) -> Result<String, AppError> {
    let prompt = REVIEW_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_text}", job_text);

    generator
        .generate(&prompt, REVIEW_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("resume review failed: {e}")))
}

/// Rewrites a single resume bullet for impact.
pub async fn improve_bullet(
    bullet_text: &str,
    generator: &dyn TextGenerator,
) -> Result<String, AppError> {
    let prompt = BULLET_PROMPT_TEMPLATE.replace("{bullet_text}", bullet_text);

    generator
        .generate(&prompt, BULLET_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("bullet rewrite failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every (prompt, system) pair and replies with a canned string.
    struct ScriptedGenerator {
        reply: &'static str,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl ScriptedGenerator {
        fn new(reply: &'static str) -> Self {
            Self {
                reply,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn last_call(&self) -> (String, String) {
            self.calls.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), system.to_string()));
            Ok(self.reply.to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    #[tokio::test]
    async fn test_review_substitutes_both_texts() {
        let generator = ScriptedGenerator::new("looks solid");
        let review = review_resume("my python resume", "a rust job", &generator)
            .await
            .unwrap();

        assert_eq!(review, "looks solid");
        let (prompt, system) = generator.last_call();
        assert!(prompt.contains("my python resume"));
        assert!(prompt.contains("a rust job"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{job_text}"));
        assert_eq!(system, REVIEW_SYSTEM);
    }

    #[tokio::test]
    async fn test_improve_bullet_substitutes_bullet() {
        let generator = ScriptedGenerator::new("Shipped X, cutting Y by 40%");
        let improved = improve_bullet("worked on stuff", &generator).await.unwrap();

        assert_eq!(improved, "Shipped X, cutting Y by 40%");
        let (prompt, system) = generator.last_call();
        assert!(prompt.contains("worked on stuff"));
        assert!(!prompt.contains("{bullet_text}"));
        assert_eq!(system, BULLET_SYSTEM);
    }

    #[tokio::test]
    async fn test_generator_failure_maps_to_llm_error() {
        let err = review_resume("resume", "job", &FailingGenerator)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
