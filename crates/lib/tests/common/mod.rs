#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared helpers for the `quizgen` integration tests.

use async_trait::async_trait;
use quizgen::providers::ai::AiProvider;
use quizgen::PromptError;
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber once per test binary.
pub fn setup_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

// --- Mock AI Provider for Logic Testing ---

/// Replays a fixed answer (or failure) and records every prompt it receives.
#[derive(Clone, Debug)]
pub struct ScriptedAiProvider {
    pub call_history: Arc<RwLock<Vec<String>>>,
    response: Option<String>,
}

impl ScriptedAiProvider {
    pub fn answering(response: &str) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            response: Some(response.to_string()),
        }
    }

    /// A provider whose every call fails like a rejected credential.
    pub fn failing() -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            response: None,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.call_history.read().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for ScriptedAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, PromptError> {
        self.call_history.write().unwrap().push(prompt.to_string());
        self.response.clone().ok_or(PromptError::AiApi {
            status: 401,
            body: "API key not valid".to_string(),
        })
    }
}
