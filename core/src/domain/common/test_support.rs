//! Hand-written fakes for the service ports.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::domain::{
    common::entities::app_errors::CoreError,
    completion::{entities::ImagePayload, ports::LLMClient},
    video::ports::VideoSearchClient,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedCompletion {
    pub prompt: String,
    pub image: Option<ImagePayload>,
}

/// Completion provider returning a fixed answer and recording every call.
#[derive(Debug, Clone)]
pub(crate) struct FakeLLM {
    answer: Result<String, CoreError>,
    calls: Arc<Mutex<Vec<RecordedCompletion>>>,
}

impl FakeLLM {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Ok(answer.to_string()),
            calls: Arc::default(),
        }
    }

    pub fn failing(error: CoreError) -> Self {
        Self {
            answer: Err(error),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCompletion> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, prompt: String, image: Option<ImagePayload>) -> Result<String, CoreError> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCompletion { prompt, image });
        self.answer.clone()
    }
}

impl LLMClient for FakeLLM {
    async fn generate_with_image(
        &self,
        prompt: String,
        image: ImagePayload,
        _response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.record(prompt, Some(image))
    }

    async fn generate_with_text(
        &self,
        prompt: String,
        _response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.record(prompt, None)
    }
}

/// Video provider keyed on the exact query string.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeVideoSearch {
    answers: HashMap<String, Result<Option<String>, CoreError>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl FakeVideoSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_video(mut self, query: &str, link: &str) -> Self {
        self.answers
            .insert(query.to_string(), Ok(Some(link.to_string())));
        self
    }

    pub fn with_error(mut self, query: &str) -> Self {
        self.answers.insert(
            query.to_string(),
            Err(CoreError::ExternalServiceError("quota exceeded".to_string())),
        );
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl VideoSearchClient for FakeVideoSearch {
    async fn search_top_video(&self, query: String) -> Result<Option<String>, CoreError> {
        self.queries.lock().unwrap().push(query.clone());
        self.answers.get(&query).cloned().unwrap_or(Ok(None))
    }
}
