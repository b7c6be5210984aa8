#![allow(dead_code)]

use std::{path::Path, sync::Arc};

use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use pantrylens_api::{
    application::http::server::http_server::{router, state},
    args::{Args, CompletionArgs, LogArgs, ProviderArg, ServerArgs, UploadArgs, VideoArgs},
};
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const MAX_IMAGE_BYTES: usize = 1024 * 1024;

pub const IDENTIFY_ANSWER: &str = r#"{"prediction":"Avocado","confidence":"95%","alternatives":["Pear","Lime","Kiwi"],"summary":"A ripe avocado, creamy and rich in healthy fats."}"#;

pub const EGG_FRIED_RICE: &str = r#"{"dishes":[{"name":"Egg Fried Rice","ingredients":["egg","rice","oil"],"instructions":["Heat oil","Scramble egg","Add rice"],"estimatedCalories":450}]}"#;

pub const TWO_DISHES: &str = r#"{"ingredients":["tomato","mozzarella","basil"],"dishes":[{"name":"Caprese Salad","ingredients":["tomato","mozzarella","basil"],"instructions":["Slice","Layer","Season"],"estimatedCalories":320},{"name":"Margherita Pizza","ingredients":["dough","tomato","mozzarella"],"instructions":["Stretch dough","Top","Bake"]}]}"#;

pub struct Harness {
    pub server: TestServer,
    pub completion: MockServer,
    pub video: MockServer,
    pub uploads: TempDir,
}

impl Harness {
    pub async fn start(youtube_api_key: Option<&str>) -> Self {
        Self::start_with(youtube_api_key, "", false).await
    }

    pub async fn start_with(
        youtube_api_key: Option<&str>,
        root_path: &str,
        metrics_enabled: bool,
    ) -> Self {
        let completion = MockServer::start().await;
        let video = MockServer::start().await;
        let uploads = tempfile::tempdir().unwrap();

        let args = Arc::new(Args {
            server: ServerArgs {
                host: "127.0.0.1".to_string(),
                port: 0,
                root_path: root_path.to_string(),
                allowed_origins: vec!["http://localhost:5173".to_string()],
                metrics_enabled,
            },
            completion: CompletionArgs {
                provider: ProviderArg::Openai,
                openai_api_key: Some("sk-test".to_string()),
                openai_model: "gpt-4o".to_string(),
                openai_base_url: completion.uri(),
                openai_max_tokens: 800,
                gemini_api_key: None,
                gemini_model: "gemini-2.0-flash".to_string(),
                gemini_base_url: "http://127.0.0.1:9".to_string(),
                completion_timeout_secs: 5,
            },
            video: VideoArgs {
                youtube_api_key: youtube_api_key.map(str::to_string),
                youtube_base_url: video.uri(),
                video_timeout_secs: 5,
                enrichment_concurrency: 4,
            },
            upload: UploadArgs {
                dir: uploads.path().to_path_buf(),
                max_image_bytes: MAX_IMAGE_BYTES,
                max_dish_count: 10,
            },
            log: LogArgs {
                filter: "info".to_string(),
                json: false,
            },
        });

        let app = router(state(args).await.unwrap()).unwrap();
        let server = TestServer::new(app).unwrap();

        Self {
            server,
            completion,
            video,
            uploads,
        }
    }

    pub async fn answer_completion(&self, content: &str, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
            })))
            .expect(expected_calls)
            .mount(&self.completion)
            .await;
    }

    pub async fn answer_video(&self, query: &str, video_id: Option<&str>) {
        let items = match video_id {
            Some(id) => json!([{ "id": { "kind": "youtube#video", "videoId": id } }]),
            None => json!([]),
        };

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", query))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": items })))
            .expect(1)
            .mount(&self.video)
            .await;
    }

    pub async fn expect_no_upstream_calls(&self) {
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.completion)
            .await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.video)
            .await;
    }
}

pub fn photo_form() -> MultipartForm {
    MultipartForm::new().add_part(
        "image",
        Part::bytes(b"\xFF\xD8\xFF\xE0fake-jpeg".to_vec())
            .file_name("fridge.jpg")
            .mime_type("image/jpeg"),
    )
}

pub fn is_empty_dir(dir: &Path) -> bool {
    std::fs::read_dir(dir).unwrap().next().is_none()
}

