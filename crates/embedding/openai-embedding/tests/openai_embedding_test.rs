//! Tests for [`openai_embedding::OpenAIEmbedding`] against a mockito server.
//!
//! The real-API test is `#[ignore]`d and needs OPENAI_API_KEY:
//! `cargo test -p openai-embedding -- --ignored`.

use embedding::EmbeddingService;
use mockito::Matcher;
use openai_embedding::OpenAIEmbedding;
use serde_json::json;

fn embedding_body(vectors: &[(u32, Vec<f32>)]) -> String {
    let data: Vec<_> = vectors
        .iter()
        .map(|(index, v)| json!({ "object": "embedding", "index": index, "embedding": v }))
        .collect();
    json!({
        "object": "list",
        "data": data,
        "model": "text-embedding-3-small",
        "usage": { "prompt_tokens": 4, "total_tokens": 4 }
    })
    .to_string()
}

/// **Test: Batch embedding keeps input order even when the server returns items out of order.**
#[tokio::test]
async fn test_embed_batch_orders_by_index() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/embeddings")
        .match_body(Matcher::PartialJson(json!({
            "model": "text-embedding-3-small",
            "input": ["quick fox", "fox"]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(embedding_body(&[(1, vec![0.0, 1.0]), (0, vec![1.0, 0.0])]))
        .create_async()
        .await;

    let service = OpenAIEmbedding::new_with_base_url(
        "test-key".to_string(),
        "text-embedding-3-small".to_string(),
        Some(&server.url()),
    );
    let vectors = service
        .embed_batch(&["quick fox".to_string(), "fox".to_string()])
        .await
        .unwrap();

    assert_eq!(vectors, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    mock.assert_async().await;
}

/// **Test: A count mismatch between inputs and returned vectors is an error.**
#[tokio::test]
async fn test_embed_batch_count_mismatch_is_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(embedding_body(&[(0, vec![1.0, 0.0])]))
        .create_async()
        .await;

    let service = OpenAIEmbedding::new_with_base_url(
        "test-key".to_string(),
        "text-embedding-3-small".to_string(),
        Some(&server.url()),
    );
    let result = service
        .embed_batch(&["a b".to_string(), "c d".to_string()])
        .await;

    assert!(result.is_err());
}

/// **Test: Empty batch short-circuits without a request.**
#[tokio::test]
async fn test_embed_batch_empty_input() {
    let service = OpenAIEmbedding::new_with_base_url(
        "test-key".to_string(),
        "text-embedding-3-small".to_string(),
        Some("http://127.0.0.1:9"),
    );
    assert!(service.embed_batch(&[]).await.unwrap().is_empty());
}

/// **Test: A rejected request surfaces as an error instead of an empty result.**
#[tokio::test]
async fn test_embed_batch_rejected_request() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/embeddings")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"message":"bad input","type":"invalid_request_error","param":null,"code":null}}"#)
        .create_async()
        .await;

    let service = OpenAIEmbedding::new_with_base_url(
        "test-key".to_string(),
        "text-embedding-3-small".to_string(),
        Some(&server.url()),
    );
    assert!(service.embed_batch(&["hello".to_string()]).await.is_err());
}

/// **Test: Real API call.** Requires OPENAI_API_KEY.
#[tokio::test]
#[ignore]
async fn test_openai_embedding_real_api() {
    let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set");
    let service =
        OpenAIEmbedding::new_with_base_url(api_key, "text-embedding-3-small".to_string(), None);
    let vectors = service
        .embed_batch(&["Hello world".to_string()])
        .await
        .unwrap();
    assert_eq!(vectors.len(), 1);
    assert_eq!(vectors[0].len(), 1536);
}
