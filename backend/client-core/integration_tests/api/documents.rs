// Public API tests for the document operations, run against a mock
// backend. These test the PUBLIC interface from an external consumer's
// perspective.

use client_core::api::ApiClient;
use client_core::documents::{Document, DocumentUpload, PDF_CONTENT_TYPE};
use client_core::error::api::ApiError;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn document_body(id: i64, filename: &str) -> serde_json::Value {
    json!({
        "id": id,
        "filename": filename,
        "file_path": format!("uploads/{filename}"),
        "upload_date": "2024-05-04T10:30:00"
    })
}

/// **VALUE**: Covers the full upload-then-list happy path.
///
/// **WHY THIS MATTERS**: Upload is the only multipart call in the client;
/// a broken form field name or content type would 400 on a real backend
/// while every JSON operation still passed.
///
/// **BUG THIS CATCHES**: Would catch the multipart payload no longer
/// reaching the backend as one POST, or the response shape drifting from
/// the backend's document schema.
#[tokio::test]
async fn given_2_mib_pdf_when_uploaded_then_document_returned_and_listed() {
    // GIVEN: A backend that accepts the upload and lists the result
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/documents/"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(document_body(1, "report.pdf")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/documents/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([document_body(1, "report.pdf")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).expect("client");
    let upload = DocumentUpload::new("report.pdf", PDF_CONTENT_TYPE, vec![0u8; 2 * 1024 * 1024]);

    // WHEN: Uploading and then listing
    let document = client.upload_document(upload).await.expect("upload");
    let listed = client.list_documents().await.expect("list");

    // THEN: The server-assigned document comes back and appears in the list
    assert_eq!(document.id, 1);
    assert_eq!(document.filename, "report.pdf");
    assert!(listed.iter().any(|d| d.id == 1 && d.filename == "report.pdf"));

    server.verify().await;
}

#[tokio::test]
async fn given_known_id_when_fetched_then_document_returned() {
    // GIVEN: A backend that knows document 7
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document_body(7, "thesis.pdf")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).expect("client");

    // WHEN: Fetching by id
    let document: Document = client.get_document(7).await.expect("get");

    // THEN: The right document arrives with its metadata intact
    assert_eq!(document.id, 7);
    assert_eq!(document.file_path, "uploads/thesis.pdf");

    server.verify().await;
}

#[tokio::test]
async fn given_existing_document_when_deleted_then_ok() {
    // GIVEN: A backend that deletes document 3
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/documents/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).expect("client");

    // WHEN/THEN: Deletion succeeds with an empty body
    client.delete_document(3).await.expect("delete");

    server.verify().await;
}

/// **VALUE**: Verifies the not-found path for repeated deletes.
///
/// **WHY THIS MATTERS**: The client does not smooth over double deletes;
/// the server's 404 must surface so the shell can tell the user the list
/// is stale. Because server errors are retryable, all three attempts run
/// even though none can succeed.
///
/// **BUG THIS CATCHES**: Would catch 404s being swallowed, the backend's
/// detail string being dropped, or the retry budget not applying to
/// server errors.
#[tokio::test]
async fn given_already_deleted_id_when_deleted_again_then_404_surfaces_after_retries() {
    // GIVEN: A backend that no longer knows document 7
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/documents/7"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Document not found"})),
        )
        .expect(3)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).expect("client");

    // WHEN: Deleting it again
    let error = client.delete_document(7).await.expect_err("must fail");

    // THEN: Classified as a server error carrying status and detail
    match &error {
        ApiError::Server { status, message, .. } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message, "Document not found");
        }
        other => panic!("expected Server error, got {other:?}"),
    }

    // And the mock observed exactly 3 attempts
    server.verify().await;
}

#[tokio::test]
async fn given_non_pdf_upload_when_submitted_then_no_network_call_observed() {
    // GIVEN: A backend that must receive nothing
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/documents/"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).expect("client");
    let upload = DocumentUpload::new("notes.txt", "text/plain", b"hello".to_vec());

    // WHEN: Uploading a non-PDF
    let error = client.upload_document(upload).await.expect_err("must fail");

    // THEN: Rejected locally; the mock saw zero requests
    assert!(matches!(error, ApiError::Validation { .. }));
    server.verify().await;
}
