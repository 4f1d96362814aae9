//! Typed access to the PaperMind backend.
//!
//! [`ApiClient`] binds each backend endpoint to the operation executor:
//! every call carries one [`OperationCategory`] (which fixes its timeout)
//! and failed calls are classified and retried per [`RetryPolicy`] before
//! an [`ApiError`] surfaces to the caller. Concurrent calls are
//! independent; the client performs no coalescing or ordering between
//! them.

pub mod category;
pub(crate) mod executor;
pub mod retry;

pub use category::OperationCategory;
pub use retry::RetryPolicy;

use crate::documents::{Document, DocumentUpload};
use crate::error::api::ApiError;
use crate::questions::{QuestionRequest, QuestionResponse};

use log::{debug, info};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use url::Url;

const DOCUMENTS_ENDPOINT: &str = "documents/";
const QUESTIONS_ENDPOINT: &str = "questions/";
const UPLOAD_FILE_FIELD: &str = "file";

#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    client: Client,
    retry: RetryPolicy,
}

impl ApiClient {
    pub fn new(base_url_str: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url_str)?;
        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::unknown(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url,
            client,
            retry: RetryPolicy::default(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Upload a PDF to the backend as a multipart payload.
    ///
    /// The upload is validated locally first; an invalid file is rejected
    /// with [`ApiError::Validation`] before any network call. A retried
    /// upload is a full resend of the file.
    pub async fn upload_document(&self, upload: DocumentUpload) -> Result<Document, ApiError> {
        upload.validate()?;

        let url = self.base_url.join(DOCUMENTS_ENDPOINT)?;

        let response = executor::execute(&self.retry, OperationCategory::Upload, || {
            let part = Part::bytes(upload.bytes().to_vec())
                .file_name(upload.filename().to_owned())
                .mime_str(upload.content_type())
                .map_err(|e| ApiError::unknown(format!("Invalid upload content type: {e}")))?;

            Ok(self
                .client
                .post(url.clone())
                .multipart(Form::new().part(UPLOAD_FILE_FIELD, part)))
        })
        .await?;

        let document: Document = response.json().await.map_err(|e| ApiError::from_decode(e))?;

        info!(
            "Uploaded \"{}\" as document {}",
            document.filename, document.id
        );
        Ok(document)
    }

    /// Fetch all documents, in the order the server returns them.
    pub async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        let url = self.base_url.join(DOCUMENTS_ENDPOINT)?;

        let response = executor::execute(&self.retry, OperationCategory::Default, || {
            Ok(self.client.get(url.clone()))
        })
        .await?;

        let documents: Vec<Document> = response.json().await.map_err(|e| ApiError::from_decode(e))?;

        debug!("Listed {} documents", documents.len());
        Ok(documents)
    }

    /// Fetch one document by id. An unknown id surfaces the server's
    /// not-found error.
    pub async fn get_document(&self, id: i64) -> Result<Document, ApiError> {
        let url = self.base_url.join(&format!("{DOCUMENTS_ENDPOINT}{id}"))?;

        let response = executor::execute(&self.retry, OperationCategory::Default, || {
            Ok(self.client.get(url.clone()))
        })
        .await?;

        response.json().await.map_err(|e| ApiError::from_decode(e))
    }

    /// Delete one document by id.
    ///
    /// Deleting an id the server no longer knows surfaces its not-found
    /// error; repeated deletes are not smoothed over client-side.
    pub async fn delete_document(&self, id: i64) -> Result<(), ApiError> {
        let url = self.base_url.join(&format!("{DOCUMENTS_ENDPOINT}{id}"))?;

        executor::execute(&self.retry, OperationCategory::Default, || {
            Ok(self.client.delete(url.clone()))
        })
        .await?;

        info!("Deleted document {id}");
        Ok(())
    }

    /// Ask a question about a document.
    ///
    /// The question must be non-empty after trimming; an empty one is
    /// rejected locally before any network call.
    pub async fn ask_question(
        &self,
        document_id: i64,
        question: &str,
    ) -> Result<QuestionResponse, ApiError> {
        let request = QuestionRequest::new(document_id, question)?;
        let url = self.base_url.join(QUESTIONS_ENDPOINT)?;

        let response = executor::execute(&self.retry, OperationCategory::Question, || {
            Ok(self.client.post(url.clone()).json(&request))
        })
        .await?;

        response.json().await.map_err(|e| ApiError::from_decode(e))
    }

    /// Lightweight reachability check against the backend root.
    ///
    /// Single attempt with the status-check timeout and no retry policy: a
    /// probe is a low-stakes periodic signal, and one failed probe is
    /// enough to declare the backend unreachable.
    pub async fn probe_backend(&self) -> bool {
        let request = self
            .client
            .get(self.base_url.clone())
            .timeout(OperationCategory::StatusCheck.timeout());

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                debug!("Probe succeeded for {}", self.base_url);
                true
            }
            Ok(response) => {
                debug!(
                    "Probe failed for {}: status={}",
                    self.base_url,
                    response.status()
                );
                false
            }
            Err(e) => {
                debug!("Probe failed for {}: {e}", self.base_url);
                false
            }
        }
    }
}
