use crate::error::PapermindError;

use client_core::api::ApiClient;
use client_core::documents::{Document, DocumentUpload};

use std::path::Path;

use log::info;

pub async fn upload(client: &ApiClient, path: &Path) -> Result<(), PapermindError> {
    info!("Uploading {}", path.display());

    let upload = DocumentUpload::from_path(path)?;
    let document = client.upload_document(upload).await?;

    println!(
        "Uploaded \"{}\" as document {}",
        document.filename, document.id
    );
    Ok(())
}

pub async fn list(client: &ApiClient) -> Result<(), PapermindError> {
    let documents = client.list_documents().await?;

    if documents.is_empty() {
        println!("No documents uploaded yet.");
        return Ok(());
    }

    print_documents(&documents);
    Ok(())
}

pub async fn show(client: &ApiClient, id: i64) -> Result<(), PapermindError> {
    let document = client.get_document(id).await?;

    println!("id:        {}", document.id);
    println!("filename:  {}", document.filename);
    println!("path:      {}", document.file_path);
    println!("uploaded:  {}", document.upload_date.format("%Y-%m-%d %H:%M:%S"));
    Ok(())
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), PapermindError> {
    client.delete_document(id).await?;

    println!("Deleted document {id}");
    Ok(())
}

pub(crate) fn print_documents(documents: &[Document]) {
    for document in documents {
        println!(
            "{:>6}  {}  {}",
            document.id,
            document.upload_date.format("%Y-%m-%d %H:%M"),
            document.filename
        );
    }
}
