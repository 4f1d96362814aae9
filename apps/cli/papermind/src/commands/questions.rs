use crate::error::PapermindError;

use client_core::api::ApiClient;

use log::info;

pub async fn ask(client: &ApiClient, id: i64, question: &str) -> Result<(), PapermindError> {
    info!("Asking about document {id}");

    let response = client.ask_question(id, question).await?;

    println!("{}", response.answer);
    Ok(())
}
