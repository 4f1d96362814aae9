//! Single entry point for issuing a logical remote call.
//!
//! The executor composes two explicit steps around each attempt: a
//! pre-call hook (attach the category's timeout to the freshly built
//! request) and a post-call hook (route the outcome through the error
//! classifier). Retries are an explicit bounded loop with an attempt
//! counter, not recursion.

use crate::api::category::OperationCategory;
use crate::api::retry::RetryPolicy;
use crate::error::api::ApiError;

use backoff::backoff::Backoff;
use log::{debug, warn};
use reqwest::{RequestBuilder, Response};

/// Issue one logical call, re-issuing it per `policy` on retryable
/// failures.
///
/// `build_request` is invoked once per attempt: request bodies (multipart
/// uploads in particular) are consumed by sending, so the same logical
/// call must be rebuilt from its parts. A retried call is a fresh attempt
/// end to end; nothing is assumed about partial server-side effects of the
/// failed one.
///
/// Returns the raw response on the first 2xx outcome, or the last
/// classified error once the attempt budget is exhausted.
pub(crate) async fn execute<F>(
    policy: &RetryPolicy,
    category: OperationCategory,
    build_request: F,
) -> Result<Response, ApiError>
where
    F: Fn() -> Result<RequestBuilder, ApiError>,
{
    let mut delays = policy.delay_schedule();
    let mut attempts_made = 0;

    loop {
        attempts_made += 1;
        let request = build_request()?.timeout(category.timeout());

        let error = match request.send().await {
            Ok(response) if response.status().is_success() => return Ok(response),
            Ok(response) => ApiError::from_response(response).await,
            Err(transport) => ApiError::from_transport(transport),
        };

        if !policy.should_retry(&error, attempts_made) {
            if attempts_made > 1 {
                warn!("Giving up after {attempts_made} attempts: {error}");
            }
            return Err(error);
        }

        match delays.next_backoff() {
            Some(delay) => {
                debug!(
                    "Attempt {attempts_made}/{max} failed ({error}), retrying in {delay:?}",
                    max = policy.max_attempts()
                );
                tokio::time::sleep(delay).await;
            }
            None => return Err(error),
        }
    }
}
