use crate::models::ctx::{AuthError, CtxError};
use crate::runtime::{ConditionalSend, Env, EnvError, EnvFuture, EnvFutureExt};
use crate::types::api::{ApiResponse, FetchRequestParams};
use crate::types::profile::AccessToken;
use futures::TryFutureExt;
use http::header::{ACCEPT, AUTHORIZATION};
use http::Request;
use serde::Serialize;
use tracing::trace;

/// Builds the HTTP request for `api_request`, authorized with `access_token`.
pub fn build_api_request<REQ, BODY>(
    api_request: REQ,
    access_token: &AccessToken,
) -> Result<Request<BODY>, EnvError>
where
    REQ: FetchRequestParams<BODY>,
{
    let mut url = api_request
        .endpoint()
        .join(&api_request.path())
        .map_err(|error| EnvError::Other(error.to_string()))?;
    url.set_query(api_request.query().as_deref());
    Request::builder()
        .method(api_request.method())
        .uri(url.as_str())
        .header(AUTHORIZATION, access_token.bearer())
        .header(ACCEPT, "application/json")
        .body(api_request.body())
        .map_err(|error| EnvError::Other(error.to_string()))
}

/// Fetches `api_request` with the bearer token from [`Env::access_token`].
///
/// Resolves only with a response whose `success` flag is truthy.
pub fn fetch_api<E, REQ, BODY>(
    api_request: &REQ,
) -> EnvFuture<'static, Result<ApiResponse, CtxError>>
where
    E: Env + 'static,
    REQ: FetchRequestParams<BODY> + Clone + ConditionalSend + 'static,
    BODY: Serialize + ConditionalSend + 'static,
{
    let api_request = api_request.to_owned();
    E::access_token()
        .map_err(CtxError::from)
        .and_then(|access_token| fetch_authorized::<E, REQ, BODY>(api_request, access_token))
        .boxed_env()
}

async fn fetch_authorized<E, REQ, BODY>(
    api_request: REQ,
    access_token: Option<AccessToken>,
) -> Result<ApiResponse, CtxError>
where
    E: Env + 'static,
    REQ: FetchRequestParams<BODY>,
    BODY: Serialize + ConditionalSend + 'static,
{
    let access_token = access_token.ok_or(AuthError::MissingAccessToken)?;
    let request = build_api_request::<REQ, BODY>(api_request, &access_token)?;
    trace!(method = %request.method(), uri = %request.uri(), "API request");
    let response = E::fetch::<_, ApiResponse>(request).await?;
    Ok(response.ensure_success()?)
}
