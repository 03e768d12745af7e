use axum::{
    Router,
    extract::{NestedPath, Request},
    http::{HeaderValue, header::LOCATION},
    middleware::{self, Next},
    response::Response,
};

use crate::prefix::rewrite_target;

/// prefix_redirects
///
/// Middleware installed once per route group. It resolves the group's mount
/// prefix from axum's routing context (`NestedPath`, set by `Router::nest`),
/// lets the handler run, and rewrites the `Location` of any 3xx response so
/// the client stays inside the group.
///
/// Handlers keep calling `Redirect::to("/question-2")`; none of them ever sees
/// or builds the prefix. Requests that were not routed through a nested group
/// are passed through untouched.
pub async fn prefix_redirects(request: Request, next: Next) -> Response {
    let nested = request.extensions().get::<NestedPath>().cloned();
    let mut response = next.run(request).await;

    let Some(nested) = nested else {
        return response;
    };
    if !response.status().is_redirection() {
        return response;
    }

    // Non-UTF8 or absent Location headers are left for the client to deal with.
    let rewritten = response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|location| {
            rewrite_target(nested.as_str(), location).map(|to| (location.to_string(), to))
        });

    if let Some((from, to)) = rewritten {
        match HeaderValue::from_str(&to) {
            Ok(value) => {
                tracing::debug!(
                    prefix = %nested.as_str(),
                    %from,
                    %to,
                    "Prefixed redirect target"
                );
                response.headers_mut().insert(LOCATION, value);
            }
            // Unreachable for prefixes mounted from `AppConfig`: both the prefix
            // and the original Location are visible ASCII.
            Err(err) => {
                tracing::warn!(
                    prefix = %nested.as_str(),
                    %from,
                    error = %err,
                    "Could not prefix redirect target"
                );
            }
        }
    }

    response
}

/// RouterExt
///
/// Installs [`prefix_redirects`] on a route group before it is nested.
pub trait RouterExt {
    fn within_group(self) -> Self;
}

impl<S> RouterExt for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn within_group(self) -> Self {
        self.layer(middleware::from_fn(prefix_redirects))
    }
}
