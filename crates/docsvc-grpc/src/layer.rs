//! Tower layers wrapped around every gRPC call.

use std::any::Any;
use std::task::{Context, Poll};

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Request, Response};
use http_body_util::Empty;
use tower::{Layer, Service};
use tracing::{error, info};

use crate::status::INTERNAL_SERVER_ERROR;

/// Logs the service and method of each incoming call.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallLogLayer;

impl<S> Layer<S> for CallLogLayer {
    type Service = CallLog<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CallLog { inner }
    }
}

/// Service produced by [`CallLogLayer`].
#[derive(Debug, Clone)]
pub struct CallLog<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for CallLog<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        let (service, method) = split_method(request.uri().path());
        info!(grpc.service = service, grpc.method = method, "gRPC call");
        self.inner.call(request)
    }
}

/// Split `/package.Service/Method` into its service and method.
pub fn split_method(path: &str) -> (&str, &str) {
    let path = path.trim_start_matches('/');
    path.split_once('/').unwrap_or((path, ""))
}

/// Turn a handler panic into an `Internal` status.
///
/// Used with `CatchPanicLayer::custom`.
pub fn panic_to_internal(panic: Box<dyn Any + Send + 'static>) -> Response<Empty<Bytes>> {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "gRPC handler panicked");

    let mut response = Response::new(Empty::new());
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/grpc"));
    headers.insert("grpc-status", HeaderValue::from(tonic::Code::Internal as i32));
    headers.insert("grpc-message", HeaderValue::from_static(INTERNAL_SERVER_ERROR));
    response
}
