//! Per-request tracing middleware.
//!
//! Generates a trace id, keeps it in request extensions and in the
//! task-local `trace_ctx`, instruments the downstream future with a
//! `request` span, logs one `request_completed` event and echoes the id in
//! `x-request-id`.

use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::trace_ctx;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Trace id assigned to a request, stored in its extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(pub String);

#[derive(Clone, Default)]
pub struct RequestSpan;

impl<S, B> Transform<S, ServiceRequest> for RequestSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestSpanMiddleware { service }))
    }
}

pub struct RequestSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestSpanMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let trace_id = Uuid::new_v4().to_string();
        let method = req.method().to_string();
        let path = req.path().to_string();

        req.extensions_mut().insert(TraceId(trace_id.clone()));

        let span = info_span!("request", trace_id = %trace_id, method = %method, path = %path);
        let fut = self.service.call(req);

        Box::pin(trace_ctx::with_trace_id(
            trace_id.clone(),
            async move {
                let result = fut.await;

                let status = match &result {
                    Ok(res) => res.status(),
                    Err(err) => err.as_response_error().status_code(),
                };
                let duration_us = start.elapsed().as_micros() as u64;
                let status_code = status.as_u16();

                if status.is_server_error() {
                    error!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, message = "request_completed");
                } else if status.is_client_error() {
                    warn!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, message = "request_completed");
                } else {
                    info!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, message = "request_completed");
                }

                let mut res = result?;
                if let Ok(value) = HeaderValue::from_str(&trace_id) {
                    res.headers_mut()
                        .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                }
                Ok(res)
            }
            .instrument(span),
        ))
    }
}
