use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::{JsonPayloadError, PathError},
    Error, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::core::AppError;
use crate::middleware::request_id::current_request_id;

/// Middleware that logs requests ending in an error or a server-side status
pub struct ErrorHandler;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorHandlerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddleware<S>
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
        let service = self.service.clone();

        Box::pin(async move {
            let method = req.method().clone();
            let path = req.path().to_string();
            let request_id = current_request_id(req.request()).unwrap_or_default();

            let result = service.call(req).await;

            match &result {
                Err(err) => {
                    tracing::error!(
                        request_id = %request_id,
                        method = %method,
                        path = %path,
                        error = ?err,
                        "Request error"
                    );
                }
                Ok(res) if res.status().is_server_error() => {
                    let detail = res.response().error().map(|e| e.to_string());
                    tracing::error!(
                        request_id = %request_id,
                        method = %method,
                        path = %path,
                        status = %res.status(),
                        error = ?detail,
                        "Request failed"
                    );
                }
                Ok(_) => {}
            }

            result
        })
    }
}

/// Turns malformed JSON bodies into the standard error body (400)
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    tracing::debug!(error = %err, "Rejected request body");
    AppError::validation(format!("Invalid request body: {}", err)).into()
}

/// Turns unparseable path segments (e.g. a non-numeric ID) into the standard error body (400)
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> Error {
    AppError::validation(format!("Invalid path parameter: {}", err)).into()
}
