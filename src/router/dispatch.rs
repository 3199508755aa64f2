//! Handler dispatch
//!
//! Turns a parsed request into a response by way of [`Route::resolve`].
//! Filesystem failures are recovered here as 404s; only a failure to
//! encode the response escapes to the connection.

use std::path::PathBuf;

use crate::http::encoding::EncodeError;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};
use crate::router::files::FileStore;
use crate::router::route::Route;

const TEXT_PLAIN: &str = "text/plain";
const OCTET_STREAM: &str = "application/octet-stream";

/// Routes requests to the built-in handlers.
///
/// Holds no mutable state, so one instance is shared by every connection.
#[derive(Debug, Clone, Default)]
pub struct Router {
    files: Option<FileStore>,
}

impl Router {
    /// Create a router. Without a directory every `/files` request is a 404.
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self {
            files: directory.map(FileStore::new),
        }
    }

    /// Produce the response for `request`.
    pub async fn dispatch(&self, request: &Request) -> Result<Response, EncodeError> {
        let route = Route::resolve(&request.target);

        tracing::debug!(
            method = %request.method,
            path = %request.target,
            route = ?route,
            "Dispatching request"
        );

        match route {
            Route::Files { name: Some(name) } => self.serve_file(request, name).await,
            Route::UserAgent => {
                let agent = request.header("User-Agent").unwrap_or_default();
                let content = agent.as_bytes().to_vec();
                Response::negotiated(StatusCode::Ok, TEXT_PLAIN, content, request)
            }
            Route::Echo { text: Some(text) } => {
                let content = text.as_bytes().to_vec();
                Response::negotiated(StatusCode::Ok, TEXT_PLAIN, content, request)
            }
            Route::Root => Ok(Response::ok()),
            Route::Files { name: None } | Route::Echo { text: None } | Route::NotFound => {
                Ok(Response::not_found())
            }
        }
    }

    async fn serve_file(&self, request: &Request, name: &str) -> Result<Response, EncodeError> {
        let Some(store) = &self.files else {
            tracing::warn!(
                path = %request.target,
                "File route requested but no directory is configured"
            );
            return Ok(Response::not_found());
        };

        if request.method == Method::POST {
            return Ok(match store.write(name, &request.body).await {
                Ok(()) => {
                    tracing::debug!(file = name, bytes = request.body.len(), "File written");
                    Response::created()
                }
                Err(e) => {
                    tracing::warn!(
                        file = %store.path_for(name).display(),
                        error = %e,
                        "Failed to write file"
                    );
                    Response::not_found()
                }
            });
        }

        match store.read(name).await {
            Ok(contents) => Response::negotiated(StatusCode::Ok, OCTET_STREAM, contents, request),
            Err(e) => {
                tracing::warn!(
                    file = %store.path_for(name).display(),
                    error = %e,
                    "Failed to read file"
                );
                Ok(Response::not_found())
            }
        }
    }
}
