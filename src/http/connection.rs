use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::ServerConfig;
use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::router::Router;

/// Written before closing when reading from the socket fails.
const READ_FAILURE_REPLY: &[u8] = b"HTTP/1.1 404 Not Found";

/// Buffer sizing for one connection.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionLimits {
    /// Bytes reserved for each socket read.
    pub read_chunk: usize,
    /// Largest buffered request accepted before answering 400.
    pub max_request_size: usize,
}

impl Default for ConnectionLimits {
    fn default() -> Self {
        Self::from(&ServerConfig::default())
    }
}

impl From<&ServerConfig> for ConnectionLimits {
    fn from(cfg: &ServerConfig) -> Self {
        Self {
            read_chunk: cfg.read_buffer_size.max(1),
            max_request_size: cfg.max_request_size,
        }
    }
}

pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    router: Arc<Router>,
    limits: ConnectionLimits,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = keep_alive?
    Closed,
}

/// What a read attempt produced.
enum ReadOutcome {
    Request(Request),
    /// The request cannot be served; answer and close.
    Reject(Response),
    /// Peer went away or the socket failed.
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>, limits: ConnectionLimits) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(limits.read_chunk),
            state: ConnectionState::Reading,
            router,
            limits,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::Reading => match self.read_request().await? {
                    ReadOutcome::Request(req) => ConnectionState::Processing(req),
                    ReadOutcome::Reject(mut response) => {
                        response.close_connection();
                        ConnectionState::Writing(ResponseWriter::new(&response), false)
                    }
                    ReadOutcome::Closed => ConnectionState::Closed,
                },

                ConnectionState::Processing(req) => {
                    let (response, keep_alive) = self.handle_request(&req).await;
                    ConnectionState::Writing(ResponseWriter::new(&response), keep_alive)
                }

                ConnectionState::Writing(writer, keep_alive) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    if keep_alive {
                        ConnectionState::Reading // go back for next request
                    } else {
                        ConnectionState::Closed
                    }
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    /// Reads until the buffer holds a whole request: a terminated header
    /// block plus as many body bytes as `Content-Length` announces.
    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            if !self.buffer.is_empty() {
                match parse_http_request(&self.buffer) {
                    Ok((request, consumed)) => {
                        if consumed < self.buffer.len() {
                            tracing::debug!(
                                discarded = self.buffer.len() - consumed,
                                "Dropping bytes past the end of the request"
                            );
                        }
                        self.buffer.clear();
                        return Ok(ReadOutcome::Request(request));
                    }

                    Err(ParseError::Incomplete) => {
                        if self.buffer.len() >= self.limits.max_request_size {
                            tracing::warn!(
                                buffered = self.buffer.len(),
                                limit = self.limits.max_request_size,
                                "Request exceeds size limit"
                            );
                            self.buffer.clear();
                            return Ok(ReadOutcome::Reject(Response::bad_request()));
                        }
                        // Need more data → fall through to read
                    }

                    Err(e) => {
                        tracing::warn!(error = %e, "Rejecting malformed request");
                        self.buffer.clear();
                        return Ok(ReadOutcome::Reject(Response::bad_request()));
                    }
                }
            }

            self.buffer.reserve(self.limits.read_chunk);
            match self.stream.read_buf(&mut self.buffer).await {
                Ok(0) => {
                    // Client closed connection
                    if !self.buffer.is_empty() {
                        tracing::debug!(
                            buffered = self.buffer.len(),
                            "Connection closed mid-request"
                        );
                    }
                    return Ok(ReadOutcome::Closed);
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "Read failed, closing connection");
                    if let Err(e) = self.stream.write_all(READ_FAILURE_REPLY).await {
                        tracing::debug!(error = %e, "Could not report read failure");
                    }
                    return Ok(ReadOutcome::Closed);
                }
            }
        }
    }

    async fn handle_request(&self, req: &Request) -> (Response, bool) {
        let keep_alive = !req.wants_close();

        let mut response = match self.router.dispatch(req).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    method = %req.method,
                    path = %req.target,
                    error = %e,
                    "Failed to encode response"
                );
                let mut response = Response::internal_error();
                response.close_connection();
                return (response, false);
            }
        };

        if !keep_alive {
            response.close_connection();
        }

        tracing::info!(
            method = %req.method,
            path = %req.target,
            status = response.status.as_u16(),
            bytes = response.body.len(),
            "Request handled"
        );

        (response, keep_alive)
    }
}
