//! HTTP server supervisor.
//!
//! [`Server::run`] drives three tasks in one [`JoinSet`]:
//!
//! - the listener, serving the router until the shared token is cancelled;
//! - the signal watcher, which cancels the token on SIGINT, SIGTERM or SIGQUIT;
//! - the shutdown task, which gives the listener a bounded grace period to
//!   drain in-flight requests and aborts it once that period elapses,
//!   dropping whatever connections are still open.
//!
//! The first task to fail cancels the token, and every task is joined
//! before `run` returns.

pub mod signal;

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{extract::Request, Router};
use hyper::{body::Incoming, service::service_fn};
use hyper_util::{
    rt::{TokioExecutor, TokioIo},
    server::conn::auto,
};
use thiserror::Error;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tokio::task::{AbortHandle, JoinError, JoinSet};
use tokio_util::sync::CancellationToken;
use tower::Service;

use crate::config::SHUTDOWN_GRACE_PERIOD;

/// Lifecycle failures, one variant per stage
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind http listener on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("http listener failed: {0}")]
    Listen(#[source] io::Error),

    #[error("failed to install signal handler: {0}")]
    Signal(#[source] io::Error),

    /// Termination was requested by a signal; `run` maps this to success.
    #[error("terminated by signal")]
    ExitSignal,

    #[error("server task failed: {0}")]
    Task(#[from] JoinError),
}

enum Listener {
    Address(String),
    Bound(TcpListener),
}

/// HTTP server with signal-driven, bounded graceful shutdown.
pub struct Server {
    listener: Listener,
    router: Router,
    grace_period: Duration,
}

impl Server {
    /// Serve `router` on `addr`; binding happens inside [`Server::run`].
    pub fn new(addr: impl Into<String>, router: Router) -> Self {
        Self {
            listener: Listener::Address(addr.into()),
            router,
            grace_period: SHUTDOWN_GRACE_PERIOD,
        }
    }

    /// Serve `router` on an already bound listener.
    pub fn from_listener(listener: TcpListener, router: Router) -> Self {
        Self {
            listener: Listener::Bound(listener),
            router,
            grace_period: SHUTDOWN_GRACE_PERIOD,
        }
    }

    /// Time in-flight requests get once shutdown starts.
    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    /// Run until a termination signal arrives, `parent` is cancelled or a
    /// task fails.
    pub async fn run(self, parent: &CancellationToken) -> Result<(), ServerError> {
        self.run_with_signal(parent, signal::terminated()).await
    }

    /// Like [`Server::run`] with a caller-supplied termination future.
    ///
    /// Returns `Ok(())` when shutdown was signal-initiated or requested
    /// through `parent`; otherwise the first error reported by any task.
    pub async fn run_with_signal<F>(
        self,
        parent: &CancellationToken,
        signal: F,
    ) -> Result<(), ServerError>
    where
        F: Future<Output = io::Result<&'static str>> + Send + 'static,
    {
        let token = parent.child_token();
        let (closed_tx, closed_rx) = oneshot::channel::<()>();
        let mut tasks = JoinSet::new();

        let listener = tasks.spawn(listen(self.listener, self.router, token.clone(), closed_tx));
        tasks.spawn(watch_signal(signal, token.clone()));
        tasks.spawn(shutdown(
            token.clone(),
            closed_rx,
            listener,
            self.grace_period,
        ));

        let mut signalled = false;
        let mut first_error = None;

        while let Some(joined) = tasks.join_next().await {
            let result = match joined {
                Ok(result) => result,
                // aborted by the shutdown task after the grace period
                Err(e) if e.is_cancelled() => Ok(()),
                Err(e) => Err(ServerError::Task(e)),
            };

            match result {
                Ok(()) => {}
                Err(ServerError::ExitSignal) => {
                    signalled = true;
                    token.cancel();
                }
                Err(e) => {
                    tracing::error!(error = %e, "server task failed");
                    token.cancel();
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) if !signalled => Err(e),
            _ => {
                tracing::info!("http server stopped");
                Ok(())
            }
        }
    }
}

/// Serve until the token is cancelled. `_closed` is dropped on exit, which
/// tells the shutdown task the listener is gone.
///
/// Connections run in a `JoinSet` owned by this task, so aborting the task
/// drops every connection still in flight.
async fn listen(
    listener: Listener,
    router: Router,
    token: CancellationToken,
    _closed: oneshot::Sender<()>,
) -> Result<(), ServerError> {
    // the rest of the group must stop even if serving ends on its own
    let _guard = token.clone().drop_guard();

    let listener = match listener {
        Listener::Bound(listener) => listener,
        Listener::Address(addr) => match TcpListener::bind(&addr).await {
            Ok(listener) => listener,
            Err(source) => return Err(ServerError::Bind { addr, source }),
        },
    };

    let addr = listener.local_addr().map_err(ServerError::Listen)?;
    tracing::info!(address = %addr, "http server listening");

    let mut connections = JoinSet::new();

    loop {
        let (stream, remote) = tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok(accepted) => accepted,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to accept connection");
                    continue;
                }
            },
            _ = token.cancelled() => break,
            // reap finished connections so the set does not grow unbounded
            Some(_) = connections.join_next(), if !connections.is_empty() => continue,
        };

        connections.spawn(serve_connection(stream, remote, router.clone(), token.clone()));
    }

    drop(listener);
    tracing::debug!(open = connections.len(), "listener closed, draining connections");

    while connections.join_next().await.is_some() {}

    Ok(())
}

/// Serve one connection; once the token is cancelled the in-flight request
/// may finish, then the connection is closed.
async fn serve_connection(
    stream: TcpStream,
    remote: SocketAddr,
    router: Router,
    token: CancellationToken,
) {
    let service = service_fn(move |request: Request<Incoming>| router.clone().call(request));
    let builder = auto::Builder::new(TokioExecutor::new());
    let connection = builder.serve_connection_with_upgrades(TokioIo::new(stream), service);
    tokio::pin!(connection);

    let result = tokio::select! {
        result = connection.as_mut() => result,
        _ = token.cancelled() => {
            connection.as_mut().graceful_shutdown();
            connection.await
        }
    };

    if let Err(e) = result {
        tracing::debug!(remote = %remote, error = %e, "connection closed with error");
    }
}

async fn watch_signal<F>(signal: F, token: CancellationToken) -> Result<(), ServerError>
where
    F: Future<Output = io::Result<&'static str>>,
{
    tokio::select! {
        received = signal => {
            let name = received.map_err(ServerError::Signal)?;
            tracing::info!(signal = name, "received termination signal");
            token.cancel();
            Err(ServerError::ExitSignal)
        }
        _ = token.cancelled() => Ok(()),
    }
}

async fn shutdown(
    token: CancellationToken,
    closed: oneshot::Receiver<()>,
    listener: AbortHandle,
    grace_period: Duration,
) -> Result<(), ServerError> {
    token.cancelled().await;
    tracing::info!("shutdown http server");

    if tokio::time::timeout(grace_period, closed).await.is_err() {
        tracing::error!(
            grace_period = ?grace_period,
            "http server did not stop within the grace period, aborting"
        );
        listener.abort();
    }

    Ok(())
}
