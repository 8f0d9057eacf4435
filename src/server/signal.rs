//! Operating-system termination signals.

use std::io;

/// Resolve once the process is asked to terminate, yielding the signal name.
///
/// Fails only when a handler cannot be installed.
#[cfg(unix)]
pub async fn terminated() -> io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    let mut quit = signal(SignalKind::quit())?;

    let name = tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
        _ = quit.recv() => "SIGQUIT",
    };

    Ok(name)
}

#[cfg(not(unix))]
pub async fn terminated() -> io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("ctrl-c")
}
