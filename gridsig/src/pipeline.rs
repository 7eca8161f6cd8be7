use gridsig_core::{Sink, Source};

/// Why [`forward`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardEnd {
    /// The source's output channel closed.
    SourceClosed,
    /// The sink's input no longer accepts signals.
    SinkClosed,
}

/// Move signals from `source` to `sink`, in order, until either side goes away.
///
/// Returns the number of signals delivered and which side ended the transfer. Neither
/// actor is closed here.
pub async fn forward<S, K>(source: &mut S, sink: &K) -> (usize, ForwardEnd)
where
    S: Source + ?Sized,
    K: Sink + ?Sized,
{
    let mut delivered = 0usize;
    while let Some(signal) = source.output().recv().await {
        if sink.input().send(signal).await.is_err() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                source = source.name(),
                sink = sink.name(),
                "sink stopped accepting signals"
            );
            return (delivered, ForwardEnd::SinkClosed);
        }
        delivered += 1;
    }
    #[cfg(feature = "tracing")]
    tracing::info!(source = source.name(), delivered, "source closed");
    (delivered, ForwardEnd::SourceClosed)
}
