//! Call annotations.
//!
//! [`lang`] wraps a callable so that every invocation first emits a
//! human-readable message as a `tracing` event, then forwards the argument
//! and return value unchanged.

/// Annotate `f` with `message`.
///
/// Multiple arguments are passed as a tuple. Wrappers stack; the outermost
/// message is emitted first.
///
/// ```ignore
/// let generate_story = lang("Initializing the story generation pipeline", |prompt: &str| {
///     format!("Once upon a time, there was a {prompt}...")
/// });
/// let story = generate_story("magical AI assistant");
/// ```
pub fn lang<A, R, F>(message: impl Into<String>, f: F) -> impl Fn(A) -> R
where
    F: Fn(A) -> R,
{
    let message = message.into();
    move |args| {
        tracing::info!(target: "gunit::lang", "{}", message);
        f(args)
    }
}
