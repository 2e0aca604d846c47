use super::*;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Oracle backed by a plain function of the request.
///
/// Handy for deterministic judges and proposal generators; counts calls.
pub struct Stub<F>
where
    F: Fn(&[Message]) -> String + Send + Sync,
{
    respond: F,
    calls: AtomicUsize,
}

impl<F> Stub<F>
where
    F: Fn(&[Message]) -> String + Send + Sync,
{
    pub fn new(respond: F) -> Self {
        Self {
            respond,
            calls: AtomicUsize::new(0),
        }
    }
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait::async_trait]
impl<F> Oracle for Stub<F>
where
    F: Fn(&[Message]) -> String + Send + Sync,
{
    async fn complete(&self, messages: &[Message]) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok((self.respond)(messages))
    }
}

/// Text of the last user block in a request.
pub fn prompt_of(messages: &[Message]) -> &str {
    messages
        .iter()
        .rev()
        .find(|m| m.speaker == Speaker::User)
        .map(|m| m.content.as_str())
        .unwrap_or_default()
}
