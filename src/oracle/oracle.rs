use super::message::Message;

/// A text-in, text-out completion service that proposes and judges moves.
///
/// Implementations may be slow and may return malformed text; callers parse
/// defensively. Errors are reserved for transport failures. Timeouts and
/// retries belong to the implementation or to a wrapper like
/// [`Patient`](super::Patient), never to the search.
#[async_trait::async_trait]
pub trait Oracle: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> anyhow::Result<String>;

    /// A system directive followed by one user prompt.
    async fn ask(&self, directive: &str, prompt: String) -> anyhow::Result<String> {
        self.complete(&[Message::system(directive), Message::user(prompt)])
            .await
    }
}

#[async_trait::async_trait]
impl<O> Oracle for std::sync::Arc<O>
where
    O: Oracle + ?Sized,
{
    async fn complete(&self, messages: &[Message]) -> anyhow::Result<String> {
        self.as_ref().complete(messages).await
    }
}

#[async_trait::async_trait]
impl<O> Oracle for Box<O>
where
    O: Oracle + ?Sized,
{
    async fn complete(&self, messages: &[Message]) -> anyhow::Result<String> {
        self.as_ref().complete(messages).await
    }
}
