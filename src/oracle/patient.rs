use super::*;
use std::time::Duration;

/// Wraps an oracle with a per-call deadline and a bounded number of retries.
///
/// The search itself never times out or retries; this is the policy a caller
/// opts into at the oracle boundary.
pub struct Patient<O>
where
    O: Oracle,
{
    inner: O,
    timeout: Duration,
    retries: usize,
}

impl<O> Patient<O>
where
    O: Oracle,
{
    pub fn new(inner: O, timeout: Duration, retries: usize) -> Self {
        Self {
            inner,
            timeout,
            retries,
        }
    }
}

#[async_trait::async_trait]
impl<O> Oracle for Patient<O>
where
    O: Oracle,
{
    async fn complete(&self, messages: &[Message]) -> anyhow::Result<String> {
        for attempt in 1..=self.retries + 1 {
            match tokio::time::timeout(self.timeout, self.inner.complete(messages)).await {
                Ok(Ok(text)) => return Ok(text),
                Ok(Err(e)) => log::warn!("oracle attempt {} failed: {}", attempt, e),
                Err(_) => log::warn!("oracle attempt {} timed out after {:?}", attempt, self.timeout),
            }
        }
        Err(anyhow::anyhow!(
            "oracle gave no answer after {} attempts",
            self.retries + 1
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    struct Flaky {
        failures: usize,
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Oracle for Flaky {
        async fn complete(&self, _: &[Message]) -> anyhow::Result<String> {
            match self.calls.fetch_add(1, Ordering::Relaxed) < self.failures {
                true => Err(anyhow::anyhow!("connection reset")),
                false => Ok("<action>x</action>".to_string()),
            }
        }
    }

    struct Asleep;

    #[async_trait::async_trait]
    impl Oracle for Asleep {
        async fn complete(&self, _: &[Message]) -> anyhow::Result<String> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(String::new())
        }
    }

    #[tokio::test]
    async fn retries_until_success() {
        let flaky = Flaky {
            failures: 2,
            calls: AtomicUsize::new(0),
        };
        let oracle = Patient::new(flaky, Duration::from_secs(1), 2);
        assert_eq!(oracle.ask("s", "p".into()).await.unwrap(), "<action>x</action>");
        assert_eq!(oracle.inner.calls.load(Ordering::Relaxed), 3);
    }

    #[tokio::test]
    async fn gives_up_after_budget() {
        let flaky = Flaky {
            failures: 5,
            calls: AtomicUsize::new(0),
        };
        let oracle = Patient::new(flaky, Duration::from_secs(1), 1);
        assert!(oracle.ask("s", "p".into()).await.is_err());
        assert_eq!(oracle.inner.calls.load(Ordering::Relaxed), 2);
    }

    #[tokio::test]
    async fn times_out_hung_calls() {
        let oracle = Patient::new(Asleep, Duration::from_millis(10), 0);
        assert!(oracle.ask("s", "p".into()).await.is_err());
    }
}
