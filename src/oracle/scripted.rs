use super::*;
use anyhow::Context;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays canned completions in order, then answers with empty text.
///
/// Every request is recorded so callers can inspect what was asked.
#[derive(Debug, Default)]
pub struct Scripted {
    replies: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<Vec<Message>>>,
}

impl Scripted {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }
    /// Read a JSON array of completion strings.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read script from {}", path.display()))?;
        let replies = serde_json::from_str::<Vec<String>>(&text)
            .with_context(|| format!("parse script in {}", path.display()))?;
        Ok(Self::new(replies))
    }
    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
    pub fn remaining(&self) -> usize {
        self.replies.lock().map(|r| r.len()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl Oracle for Scripted {
    async fn complete(&self, messages: &[Message]) -> anyhow::Result<String> {
        self.requests
            .lock()
            .map_err(|_| anyhow::anyhow!("script request log poisoned"))?
            .push(messages.to_vec());
        let reply = self
            .replies
            .lock()
            .map_err(|_| anyhow::anyhow!("script poisoned"))?
            .pop_front()
            .unwrap_or_default();
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_then_goes_quiet() {
        let oracle = Scripted::new(["one", "two"]);
        assert_eq!(oracle.ask("sys", "a".into()).await.unwrap(), "one");
        assert_eq!(oracle.ask("sys", "b".into()).await.unwrap(), "two");
        assert_eq!(oracle.ask("sys", "c".into()).await.unwrap(), "");
        let requests = oracle.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[1][0], Message::system("sys"));
        assert_eq!(requests[1][1], Message::user("b"));
    }

    #[tokio::test]
    async fn loads_replies_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.json");
        std::fs::write(&path, r#"["<action>x</action>", "[[1]]"]"#).unwrap();
        let oracle = Scripted::load(&path).unwrap();
        assert_eq!(oracle.remaining(), 2);
        assert_eq!(oracle.ask("sys", "p".into()).await.unwrap(), "<action>x</action>");
        assert_eq!(oracle.remaining(), 1);
    }

    #[test]
    fn script_must_be_a_string_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.json");
        std::fs::write(&path, r#"{ "replies": 3 }"#).unwrap();
        let error = format!("{:#}", Scripted::load(&path).unwrap_err());
        assert!(error.starts_with("parse script in"));
        assert!(error.contains("script.json"));
    }
}
