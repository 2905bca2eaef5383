use std::sync::{Arc, Mutex, PoisonError};

use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use super::{Typewriter, TypewriterConfig, TypewriterError};

type Publisher = Arc<Mutex<Option<watch::Sender<String>>>>;

/// A running typewriter.
///
/// Owns one background task that sleeps for exactly one pending interval at
/// a time. Disposing (or dropping) the handle cancels that task and detaches
/// the publisher, so `current_text` is frozen once `dispose` returns.
#[derive(Debug)]
pub struct TypewriterHandle {
    text: watch::Receiver<String>,
    publisher: Publisher,
    cancellation_token: CancellationToken,
    task: JoinHandle<()>,
}

impl TypewriterHandle {
    /// Validates `config` and starts animating. Must be called within a tokio
    /// runtime.
    pub fn spawn(config: TypewriterConfig) -> Result<Self, TypewriterError> {
        let machine = Typewriter::new(&config)?;
        let (tx, text) = watch::channel(machine.text().to_string());
        let publisher = Arc::new(Mutex::new(Some(tx)));
        let cancellation_token = CancellationToken::new();
        let task = tokio::spawn(run(
            machine,
            Arc::clone(&publisher),
            cancellation_token.clone(),
        ));
        log::debug!("Typewriter started with {} phrases", config.phrases.len());

        Ok(Self {
            text,
            publisher,
            cancellation_token,
            task,
        })
    }

    pub fn current_text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.text.clone()
    }

    pub fn is_disposed(&self) -> bool {
        self.cancellation_token.is_cancelled()
    }

    pub fn dispose(&self) {
        self.cancellation_token.cancel();
        self.publisher
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        self.task.abort();
    }
}

impl Drop for TypewriterHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

async fn run(mut machine: Typewriter, publisher: Publisher, cancellation_token: CancellationToken) {
    let mut delay = machine.initial_delay();
    loop {
        tokio::select! {
            biased;
            _ = cancellation_token.cancelled() => break,
            _ = tokio::time::sleep(delay) => {}
        }

        let next = machine.tick();
        if !publish(&publisher, machine.text()) {
            break;
        }

        match next {
            Some(next) => delay = next,
            None => {
                log::debug!("Typewriter halted on phrase {}", machine.phrase_index());
                break;
            }
        }
    }
}

/// Returns false once the handle has been disposed.
fn publish(publisher: &Publisher, text: &str) -> bool {
    let guard = publisher.lock().unwrap_or_else(PoisonError::into_inner);
    let Some(tx) = guard.as_ref() else {
        return false;
    };
    tx.send_if_modified(|current| {
        if current == text {
            false
        } else {
            text.clone_into(current);
            true
        }
    });
    true
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use tokio::time::{timeout, Instant};

    use super::*;

    fn go_rust() -> TypewriterConfig {
        TypewriterConfig::new(["Go", "Rust"])
            .type_interval_ms(10)
            .delete_interval_ms(5)
    }

    async fn collect(rx: &mut watch::Receiver<String>, n: usize) -> Vec<(String, u128)> {
        let start = Instant::now();
        let mut out = Vec::new();
        for _ in 0..n {
            rx.changed().await.expect("publisher alive");
            out.push((rx.borrow_and_update().clone(), start.elapsed().as_millis()));
        }
        out
    }

    #[test]
    fn test_spawn_rejects_invalid_config_without_runtime() {
        let result = TypewriterHandle::spawn(TypewriterConfig::new(["Go"]).type_interval_ms(0));
        assert!(matches!(result, Err(TypewriterError::InvalidConfig(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_text_is_empty() {
        let handle = TypewriterHandle::spawn(go_rust()).expect("valid config");
        assert_eq!(handle.current_text(), "");
        assert!(!handle.is_disposed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_emits_expected_trace_with_timing() {
        let handle = TypewriterHandle::spawn(go_rust()).expect("valid config");
        let mut rx = handle.subscribe();
        let trace = collect(&mut rx, 13).await;
        let expected: Vec<(String, u128)> = [
            ("G", 10),
            ("Go", 20),
            ("G", 1025),
            ("", 1030),
            ("R", 1040),
            ("Ru", 1050),
            ("Rus", 1060),
            ("Rust", 1070),
            ("Rus", 2075),
            ("Ru", 2080),
            ("R", 2085),
            ("", 2090),
            ("G", 2100),
        ]
        .into_iter()
        .map(|(s, t)| (s.to_string(), t))
        .collect();
        assert_eq!(trace, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_looping_never_restarts() {
        let handle = TypewriterHandle::spawn(go_rust().loop_forever(false)).expect("valid config");
        let mut rx = handle.subscribe();
        let trace = collect(&mut rx, 12).await;
        assert_eq!(trace.last(), Some(&(String::new(), 2090)));

        let waited = timeout(Duration::from_secs(60), rx.changed()).await;
        assert!(waited.is_err(), "no change expected after halting");
        assert_eq!(handle.current_text(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_freezes_text() {
        let handle = TypewriterHandle::spawn(go_rust()).expect("valid config");
        let mut rx = handle.subscribe();
        collect(&mut rx, 2).await;
        assert_eq!(handle.current_text(), "Go");

        handle.dispose();
        assert!(handle.is_disposed());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(handle.current_text(), "Go");
        assert!(rx.changed().await.is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_dispose_while_typing_freezes_text() {
        let config = TypewriterConfig::new(["abcdefghijklmnopqrstuvwxyz", "0123456789"])
            .type_interval_ms(1)
            .delete_interval_ms(1)
            .pause_ms(1);
        for round in 0..20 {
            let handle = TypewriterHandle::spawn(config.clone()).expect("valid config");
            let mut rx = handle.subscribe();
            for _ in 0..=round % 7 {
                rx.changed().await.expect("publisher alive");
            }

            handle.dispose();
            let frozen = handle.current_text();
            rx.borrow_and_update();

            tokio::time::sleep(Duration::from_millis(20)).await;
            assert_eq!(handle.current_text(), frozen);
            assert!(rx.changed().await.is_err());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_is_idempotent() {
        let handle = TypewriterHandle::spawn(go_rust()).expect("valid config");
        handle.dispose();
        handle.dispose();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(handle.current_text(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_task() {
        let handle = TypewriterHandle::spawn(go_rust()).expect("valid config");
        let mut rx = handle.subscribe();
        drop(handle);
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(*rx.borrow_and_update(), "");
        assert!(rx.changed().await.is_err());
    }
}
