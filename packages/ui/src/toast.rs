use std::time::Duration;

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Info => "toast info",
            ToastLevel::Success => "toast success",
            ToastLevel::Error => "toast error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    /// Milliseconds since the epoch after which the toast is removed.
    pub expires_at: f64,
}

/// Transient messages currently on screen.
#[derive(Clone, Debug)]
pub struct Toasts {
    entries: Vec<Toast>,
    next_id: u64,
    ttl_ms: f64,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Toasts {
    pub fn new(ttl_secs: u32) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            ttl_ms: f64::from(ttl_secs) * 1000.0,
        }
    }

    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>, now: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            level,
            message: message.into(),
            expires_at: now + self.ttl_ms,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }

    pub fn has_expired(&self, now: f64) -> bool {
        self.entries.iter().any(|t| t.expires_at <= now)
    }

    pub fn prune(&mut self, now: f64) {
        self.entries.retain(|t| t.expires_at > now);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show `message` for the configured duration.
pub fn show_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: &str) {
    match level {
        ToastLevel::Error => tracing::warn!("{message}"),
        _ => tracing::info!("{message}"),
    }
    toasts.write().push(level, message, now_ms());
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Renders the toasts and removes them once they expire. Click to dismiss.
#[component]
pub fn ToastStack() -> Element {
    let mut toasts = use_toasts();

    use_future(move || async move {
        loop {
            sleep(Duration::from_millis(250)).await;
            let now = now_ms();
            if toasts.peek().has_expired(now) {
                toasts.write().prune(now);
            }
        }
    });

    let entries = toasts.read().entries().to_vec();

    rsx! {
        div {
            class: "toasts",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: toast.level.class(),
                    onclick: move |_| toasts.write().dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_expire() {
        let mut toasts = Toasts::new(3);
        toasts.push(ToastLevel::Info, "Saindo...", 1_000.0);
        toasts.push(ToastLevel::Error, "Erro de conexão", 2_000.0);

        assert!(!toasts.has_expired(3_999.0));
        assert!(toasts.has_expired(4_000.0));

        toasts.prune(4_000.0);
        assert_eq!(toasts.entries().len(), 1);
        assert_eq!(toasts.entries()[0].message, "Erro de conexão");
    }

    #[test]
    fn test_dismiss() {
        let mut toasts = Toasts::default();
        let first = toasts.push(ToastLevel::Success, "ok", 0.0);
        let second = toasts.push(ToastLevel::Success, "ok again", 0.0);
        assert_ne!(first, second);

        toasts.dismiss(first);
        assert_eq!(toasts.entries().len(), 1);
        assert_eq!(toasts.entries()[0].id, second);
    }
}
