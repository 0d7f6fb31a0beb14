//! 朗读生命周期事件
//!
//! 把回调式生命周期映射为显式事件 {Started, Completed, Failed}，
//! 并在汇聚点保证:
//! - Started 在整个请求内至多发出一次（跨梯队去重）
//! - 终结事件（Completed 或 Failed）恰好一次，之后的事件被丢弃
//!
//! EventSink 同时承载 "已启动" 信号：speak 在第一个事件
//! （启动或终结失败）后即可返回，不必等播放结束。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use crate::application::error::SpeechFailure;

/// 一次朗读请求的生命周期事件
#[derive(Debug, Clone)]
pub enum SpeechEvent {
    /// 某个梯队已开始服务请求
    Started,
    /// 播放自然结束
    Completed,
    /// 链耗尽，请求整体失败
    Failed(SpeechFailure),
}

/// 调用方的生命周期回调
///
/// 三个回调都可省略；缺省时对应事件被静默丢弃
#[derive(Default)]
pub struct SpeechCallbacks {
    pub on_start: Option<Box<dyn Fn() + Send + Sync>>,
    pub on_end: Option<Box<dyn Fn() + Send + Sync>>,
    pub on_error: Option<Box<dyn Fn(&SpeechFailure) + Send + Sync>>,
}

impl SpeechCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_start(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    pub fn on_end(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_end = Some(Box::new(f));
        self
    }

    pub fn on_error(mut self, f: impl Fn(&SpeechFailure) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }
}

/// 事件汇聚点
///
/// 供应商通过它上报生命周期；去重守卫保证对外契约
#[derive(Clone)]
pub struct EventSink {
    inner: Arc<SinkInner>,
}

struct SinkInner {
    handler: Box<dyn Fn(&SpeechEvent) + Send + Sync>,
    started: AtomicBool,
    terminal: AtomicBool,
    initiated: Mutex<Option<oneshot::Sender<()>>>,
}

impl EventSink {
    /// 创建事件汇聚点，返回 "已启动" 信号的接收端
    pub fn new(
        handler: impl Fn(&SpeechEvent) + Send + Sync + 'static,
    ) -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        let sink = Self {
            inner: Arc::new(SinkInner {
                handler: Box::new(handler),
                started: AtomicBool::new(false),
                terminal: AtomicBool::new(false),
                initiated: Mutex::new(Some(tx)),
            }),
        };
        (sink, rx)
    }

    /// 从调用方回调构造
    pub fn from_callbacks(callbacks: SpeechCallbacks) -> (Self, oneshot::Receiver<()>) {
        Self::new(move |event| match event {
            SpeechEvent::Started => {
                if let Some(f) = &callbacks.on_start {
                    f();
                }
            }
            SpeechEvent::Completed => {
                if let Some(f) = &callbacks.on_end {
                    f();
                }
            }
            SpeechEvent::Failed(failure) => {
                if let Some(f) = &callbacks.on_error {
                    f(failure);
                }
            }
        })
    }

    /// 某梯队开始服务请求
    ///
    /// 跨梯队去重：前一梯队已发出 Started 后再失败回退，
    /// 后续梯队的 started 调用不再对外发事件
    pub fn started(&self) {
        if !self.inner.terminal.load(Ordering::SeqCst)
            && self
                .inner
                .started
                .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
        {
            (self.inner.handler)(&SpeechEvent::Started);
        }
        self.signal_initiated();
    }

    /// 播放自然结束（终结事件）
    pub fn completed(&self) {
        if self
            .inner
            .terminal
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            (self.inner.handler)(&SpeechEvent::Completed);
        }
        self.signal_initiated();
    }

    /// 链耗尽（终结事件）
    pub fn failed(&self, failure: SpeechFailure) {
        if self
            .inner
            .terminal
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            (self.inner.handler)(&SpeechEvent::Failed(failure));
        }
        self.signal_initiated();
    }

    pub fn has_started(&self) -> bool {
        self.inner.started.load(Ordering::SeqCst)
    }

    fn signal_initiated(&self) {
        if let Ok(mut guard) = self.inner.initiated.lock() {
            if let Some(tx) = guard.take() {
                let _ = tx.send(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting_sink() -> (EventSink, oneshot::Receiver<()>, Arc<[AtomicUsize; 3]>) {
        let counts: Arc<[AtomicUsize; 3]> = Arc::new(Default::default());
        let counts_clone = counts.clone();
        let (sink, rx) = EventSink::new(move |event| {
            let slot = match event {
                SpeechEvent::Started => 0,
                SpeechEvent::Completed => 1,
                SpeechEvent::Failed(_) => 2,
            };
            counts_clone[slot].fetch_add(1, Ordering::SeqCst);
        });
        (sink, rx, counts)
    }

    fn exhausted() -> SpeechFailure {
        SpeechFailure::Exhausted { attempts: vec![] }
    }

    #[test]
    fn test_started_deduplicated_across_tiers() {
        let (sink, _rx, counts) = counting_sink();
        sink.started();
        sink.started();
        sink.started();
        assert_eq!(counts[0].load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_exactly_one_terminal_event() {
        let (sink, _rx, counts) = counting_sink();
        sink.started();
        sink.completed();
        sink.completed();
        sink.failed(exhausted());
        assert_eq!(counts[1].load(Ordering::SeqCst), 1);
        assert_eq!(counts[2].load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_events_after_terminal_dropped() {
        let (sink, _rx, counts) = counting_sink();
        sink.failed(exhausted());
        sink.started();
        sink.completed();
        assert_eq!(counts[0].load(Ordering::SeqCst), 0);
        assert_eq!(counts[1].load(Ordering::SeqCst), 0);
        assert_eq!(counts[2].load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_initiated_signal_fires_on_start() {
        let (sink, rx, _counts) = counting_sink();
        sink.started();
        assert!(rx.await.is_ok());
    }

    #[tokio::test]
    async fn test_initiated_signal_fires_on_failure() {
        let (sink, rx, _counts) = counting_sink();
        sink.failed(exhausted());
        assert!(rx.await.is_ok());
    }
}
