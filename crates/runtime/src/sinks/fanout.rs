//! Broadcast of battle events to several sinks.

use arena_core::{BattleEvent, BattleSink};

/// Forwards each event to every registered sink, in registration order.
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Box<dyn BattleSink + Send>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, sink: impl BattleSink + Send + 'static) -> Self {
        self.push(sink);
        self
    }

    pub fn push(&mut self, sink: impl BattleSink + Send + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl std::fmt::Debug for FanoutSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanoutSink")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl BattleSink for FanoutSink {
    fn write(&mut self, event: &BattleEvent) {
        for sink in &mut self.sinks {
            sink.write(event);
        }
    }
}
