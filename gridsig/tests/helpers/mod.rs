#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gridsig::sink::{Light, TrafficLight};
use gridsig::{GridError, Signal, Source};
use tokio::sync::mpsc;

/// Records every write; optionally fails the next `fail_next` writes.
#[derive(Clone, Default)]
pub struct RecordingLight {
    pub writes: Arc<Mutex<Vec<Light>>>,
    pub fail_next: Arc<Mutex<usize>>,
}

impl RecordingLight {
    pub fn writes(&self) -> Vec<Light> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl TrafficLight for RecordingLight {
    async fn set(&mut self, light: Light) -> Result<(), GridError> {
        {
            let mut fail = self.fail_next.lock().unwrap();
            if *fail > 0 {
                *fail -= 1;
                return Err(GridError::Hardware("relay did not respond".into()));
            }
        }
        self.writes.lock().unwrap().push(light);
        Ok(())
    }
}

/// A source fed directly by the test through `feed`.
pub struct ChannelSource {
    pub feed: Option<mpsc::Sender<Signal>>,
    rx: mpsc::Receiver<Signal>,
}

impl ChannelSource {
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(capacity);
        Self { feed: Some(tx), rx }
    }
}

#[async_trait]
impl Source for ChannelSource {
    fn name(&self) -> &'static str {
        "test-channel"
    }

    fn output(&mut self) -> &mut mpsc::Receiver<Signal> {
        &mut self.rx
    }

    async fn close(&mut self) -> Result<(), GridError> {
        self.feed.take();
        Ok(())
    }
}

pub fn signal(relative_value: i8) -> Signal {
    Signal {
        name: "Test".into(),
        relative_value,
        raw_value: f64::from(relative_value),
        raw_unit: "units".into(),
    }
}
