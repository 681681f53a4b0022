use std::sync::{Arc, Mutex};

use common::game::GameSnapshot;
use ringbuffer::{AllocRingBuffer, RingBuffer};

pub const EVENT_LOG_CAPACITY: usize = 64;

pub struct SharedState {
    snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    event_log: Arc<Mutex<AllocRingBuffer<String>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            event_log: Arc::new(Mutex::new(AllocRingBuffer::new(EVENT_LOG_CAPACITY))),
        }
    }

    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        *self.snapshot.lock().unwrap() = Some(snapshot);
    }

    pub fn snapshot(&self) -> Option<GameSnapshot> {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn push_event(&self, line: String) {
        self.event_log.lock().unwrap().enqueue(line);
    }

    pub fn events(&self) -> Vec<String> {
        self.event_log.lock().unwrap().iter().cloned().collect()
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
            event_log: Arc::clone(&self.event_log),
        }
    }
}
