use serde_json::{json, Value};

use super::Listener;
use crate::error;
use crate::model::*;
use crate::util::common::{unixtime_now, write_to_file};

// [EventWriter]
// persists the event log of each round as JSON under data/<unixtime>/
#[derive(Debug)]
pub struct EventWriter {
    start_time: u64,
    round_index: i32,
    record: Vec<Value>,
}

impl EventWriter {
    pub fn new() -> Self {
        Self {
            start_time: unixtime_now() as u64,
            round_index: 0,
            record: vec![],
        }
    }
}

impl Listener for EventWriter {
    fn notify_event(&mut self, _stg: &Stage, event: &Event) {
        let mut write = false;
        match event {
            Event::Begin(_) => {
                self.record.clear();
                self.start_time = unixtime_now() as u64;
                self.round_index = 0;
            }
            Event::Win(_) | Event::Draw(_) => {
                write = true;
            }
            _ => {}
        }

        self.record.push(json!(event));
        if write {
            if let Err(e) = write_to_file(
                &format!("data/{}/{:02}.json", self.start_time, self.round_index),
                &serde_json::to_string_pretty(&json!(self.record)).unwrap(),
            ) {
                error!("failed to write event log: {}", e);
            }
            self.record.clear();
            self.round_index += 1;
        }
    }
}
