//! Reading already decoded events, one JSON document per line.

use std::io::BufRead;

use crate::events::{CombatLogNames, DemoEvent};
use crate::sink::DebugSink;
use crate::summary::DemoSummary;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read event stream: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed event on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub struct EventReader<R> {
    lines: std::io::Lines<R>,
    line: usize,
    limit: Option<usize>,
    delivered: usize,
}

impl<R> EventReader<R>
where
    R: BufRead,
{
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            limit: None,
            delivered: 0,
        }
    }

    /// Stops delivering events once `limit` of them have been read.
    pub fn with_frame_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn delivered(&self) -> usize {
        self.delivered
    }

    pub fn limit_reached(&self) -> bool {
        self.limit.map(|l| self.delivered >= l).unwrap_or(false)
    }
}

impl<R> Iterator for EventReader<R>
where
    R: BufRead,
{
    type Item = Result<DemoEvent, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.limit_reached() {
            return None;
        }

        loop {
            let line = match self.lines.next()? {
                Ok(l) => l,
                Err(e) => return Some(Err(e.into())),
            };
            self.line += 1;

            if line.trim().is_empty() {
                continue;
            }

            let event = serde_json::from_str(&line).map_err(|source| ParseError::Decode {
                line: self.line,
                source,
            });
            if event.is_ok() {
                self.delivered += 1;
            }
            return Some(event);
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub events: usize,
    pub combat_log_names: usize,
    /// Delivery stopped at the frame limit rather than the end of the stream
    pub truncated: bool,
}

/// Feeds every event of `events` into `summary`, keeping the combat log string
/// table up to date along the way.
///
/// Events nothing is routed to are handed to `sink` when one is given.
pub fn run<R>(
    mut events: EventReader<R>,
    summary: &mut DemoSummary,
    mut sink: Option<&mut dyn DebugSink>,
) -> Result<RunStats, ParseError>
where
    R: BufRead,
{
    let mut names = CombatLogNames::new();

    while let Some(event) = events.next() {
        let event = event?;

        let _tracing_guard = tracing::debug_span!("Event", index = events.delivered()).entered();

        match &event {
            DemoEvent::CombatLogNames(update) => {
                names.apply(update);
            }
            DemoEvent::TextMessage(_) | DemoEvent::Chat(_) | DemoEvent::Overhead(_) => {
                summary.handle(&event, &names);

                if let Some(sink) = sink.as_mut() {
                    if let Err(e) = sink.dump(&event) {
                        tracing::warn!(?e, "Failed to dump event");
                    }
                }
            }
            other => summary.handle(other, &names),
        };
    }

    let stats = RunStats {
        events: events.delivered(),
        combat_log_names: names.len(),
        truncated: events.limit_reached(),
    };
    tracing::debug!(?stats, "Finished event stream");

    Ok(stats)
}
