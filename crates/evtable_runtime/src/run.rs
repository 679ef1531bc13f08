//! Driving a whole event stream through the processor.

use std::io::{self, Read, Write};

use evtable_engine::EventProcessor;
use evtable_foundation::Result;
use evtable_storage::{Event, EventRecord, EventRecordSink, RowWriter};
use tracing::info;

use crate::config::RunConfig;
use crate::serialize::{EventReader, MsgpackRowWriter, create_file, open_file};
use crate::synthetic::SyntheticEvents;

/// Counts from a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Events taken from the input.
    pub events: u64,
    /// Rows committed to the output.
    pub rows: u64,
}

/// Processes events until the input ends, `max_events` is reached, or an
/// event fails.
///
/// The sink is registered before the first event.
///
/// # Errors
///
/// Returns the first input, processing, or output error.
pub fn process_stream<I, W>(
    processor: &mut EventProcessor,
    events: I,
    sink: &mut EventRecordSink<W>,
    max_events: Option<u64>,
) -> Result<RunSummary>
where
    I: IntoIterator<Item = Result<Event>>,
    W: RowWriter,
{
    sink.register()?;
    let mut summary = RunSummary::default();

    for event in events {
        if max_events.is_some_and(|max| summary.events >= max) {
            break;
        }
        let event = event?;
        summary.events += 1;
        processor.run_event(&event, sink)?;
        summary.rows = sink.rows_written();
    }

    Ok(summary)
}

/// Runs the configured input through a fresh processor into the configured
/// output.
///
/// Synthetic events are used when `synthetic.events` is set; otherwise
/// events are read from `input`, or stdin. Rows go to `output`, or stdout.
///
/// # Errors
///
/// Returns the first error from opening files or processing events.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let output: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(create_file(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut sink = EventRecordSink::new(
        MsgpackRowWriter::new(output),
        EventRecord::schema(config.table.as_str()),
    );
    let mut processor = EventProcessor::new(config.engine.clone());

    let summary = if config.synthetic.events.is_some() {
        let events = SyntheticEvents::new(config.synthetic.clone()).map(Ok);
        process_stream(&mut processor, events, &mut sink, config.max_events)
    } else {
        let input: Box<dyn Read> = match &config.input {
            Some(path) => Box::new(open_file(path)?),
            None => Box::new(io::stdin().lock()),
        };
        process_stream(&mut processor, EventReader::new(input), &mut sink, config.max_events)
    };

    // Rows committed before a failure are still flushed.
    let finished = sink.finish();
    let summary = summary?;
    finished?;

    info!(
        events = summary.events,
        rows = summary.rows,
        table = %config.table,
        "run complete"
    );
    Ok(summary)
}
