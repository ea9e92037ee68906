//! Wire body construction for event batches

/// Literal stand-in for an absent event inside a batch
///
/// Kept for wire compatibility with earlier clients, which rendered
/// missing elements as this text instead of rejecting the batch.
const ABSENT_EVENT: &str = "null";

/// Encode a batch of events into a single wire body
///
/// Newlines inside an event are rewritten to carriage returns so the
/// service can reassemble multi-line events as one entry; newline then
/// delimits entries, and every event, including the last, is terminated
/// by one. Applied to every batch, single or multi-event.
///
/// Pure function: the same batch always yields the same body.
pub fn encode<I, S>(events: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut body = String::new();
    for event in events {
        match event {
            Some(event) => {
                for ch in event.as_ref().chars() {
                    body.push(if ch == '\n' { '\r' } else { ch });
                }
            }
            None => body.push_str(ABSENT_EVENT),
        }
        body.push('\n');
    }
    body
}
