use super::FormRecord;

/// Receives the record after a successful submit.
pub trait Notifier {
    fn notify(&mut self, record: FormRecord);
}

impl<F> Notifier for F
where
    F: FnMut(FormRecord),
{
    fn notify(&mut self, record: FormRecord) {
        self(record)
    }
}

/// Default notifier: reports the submission through the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, record: FormRecord) {
        log::info!(
            "Form submitted: name={:?}, address={:?}",
            record.name,
            record.address
        );
    }
}
