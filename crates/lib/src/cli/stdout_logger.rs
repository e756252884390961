use log::Log;

pub(crate) struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        println!(
            "{target}: {}: {}",
            record.level(),
            record.args(),
            target = record.target()
        );
    }

    fn flush(&self) {}
}
