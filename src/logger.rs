use log::{LevelFilter, Log, Metadata, Record};

pub struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let location = match (record.file(), record.line()) {
                (Some(file), Some(line)) => format!("{}:{}", file, line),
                (Some(file), None) => file.to_string(),
                (None, _) => String::from("unknown location"),
            };

            println!(
                "[{level}][{target}][{location}] {message}",
                level = record.level(),
                target = record.target(),
                location = location,
                message = record.args()
            );
        }
    }

    fn flush(&self) {}
}

pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    static LOGGER: SimpleLogger = SimpleLogger;
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}
