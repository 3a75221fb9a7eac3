use std::io::Write;
use tyr::{GeneralResult, RequestInfo, Settings, TyrWorker};

const USAGE: &str = "usage: tyr-worker <control-block-file> <trip-directions-file> [request-id]";

fn main() -> GeneralResult {
    if let Err(e) = init_logger() {
        eprintln!("Couldn't initialize global logger: {e}");
        return Err(e);
    }

    if let Err(e) = start() {
        log::error!("{e}");
        return Err(e);
    }

    Ok(())
}

/// Reads one two part job from disk, runs it through a worker and writes
/// the raw http response to stdout.
fn start() -> GeneralResult {
    let mut args = std::env::args().skip(1);
    let control_path = args.next().ok_or(USAGE)?;
    let payload_path = args.next().ok_or(USAGE)?;
    let id = match args.next() {
        Some(id) => id.parse()?,
        None => 0,
    };

    let worker = TyrWorker::with(settings()?);
    let job = vec![std::fs::read(control_path)?, std::fs::read(payload_path)?];

    let result = worker.work(&job, &RequestInfo::new(id));
    let mut stdout = std::io::stdout().lock();
    for message in result.messages {
        stdout.write_all(message.as_bytes())?;
    }
    stdout.flush()?;

    Ok(())
}

fn settings() -> Result<Settings, &'static str> {
    Ok(Settings {
        proxy: std::env::var("TYR_PROXY").map_err(|_| "missing TYR_PROXY environment variable")?,
        loopback: std::env::var("TYR_LOOPBACK")
            .map_err(|_| "missing TYR_LOOPBACK environment variable")?,
    })
}

fn init_logger() -> GeneralResult {
    env_logger::builder()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {:<28} {}",
                chrono::Local::now().format("%m/%d/%Y %H:%M:%S"),
                record.level(),
                record.module_path().unwrap_or(""),
                record.args()
            )
        })
        .target(if let Ok(log_file) = std::env::var("LOG_FILE") {
            let file = std::fs::File::options()
                .append(true)
                .create(true)
                .open(log_file)?;
            let writer = std::io::LineWriter::new(file);
            env_logger::Target::Pipe(Box::new(writer))
        } else {
            env_logger::Target::Stderr
        })
        .init();

    Ok(())
}
