use std::io::{self, BufRead, Write};

use tracing::error;
use tracing_subscriber::EnvFilter;
use visitor_log::{checkin::CheckIn, config::CONFIG};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let checkin = {
        let config = CONFIG.lock().unwrap_or_else(|e| e.into_inner());
        CheckIn::from_config(&config)
    };

    if let Err(e) = checkin.store().ensure_exists() {
        error!("failed to create {}: {}", checkin.store().path().display(), e);
        println!("Error: {}", e);
        return;
    }

    let name = match prompt_name(&mut io::stdout(), &mut io::stdin().lock()) {
        Ok(name) => name,
        Err(e) => {
            error!("failed to read visitor name: {}", e);
            println!("Error: {}", e);
            return;
        }
    };

    match checkin.add_visitor(&name) {
        Ok(_) => println!("Visitor added successfully!"),
        Err(e) => {
            if !e.is_rejection() {
                error!("check-in failed: {}", e);
            }
            println!("Error: {}", e);
        }
    }
}

fn prompt_name<W: Write, R: BufRead>(out: &mut W, input: &mut R) -> io::Result<String> {
    write!(out, "Enter visitor's name: ")?;
    out.flush()?;

    let mut name = String::new();
    input.read_line(&mut name)?;
    Ok(name.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn prompt_trims_entered_name() {
        let mut out = Vec::new();
        let name = prompt_name(&mut out, &mut Cursor::new("  Alice \n")).unwrap();
        assert_eq!(name, "Alice");
        assert_eq!(out, b"Enter visitor's name: ");
    }

    #[test]
    fn prompt_reports_flush_failure() {
        let err = prompt_name(&mut BrokenPipe, &mut Cursor::new("Alice\n")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
