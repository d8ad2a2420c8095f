use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes a four-field sample log (`date time LEVEL message`) with the
/// requested number of lines, for benchmarks and manual runs.
fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <number-of-lines> <output-file>", args[0]);
        std::process::exit(1);
    }

    let num_lines: usize = match args[1].parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Invalid number of lines: {}", args[1]);
            std::process::exit(1);
        }
    };
    let file_path = &args[2];

    println!("Creating log file with {} lines at {}", num_lines, file_path);
    create_sample_logs(num_lines, file_path)?;
    println!("Log file created successfully.");

    Ok(())
}

fn create_sample_logs(lines: usize, file_path: &str) -> io::Result<()> {
    if let Some(parent) = Path::new(file_path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = BufWriter::new(File::create(file_path)?);

    for i in 0..lines {
        // Uneven mix so the count table has something to show
        let level = match i % 10 {
            0 => "ERROR",
            1 | 2 => "WARNING",
            3 => "DEBUG",
            _ => "INFO",
        };

        let message = match i % 8 {
            0 => "Disk usage above 90% on /var",
            1 => "Connection to db-primary timed out after 30s",
            2 => "User   admin logged in",
            3 => "Service started",
            4 => "Cache miss for key user_profile_123",
            5 => "Request processed in 150ms",
            6 => "Retrying job 42 (attempt 3)",
            _ => "Configuration reloaded from /etc/app.toml",
        };

        writeln!(
            file,
            "2024-01-{:02} {:02}:{:02}:{:02} {} {}",
            (i / 86_400) % 28 + 1,
            (i / 3600) % 24,
            (i / 60) % 60,
            i % 60,
            level,
            message
        )?;
    }

    file.flush()
}
