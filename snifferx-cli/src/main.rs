//! snifferx binary: capture loop wired to the dissector and renderer

use snifferx_capture::{default_interface, list_interfaces, CaptureConfig, FrameCapture};
use snifferx_cli::{render, Cli, Commands};
use snifferx_dissect::dissect;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::warn;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Interfaces) => print_interfaces(),
        None => sniff(&cli),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}

fn print_interfaces() -> Result<(), Box<dyn std::error::Error>> {
    for iface in list_interfaces()? {
        let mac = iface.mac.as_deref().unwrap_or("-");
        let state = if iface.is_up { "up" } else { "down" };
        println!("{:<16} {:<18} {:<5} {:?}", iface.name, mac, state, iface.ips);
    }
    Ok(())
}

fn sniff(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let interface = match &cli.interface {
        Some(name) => name.clone(),
        None => {
            let iface = default_interface()?;
            println!("Sniffing on: {} ({})", iface.name, iface.description);
            iface.name
        }
    };

    let config = CaptureConfig {
        snaplen: cli.snaplen,
        promiscuous: !cli.no_promiscuous,
        ..CaptureConfig::default()
    };

    let mut capture = FrameCapture::with_config(&interface, config)?;
    let stats = capture.stats_handle();

    let max_count = cli.count;
    let dissected = Arc::new(AtomicU64::new(0));
    let counter = Arc::clone(&dissected);

    capture.start(move |packet| {
        match dissect(packet.data()) {
            Ok(result) => {
                println!();
                print!("{}", render::render(&result));
                counter.fetch_add(1, Ordering::SeqCst);
            }
            Err(e) => {
                // One malformed frame never halts the loop
                stats.record_malformed();
                warn!("Skipping malformed frame on {}: {}", packet.interface, e);
            }
        }
    })?;

    // Wait until the frame budget is spent or the capture dies
    loop {
        thread::sleep(Duration::from_millis(100));

        if max_count > 0 && dissected.load(Ordering::SeqCst) >= max_count {
            break;
        }
        if !capture.is_running() {
            break;
        }
    }

    capture.stop()?;
    println!("\n{}", capture.stats().format());
    Ok(())
}
