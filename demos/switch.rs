#[cfg(target_os = "macos")]
fn main() {
    use clap::Parser;
    use outswitch::*;
    use simplelog::*;

    /// Make an audio device the system default output
    #[derive(Parser)]
    struct Args {
        /// Id of the device, as printed by the `devices` demo
        #[arg(conflicts_with = "name", required_unless_present = "name")]
        id: Option<u32>,
        /// Select by device name instead, first match wins
        #[arg(long)]
        name: Option<String>,
        /// Show debug logging
        #[arg(short, long)]
        verbose: bool,
    }

    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = SimpleLogger::init(
        level,
        ConfigBuilder::new()
            .set_time_format_custom(format_description!("[hour]:[minute]:[second].[subsecond]"))
            .build(),
    );

    let selector = Selector::new(CoreAudioHost::new());
    let result = match (args.id, args.name) {
        (Some(id), _) => selector.set_default_output(DeviceId(id)).map(|_| DeviceId(id)),
        (None, Some(name)) => {
            let snapshot = Catalog::new(CoreAudioHost::new()).list_output_devices();
            selector.select_by_name(&name, &snapshot)
        }
        (None, None) => unreachable!("clap requires an id or a name"),
    };

    match result {
        Ok(id) => println!("Default output is now device {}", id),
        Err(err) => {
            eprintln!("Default output unchanged: {}", err);
            std::process::exit(1);
        }
    }
}

#[cfg(not(target_os = "macos"))]
fn main() {
    println!("This demo needs the CoreAudio host, which is only available on macOS");
}
