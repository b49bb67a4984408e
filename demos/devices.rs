#[cfg(target_os = "macos")]
fn main() {
    use outswitch::*;
    use simplelog::*;

    let _ = SimpleLogger::init(
        LevelFilter::Info,
        ConfigBuilder::new()
            .set_time_format_custom(format_description!("[hour]:[minute]:[second].[subsecond]"))
            .build(),
    );

    let catalog = Catalog::new(CoreAudioHost::new());
    let selector = Selector::new(CoreAudioHost::new());
    let current = selector.default_output().ok();

    println!("Found the following output devices:");
    for device in &catalog.list_output_devices() {
        let marker = if Some(device.id) == current { "*" } else { " " };
        println!("{} {:>4}: {}", marker, device.id, device.name);
    }
}

#[cfg(not(target_os = "macos"))]
fn main() {
    println!("This demo needs the CoreAudio host, which is only available on macOS");
}
