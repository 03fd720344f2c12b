use anyhow::Result;
use bootwire_config::{codegen::generate_modules, Configuration};
use std::{
    env,
    fs::{self, File},
    io::{BufReader, Read},
    path::PathBuf,
};

const DEFAULT_CONFIG_FILENAME: &str = "./bootwire_config/sample_configurations/default_config.ron";

fn main() -> Result<()> {
    process_configuration_file()?;
    #[cfg(feature = "nrf52832")]
    configure_memory_x("nrf52832.x")?;
    Ok(())
}

/// Places the chip's memory layout where the `cortex-m-rt` linker script
/// looks for `memory.x`.
#[allow(unused)]
fn configure_memory_x(file: &str) -> Result<()> {
    let filename = format!("memory/{}", file);
    println!("cargo:rerun-if-changed={}", &filename);

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    fs::copy(&filename, out_dir.join("memory.x"))?;
    println!("cargo:rustc-link-search={}", out_dir.display());
    Ok(())
}

fn process_configuration_file() -> Result<()> {
    println!("cargo:rerun-if-env-changed=BOOTWIRE_CONFIG");
    println!("cargo:rerun-if-changed={}", DEFAULT_CONFIG_FILENAME);

    let filename = env::var("BOOTWIRE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILENAME.into());
    println!("cargo:rerun-if-changed={}", filename);

    let file = File::open(&filename)?;
    let mut buf_reader = BufReader::new(file);
    let mut contents = String::new();
    buf_reader.read_to_string(&mut contents)?;
    let configuration: Configuration = ron::from_str(&contents)?;
    generate_modules(env::var("OUT_DIR")?, &configuration)?;

    Ok(())
}
