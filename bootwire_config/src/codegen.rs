//! Generation of the `config` module included by bootwire.
use std::{fs::OpenOptions, io::Write, path::Path};

use anyhow::{anyhow, Result};
use proc_macro2::TokenStream;
use quote::quote;

use crate::{debug_uart::Uninitialized, event_pump::SocEvents, Configuration};

/// Name of the file written to the output directory.
pub const GENERATED_FILENAME: &str = "generated_config.rs";

/// Validates the configuration and writes its constants to
/// `<output_directory>/generated_config.rs`.
pub fn generate_modules<P: AsRef<Path>>(output_directory: P, configuration: &Configuration) -> Result<()> {
    if let Some(problem) = configuration.problems().next() {
        return Err(anyhow!("Invalid bootwire configuration: {}", problem));
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(output_directory.as_ref().join(GENERATED_FILENAME))?;

    write!(file, "{}", render(configuration))?;
    Ok(())
}

/// Renders the constants as Rust source.
pub fn render(configuration: &Configuration) -> String {
    let debug_uart = debug_uart_module(configuration);
    let event_pump = event_pump_module(configuration);
    quote! {
        #debug_uart
        #event_pump
    }
    .to_string()
}

fn optional<T: quote::ToTokens>(value: &Option<T>) -> TokenStream {
    match value {
        Some(value) => quote!(Some(#value)),
        None => quote!(None),
    }
}

fn debug_uart_module(configuration: &Configuration) -> TokenStream {
    let uart = &configuration.debug_uart;
    let pin = uart.pin;
    let baud_rate = uart.baud_rate;
    let settle_ms = uart.settle_ms;
    let pad = optional(&uart.inter_character_pad_ms);
    let initialize_on_first_use = uart.uninitialized == Uninitialized::InitializeOnFirstUse;
    let led = optional(&uart.status_led_pin);
    let banner = optional(&uart.banner.as_deref());

    quote! {
        pub mod debug_uart {
            pub const PIN: u8 = #pin;
            pub const BAUD_RATE: u32 = #baud_rate;
            pub const SETTLE_MS: u32 = #settle_ms;
            pub const INTER_CHARACTER_PAD_MS: Option<u32> = #pad;
            pub const INITIALIZE_ON_FIRST_USE: bool = #initialize_on_first_use;
            pub const STATUS_LED_PIN: Option<u8> = #led;
            pub const BANNER: Option<&str> = #banner;
        }
    }
}

fn event_pump_module(configuration: &Configuration) -> TokenStream {
    let pump = &configuration.event_pump;
    let task_name = pump.task_name.as_str();
    let stack_words = pump.stack_words;
    let priority = pump.priority;
    let soc_events_in_interrupt = pump.soc_events == SocEvents::InInterrupt;
    let max_observers = pump.max_observers;

    quote! {
        pub mod event_pump {
            pub const TASK_NAME: &str = #task_name;
            pub const STACK_WORDS: u16 = #stack_words;
            pub const PRIORITY: u8 = #priority;
            pub const SOC_EVENTS_IN_INTERRUPT: bool = #soc_events_in_interrupt;
            pub const MAX_OBSERVERS: usize = #max_observers;
        }
    }
}
