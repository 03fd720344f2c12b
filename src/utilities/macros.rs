//! Convenience macros for the bootwire project
#![macro_use]

/// Define and export a specific port module (transparently pulls
/// its namespace to the current one).
///
/// Used mostly to conveniently fit the module declaration and reexport
/// under a single configuration flag.
///
/// # Example
/// ```ignore
/// #[cfg(feature = "nrf52832")]
/// port!(nrf52832: [debug_uart, event_pump,]);
/// // Expands into:
/// pub mod nrf52832 { pub mod debug_uart; pub mod event_pump; }
/// pub use self::nrf52832::debug_uart;
/// pub use self::nrf52832::event_pump;
/// ```
#[macro_export]
macro_rules! port {
    ($mod:ident) => {
        pub mod $mod;
        pub use self::$mod::*;
    };
    ($outer:ident: [$($inner:ident,)+]) => {
        pub mod $outer {
        $(
            pub mod $inner;
        )+
        }
        $(
            pub use self::$outer::$inner;
        )+
    };
}
