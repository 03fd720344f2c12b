//! Logging through `defmt` on target.
//!
//! On the host the macros only evaluate their arguments, so test
//! binaries link without a global `defmt` logger.
#![macro_use]
#![allow(unused_macros)]

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::trace!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            { $( let _ = &$x; )* }
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            { $( let _ = &$x; )* }
        }
    };
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::info!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            { $( let _ = &$x; )* }
        }
    };
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::warn!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            { $( let _ = &$x; )* }
        }
    };
}

macro_rules! error {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::error!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            { $( let _ = &$x; )* }
        }
    };
}
