// Copyright (C) 2025 The Android Open Source Project
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # NDK demo native library
//!
//! This crate is the native half of the NDK demo. `MainActivity.callJavaFromCpp()`
//! enters it over JNI; the library reads the Activity's message, logs it, and passes
//! a greeting back through `MainActivity.logMessageFromCpp(String)`.
//!
//! The round trip itself is written against the `MessageHost` trait, so it can be
//! driven by any host. The JNI-backed host lives in `bindings`.

/// JNI entry points and the `MessageHost` implementation for the Activity.
pub mod bindings;
/// The native-to-host round trip.
pub mod bridge_call;
/// Defines the host contract, the error type and the capability trait.
pub mod common;
/// Logger and greeting configuration.
pub mod config;

pub use bridge_call::run_bridge_call;
pub use common::{BridgeError, MessageHost};
pub use config::BridgeConfig;

/// Installs the process logger described by `config`.
///
/// Only the first call has an effect; later calls are ignored.
pub fn init_logging(config: &BridgeConfig) {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_tag(config.tag.as_str())
            .with_max_level(config.max_level),
    );

    #[cfg(not(target_os = "android"))]
    {
        let _ = env_logger::Builder::new().filter_level(config.max_level).try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_twice() {
        let config = BridgeConfig::default();
        init_logging(&config);
        init_logging(&config.with_max_level(log::LevelFilter::Trace));
        log::debug!("logger installed");
    }
}
