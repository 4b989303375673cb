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

//! Configuration for the bridge and its logger.

use log::LevelFilter;

use crate::common::{LOG_TAG, NATIVE_GREETING};

/// Settings shared by every bridge call in the process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Tag attached to device log lines.
    pub tag: String,
    /// Most verbose level the logger lets through.
    pub max_level: LevelFilter,
    /// Text handed to the host receiver.
    pub greeting: String,
}

impl BridgeConfig {
    /// Creates a config with the `NativeCode` tag, debug logging and the default greeting.
    pub fn new() -> Self {
        Self {
            tag: LOG_TAG.to_string(),
            max_level: LevelFilter::Debug,
            greeting: NATIVE_GREETING.to_string(),
        }
    }

    /// Sets the device log tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Sets the most verbose level that gets logged.
    pub fn with_max_level(mut self, max_level: LevelFilter) -> Self {
        self.max_level = max_level;
        self
    }

    /// Sets the text handed to the host receiver.
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }
}

impl Default for BridgeConfig {
    /// Same as ::new()
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_host_contract() {
        let config = BridgeConfig::default();
        assert_eq!(config.tag, "NativeCode");
        assert_eq!(config.max_level, LevelFilter::Debug);
        assert_eq!(config.greeting, "Hello From C++!");
    }

    #[test]
    fn builder_overrides_fields() {
        let config = BridgeConfig::new()
            .with_tag("Bridge")
            .with_max_level(LevelFilter::Warn)
            .with_greeting("Hi");
        assert_eq!(config.tag, "Bridge");
        assert_eq!(config.max_level, LevelFilter::Warn);
        assert_eq!(config.greeting, "Hi");
    }
}
