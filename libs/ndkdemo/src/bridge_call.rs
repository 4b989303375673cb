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

//! # Bridge Call
//!
//! The round trip between native code and the Activity that invoked it: read the
//! host's message, log it, then hand the configured greeting back.

use log::debug;

use crate::common::{BridgeError, MessageHost};
use crate::config::BridgeConfig;

/// Runs one bridge call against `host`.
///
/// Any failure is logged before being returned, and ends the call without touching
/// the host again. Nothing is retained between calls.
pub fn run_bridge_call<H: MessageHost>(
    host: &mut H,
    config: &BridgeConfig,
) -> Result<(), BridgeError> {
    host.with_message(|message| debug!("Message from Java: {}", message))
        .inspect_err(|e| debug!("{}", e))?;

    host.deliver_message(&config.greeting).inspect_err(|e| debug!("{}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::LOG_MESSAGE_METHOD;

    /// A host with both methods compiled in.
    struct StaticHost {
        message: &'static str,
        seen: Option<String>,
        delivered: Option<String>,
    }

    impl MessageHost for StaticHost {
        fn with_message<R>(&mut self, read: impl FnOnce(&str) -> R) -> Result<R, BridgeError> {
            self.seen = Some(self.message.to_string());
            Ok(read(self.message))
        }

        fn deliver_message(&mut self, message: &str) -> Result<(), BridgeError> {
            self.delivered = Some(message.to_string());
            Ok(())
        }
    }

    #[test]
    fn static_host_cannot_miss_a_method() {
        let _ = env_logger::try_init();
        let mut host = StaticHost { message: "Ping", seen: None, delivered: None };

        run_bridge_call(&mut host, &BridgeConfig::default()).unwrap();

        assert_eq!(host.seen.as_deref(), Some("Ping"));
        assert_eq!(host.delivered.as_deref(), Some("Hello From C++!"));
    }

    #[test]
    fn missing_receiver_is_returned() {
        struct NoReceiver;

        impl MessageHost for NoReceiver {
            fn with_message<R>(
                &mut self,
                read: impl FnOnce(&str) -> R,
            ) -> Result<R, BridgeError> {
                Ok(read("Ping"))
            }

            fn deliver_message(&mut self, _message: &str) -> Result<(), BridgeError> {
                Err(BridgeError::MethodNotFound(LOG_MESSAGE_METHOD))
            }
        }

        let _ = env_logger::try_init();
        let result = run_bridge_call(&mut NoReceiver, &BridgeConfig::default());
        assert!(matches!(result, Err(BridgeError::MethodNotFound("logMessageFromCpp"))));
    }
}
