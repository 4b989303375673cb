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

//! # Common
//!
//! This module contains the host contract shared by the bridge and its bindings:
//! the names and signatures of the Activity methods, the error type and the
//! `MessageHost` trait.

use thiserror::Error;

/// Tag used for every line written to the device log.
pub const LOG_TAG: &str = "NativeCode";

/// The string handed back to the Activity unless configured otherwise.
pub const NATIVE_GREETING: &str = "Hello From C++!";

/// Accessor on the Activity returning the message to log.
pub const GET_MESSAGE_METHOD: &str = "getMessageFromJava";
/// JNI signature of [`GET_MESSAGE_METHOD`].
pub const GET_MESSAGE_SIG: &str = "()Ljava/lang/String;";

/// Receiver on the Activity accepting the native message.
pub const LOG_MESSAGE_METHOD: &str = "logMessageFromCpp";
/// JNI signature of [`LOG_MESSAGE_METHOD`].
pub const LOG_MESSAGE_SIG: &str = "(Ljava/lang/String;)V";

/// Reasons a bridge call stops before completing.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The host object has no method with the expected name and signature.
    #[error("Method {0} not found")]
    MethodNotFound(&'static str),
    /// The accessor returned `null` instead of a string.
    #[error("Method {0} returned null")]
    NullMessage(&'static str),
    /// Any other failure while talking to the host runtime.
    #[error("Host call failed: {0:#}")]
    Host(#[from] anyhow::Error),
}

/// The two capabilities the bridge needs from the object that invoked it.
///
/// Implementations backed by a reflective runtime resolve each method lazily, so a
/// missing receiver is only reported after the message has been read.
pub trait MessageHost {
    /// Fetches the host's message and passes a borrowed view of it to `read`.
    ///
    /// The view is released when `read` returns; it cannot escape the closure.
    fn with_message<R>(&mut self, read: impl FnOnce(&str) -> R) -> Result<R, BridgeError>;

    /// Hands `message` to the host.
    fn deliver_message(&mut self, message: &str) -> Result<(), BridgeError>;
}
