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

use anyhow::Context;
use jni::errors::Error as JniError;
use jni::objects::{AutoLocal, JClass, JMethodID, JObject, JString, JValue};
use jni::signature::{Primitive, ReturnType};
use jni::JNIEnv;
use log::{error, trace};
use std::borrow::Cow;

use crate::common::{
    BridgeError, MessageHost, GET_MESSAGE_METHOD, GET_MESSAGE_SIG, LOG_MESSAGE_METHOD,
    LOG_MESSAGE_SIG,
};

/// The Activity that entered native code, seen through the JNI environment of the call.
///
/// Methods are resolved by name and signature on first use. Every local reference
/// created here is owned by an `AutoLocal` and deleted before the method that made it
/// returns.
pub struct JniActivity<'a, 'local> {
    env: &'a mut JNIEnv<'local>,
    activity: &'a JObject<'local>,
    class: AutoLocal<'local, JClass<'local>>,
}

impl<'a, 'local> JniActivity<'a, 'local> {
    /// Wraps the `thiz` reference passed to a native method.
    pub fn new(
        env: &'a mut JNIEnv<'local>,
        activity: &'a JObject<'local>,
    ) -> Result<Self, BridgeError> {
        let class = env.get_object_class(activity).context("Failed to get the activity class")?;
        let class = env.auto_local(class);
        Ok(Self { env, activity, class })
    }

    fn find_method(&mut self, name: &'static str, sig: &str) -> Result<JMethodID, BridgeError> {
        let class: &JClass<'local> = &self.class;
        match self.env.get_method_id(class, name, sig) {
            Ok(method) => Ok(method),
            Err(JniError::MethodNotFound { .. } | JniError::JavaException) => {
                // The failed lookup leaves a NoSuchMethodError pending, reported either
                // as a missing method or as the exception itself. The call ends quietly,
                // so the host must not see it.
                if let Err(e) = self.env.exception_clear() {
                    error!("Failed to clear the pending exception: {}", e);
                }
                Err(BridgeError::MethodNotFound(name))
            }
            Err(e) => {
                Err(anyhow::Error::new(e).context(format!("Failed to look up {}", name)).into())
            }
        }
    }
}

impl<'local> MessageHost for JniActivity<'_, 'local> {
    fn with_message<R>(&mut self, read: impl FnOnce(&str) -> R) -> Result<R, BridgeError> {
        let method = self.find_method(GET_MESSAGE_METHOD, GET_MESSAGE_SIG)?;

        // SAFETY: `method` was resolved on the class of `self.activity` with
        // `GET_MESSAGE_SIG`, which takes no arguments and returns an object.
        let value = unsafe {
            self.env.call_method_unchecked(self.activity, method, ReturnType::Object, &[])
        }
        .context("Failed to call getMessageFromJava")?;
        let message =
            self.env.auto_local(JString::from(value.l().context("Unexpected return type")?));
        if message.is_null() {
            return Err(BridgeError::NullMessage(GET_MESSAGE_METHOD));
        }

        // The checked `get_string` leaves two local refs to the String class behind.
        // SAFETY: `message` is non-null and `GET_MESSAGE_SIG` declares a java.lang.String
        // return, which is final, so the reference is a valid String.
        let view = unsafe { self.env.get_string_unchecked(&message) }
            .context("Failed to read the message")?;
        let text: Cow<'_, str> = (&view).into();
        trace!("Read {} bytes from {}", text.len(), GET_MESSAGE_METHOD);
        Ok(read(&text))
    }

    fn deliver_message(&mut self, message: &str) -> Result<(), BridgeError> {
        let method = self.find_method(LOG_MESSAGE_METHOD, LOG_MESSAGE_SIG)?;

        let greeting = self.env.new_string(message).context("Failed to create the message")?;
        let greeting = self.env.auto_local(greeting);
        let greeting_obj: &JObject<'local> = &greeting;
        let args = [JValue::Object(greeting_obj).as_jni()];

        // SAFETY: `method` was resolved on the class of `self.activity` with
        // `LOG_MESSAGE_SIG`, which takes a single String and returns void. `args` holds
        // exactly that String.
        unsafe {
            self.env.call_method_unchecked(
                self.activity,
                method,
                ReturnType::Primitive(Primitive::Void),
                &args,
            )
        }
        .context("Failed to call logMessageFromCpp")?;
        Ok(())
    }
}
