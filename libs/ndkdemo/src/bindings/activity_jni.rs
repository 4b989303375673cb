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

use jni::objects::JObject;
use jni::sys::{jint, JavaVM, JNI_VERSION_1_6};
use jni::JNIEnv;
use log::{error, trace};
use std::ffi::c_void;
use std::sync::LazyLock;

use crate::bindings::JniActivity;
use crate::bridge_call::run_bridge_call;
use crate::config::BridgeConfig;
use crate::init_logging;

// Configuration shared by all calls. Created on first use.
static BRIDGE_CONFIG: LazyLock<BridgeConfig> = LazyLock::new(BridgeConfig::default);

/// Sets up logging when the runtime loads the library.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn JNI_OnLoad(_vm: *mut JavaVM, _reserved: *mut c_void) -> jint {
    init_logging(&BRIDGE_CONFIG);
    trace!("Native library loaded");
    JNI_VERSION_1_6
}

/// Reads the Activity's message and hands the greeting back.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_com_cmder_ndkdemo_MainActivity_callJavaFromCpp<'local>(
    mut env: JNIEnv<'local>,
    thiz: JObject<'local>,
) {
    let mut activity = match JniActivity::new(&mut env, &thiz) {
        Ok(activity) => activity,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    // The method is void on the Java side, so failures end here. They were logged
    // by the bridge call.
    if run_bridge_call(&mut activity, &BRIDGE_CONFIG).is_ok() {
        trace!("callJavaFromCpp complete");
    }
}
