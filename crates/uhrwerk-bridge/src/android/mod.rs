// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android platform bridge via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. The transport talks to the Google Play
// Services Wearable Data Layer: connected nodes are resolved through
// `NodeClient.getConnectedNodes`, payloads are submitted through
// `MessageClient.sendMessage`.
//
// `Tasks.await` blocks the calling thread until the Play Services task
// settles, so the whole JNI interaction runs under
// `tokio::task::spawn_blocking` to keep the async contract honest.

#![cfg(target_os = "android")]

use jni::objects::{JByteArray, JObject, JString, JValue};
use jni::{AttachGuard, JNIEnv};
use tracing::debug;

use uhrwerk_core::error::{Result, SyncError};

use crate::traits::{AppLifecycle, WearableTransport};

// ---------------------------------------------------------------------------
// JNI bootstrap helpers
// ---------------------------------------------------------------------------

/// Obtain an attached [`JNIEnv`] from the global Android context.
///
/// Calls `ndk_context::android_context()` to retrieve the `JavaVM*` pointer
/// set by `android_main` or `ANativeActivity_onCreate`, then attaches the
/// current thread if it is not already attached.
fn jni_env() -> Result<AttachGuard<'static>> {
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` returns the `JavaVM*` set by the NDK glue code.
    // The pointer is guaranteed valid for the lifetime of the process.
    let vm = unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| SyncError::Bridge(format!("failed to obtain JavaVM: {e}")))?;
    let guard = vm
        .attach_current_thread()
        .map_err(|e| SyncError::Bridge(format!("failed to attach JNI thread: {e}")))?;
    // SAFETY: the guard borrows a JavaVM whose lifetime is the whole process;
    // extending the guard lifetime to 'static is sound for the same reason.
    Ok(unsafe { std::mem::transmute::<AttachGuard<'_>, AttachGuard<'static>>(guard) })
}

/// Obtain the hosting Android `Context` (the `NativeActivity` or whichever
/// `Activity` hosts the native code) as a [`JObject`].
fn android_context() -> Result<JObject<'static>> {
    let ctx = ndk_context::android_context();
    let ptr = ctx.context();
    if ptr.is_null() {
        return Err(SyncError::NoActiveDevice);
    }
    // SAFETY: the NDK guarantees this pointer is a valid global jobject for
    // the hosting Activity.
    Ok(unsafe { JObject::from_raw(ptr.cast()) })
}

/// Convenience: map any `jni::errors::Error` into `SyncError::Bridge`.
fn jni_err(context: &str, e: jni::errors::Error) -> SyncError {
    SyncError::Bridge(format!("{context}: {e}"))
}

/// Block on a Play Services `Task`, clearing and reporting any Java
/// exception it settled with.
fn await_task<'a>(
    env: &mut JNIEnv<'a>,
    task: JObject<'a>,
    context: &str,
) -> Result<JObject<'a>> {
    let result = env.call_static_method(
        "com/google/android/gms/tasks/Tasks",
        "await",
        "(Lcom/google/android/gms/tasks/Task;)Ljava/lang/Object;",
        &[JValue::Object(&task)],
    );
    match result {
        Ok(value) => value.l().map_err(|e| jni_err(context, e)),
        Err(e) => {
            if env.exception_check().unwrap_or(false) {
                let _ = env.exception_clear();
            }
            Err(SyncError::TransportFailure(format!("{context}: {e}")))
        }
    }
}

// ---------------------------------------------------------------------------
// Wearable Data Layer transport
// ---------------------------------------------------------------------------

/// Transport over the Play Services Wearable Data Layer.
pub struct DataLayerTransport;

impl DataLayerTransport {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous send path — runs on a blocking worker thread.
    fn send_blocking(path: &str, payload: &[u8]) -> Result<()> {
        let mut env = jni_env()?;
        let context = android_context()?;

        // Resolve currently bonded nodes. An empty list means no watch is
        // reachable right now — fail fast, no queuing.
        let node_client = env
            .call_static_method(
                "com/google/android/gms/wearable/Wearable",
                "getNodeClient",
                "(Landroid/content/Context;)Lcom/google/android/gms/wearable/NodeClient;",
                &[JValue::Object(&context)],
            )
            .and_then(|v| v.l())
            .map_err(|e| jni_err("Wearable.getNodeClient", e))?;

        let nodes_task = env
            .call_method(
                &node_client,
                "getConnectedNodes",
                "()Lcom/google/android/gms/tasks/Task;",
                &[],
            )
            .and_then(|v| v.l())
            .map_err(|e| jni_err("NodeClient.getConnectedNodes", e))?;

        let nodes = await_task(&mut env, nodes_task, "await connected nodes")?;

        let count = env
            .call_method(&nodes, "size", "()I", &[])
            .and_then(|v| v.i())
            .map_err(|e| jni_err("List.size", e))?;
        if count == 0 {
            return Err(SyncError::NoActiveDevice);
        }

        // The wallet pairs with a single watch; take the first node.
        let node = env
            .call_method(&nodes, "get", "(I)Ljava/lang/Object;", &[JValue::Int(0)])
            .and_then(|v| v.l())
            .map_err(|e| jni_err("List.get", e))?;
        let node_id: JString = env
            .call_method(&node, "getId", "()Ljava/lang/String;", &[])
            .and_then(|v| v.l())
            .map_err(|e| jni_err("Node.getId", e))?
            .into();

        let message_client = env
            .call_static_method(
                "com/google/android/gms/wearable/Wearable",
                "getMessageClient",
                "(Landroid/content/Context;)Lcom/google/android/gms/wearable/MessageClient;",
                &[JValue::Object(&context)],
            )
            .and_then(|v| v.l())
            .map_err(|e| jni_err("Wearable.getMessageClient", e))?;

        let jpath = env
            .new_string(path)
            .map_err(|e| jni_err("new path string", e))?;
        let jpayload: JByteArray = env
            .byte_array_from_slice(payload)
            .map_err(|e| jni_err("new payload array", e))?;

        let send_task = env
            .call_method(
                &message_client,
                "sendMessage",
                "(Ljava/lang/String;Ljava/lang/String;[B)Lcom/google/android/gms/tasks/Task;",
                &[
                    JValue::Object(&node_id),
                    JValue::Object(&jpath),
                    JValue::Object(&jpayload),
                ],
            )
            .and_then(|v| v.l())
            .map_err(|e| jni_err("MessageClient.sendMessage", e))?;

        await_task(&mut env, send_task, "await message send")?;
        debug!(path, bytes = payload.len(), "payload submitted to data layer");
        Ok(())
    }
}

impl Default for DataLayerTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl WearableTransport for DataLayerTransport {
    async fn send(&self, path: &str, payload: &[u8]) -> Result<()> {
        let path = path.to_owned();
        let payload = payload.to_owned();
        tokio::task::spawn_blocking(move || Self::send_blocking(&path, &payload))
            .await
            .map_err(|e| SyncError::Bridge(format!("blocking send task failed: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// Host lifecycle
// ---------------------------------------------------------------------------

/// Lifecycle handle backed by `Activity.finishAffinity()`.
pub struct AndroidLifecycle;

impl AppLifecycle for AndroidLifecycle {
    fn kill_app(&self) -> Result<()> {
        let mut env = jni_env()?;
        let activity = match android_context() {
            Ok(activity) => activity,
            // No foreground activity: nothing to finish.
            Err(_) => {
                debug!("kill_app: no foreground activity, nothing to do");
                return Ok(());
            }
        };
        env.call_method(&activity, "finishAffinity", "()V", &[])
            .map_err(|e| jni_err("Activity.finishAffinity", e))?;
        Ok(())
    }
}
