//! Message macros with debug-aware output routing.
//!
//! `msg_print!` always writes to stdout, which carries command output only.
//! In debug mode (`MOCKEXAM_DEBUG` or `RUST_LOG` set) the other macros forward
//! to the matching `tracing` level so output is structured and filterable.
//! Otherwise they write to stderr and `msg_debug!` is silent.
//!
//! ```text
//! msg_info!(..) ──▶ debug mode? ──yes──▶ tracing::info!
//!                              └──no───▶ eprintln!
//! ```
//!
//! ```rust
//! use mockexam::{msg_debug, msg_success};
//! use mockexam::libs::messages::Message;
//! use mockexam::db::schema::Entity;
//!
//! msg_success!(Message::RecordCreated { entity: Entity::Users, id: 1 });
//! msg_debug!(Message::StoreOpened("exam.db".to_string()));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether messages should be routed through `tracing`. Cached on first use.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("MOCKEXAM_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        println!("{}", $msg);
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            eprintln!("✅ {}", $msg);
        }
    };
}

/// Errors go to stderr so stdout stays machine-readable.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            eprintln!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            eprintln!("ℹ️ {}", $msg);
        }
    };
}

/// Debug-only. Suppressed entirely outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
