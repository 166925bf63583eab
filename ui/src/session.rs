//! The single session object holding the credential token.
//!
//! Every authenticated hook reads the token through this store, which
//! also mirrors it into `localStorage` under one fixed key. Writes happen
//! in exactly three places: sign-in, sign-out, and the 401 handling path.
//! Consumers subscribe through yewdux and re-render on change.

use payloads::responses::UserProfile;
use yewdux::prelude::*;

/// localStorage key holding the credential token.
const TOKEN_STORAGE_KEY: &str = "fan_stock_token";

#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Latest token value at call time. Reads always see the most recent
/// write; no coordination is needed because writes are rare and atomic.
pub fn current_token() -> Option<String> {
    Dispatch::<Session>::global().get().token.clone()
}

/// Restore a persisted token into the store. Called once at startup,
/// before the profile refresh runs.
pub fn restore() {
    let stored = local_storage()
        .and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok())
        .flatten();
    if let Some(token) = stored {
        tracing::debug!("restored persisted credential");
        Dispatch::<Session>::global().reduce_mut(|session| {
            session.token = Some(token);
        });
    }
}

/// Store a fresh credential after sign-in or token refresh.
pub fn set(token: String, user: UserProfile) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, &token);
    }
    Dispatch::<Session>::global().reduce_mut(|session| {
        session.token = Some(token);
        session.user = Some(user);
    });
}

/// Delete the credential. Used by sign-out and by 401 handling.
pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
    tracing::debug!("cleared session credential");
    Dispatch::<Session>::global().reduce_mut(|session| {
        session.token = None;
        session.user = None;
    });
}
