//! # Share Codes
//!
//! Turns a [`Snapshot`] into a short string that fits in a URL query
//! parameter (`?config=<code>`), and back.
//!
//! The code is the snapshot's JSON in URL-safe base64 without padding. It is
//! not a security boundary: decoding only yields a snapshot, which still has
//! to pass [`Configurator::restore`](crate::Configurator::restore).

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::error::{CoreError, CoreResult};
use crate::state::Snapshot;

/// Encodes a snapshot as a share code.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use showroom_core::{share, Catalog, Configurator};
///
/// let catalog = Arc::new(Catalog::builtin().unwrap());
/// let mut session = Configurator::new(catalog, "suv").unwrap();
/// session.toggle_feature("sunroof").unwrap();
///
/// let code = share::encode(&session.snapshot()).unwrap();
/// assert_eq!(share::decode(&code).unwrap(), session.snapshot());
/// ```
pub fn encode(snapshot: &Snapshot) -> CoreResult<String> {
    let json = serde_json::to_vec(snapshot).map_err(CoreError::invalid_snapshot)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decodes a share code. Surrounding whitespace is ignored.
pub fn decode(code: &str) -> CoreResult<Snapshot> {
    let bytes = URL_SAFE_NO_PAD
        .decode(code.trim())
        .map_err(|e| CoreError::invalid_snapshot(format!("share code is not base64: {}", e)))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| CoreError::invalid_snapshot(format!("share code is not a snapshot: {}", e)))
}
