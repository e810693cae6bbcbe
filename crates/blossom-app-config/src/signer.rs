// Copyright (c) 2022-2023 Yuki Kishimoto
// Copyright (c) 2023-2025 Rust Nostr Developers
// Distributed under the MIT software license

//! Signer context
//!
//! Replacement for the browser's ambient `window.nostr` extension point
//! ([NIP-07](https://github.com/nostr-protocol/nips/blob/master/07.md)):
//! the application wires an optional signer capability in at startup and
//! passes the context to the components that need it.

use std::sync::Arc;

use nostr::prelude::IntoNostrSigner;
use nostr::NostrSigner;

use crate::error::Error;

/// Optionally-present signer capability, fixed at application startup.
///
/// The capability may be absent (no signing provider available): a user can
/// still browse uploads, but can't authorize new ones. Consumers must handle
/// the absent case via [`SignerContext::signer`].
#[derive(Debug, Clone, Default)]
pub struct SignerContext {
    signer: Option<Arc<dyn NostrSigner>>,
}

impl SignerContext {
    /// Context with an attached signer capability.
    pub fn new<T>(signer: T) -> Self
    where
        T: IntoNostrSigner,
    {
        let signer: Arc<dyn NostrSigner> = signer.into_nostr_signer();
        tracing::debug!(backend = ?signer.backend(), "Signer capability attached.");
        Self {
            signer: Some(signer),
        }
    }

    /// Context without a signer capability.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if a signer is configured
    #[inline]
    pub fn has_signer(&self) -> bool {
        self.signer.is_some()
    }

    /// Get the signer
    ///
    /// Returns an error if the signer isn't configured.
    pub fn signer(&self) -> Result<Arc<dyn NostrSigner>, Error> {
        self.signer.clone().ok_or(Error::SignerNotConfigured)
    }
}
