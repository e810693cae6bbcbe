// Copyright (c) 2022-2023 Yuki Kishimoto
// Copyright (c) 2023-2025 Rust Nostr Developers
// Distributed under the MIT software license

//! Config error

use thiserror::Error;

/// Config error
#[derive(Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Signer not configured
    #[error("signer not configured")]
    SignerNotConfigured,
}
