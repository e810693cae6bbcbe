// Copyright (c) 2022-2023 Yuki Kishimoto
// Copyright (c) 2023-2025 Rust Nostr Developers
// Distributed under the MIT software license

//! Configuration surface for a Blossom upload client.
//!
//! Static defaults (uploader endpoints, profile relays, help link) plus an
//! explicit, optionally-present signer capability
//! ([NIP-07](https://github.com/nostr-protocol/nips/blob/master/07.md) style),
//! wired in at application startup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::bare_urls)]

pub mod constant;
pub mod error;
pub mod prelude;
pub mod signer;

pub use self::constant::{DEFAULT_RELAYS_FOR_PROFILE, DEFAULT_UPLOADER_URLS, HELP_LINK};
pub use self::error::Error;
pub use self::signer::SignerContext;
