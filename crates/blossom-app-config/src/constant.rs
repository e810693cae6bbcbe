// Copyright (c) 2022-2023 Yuki Kishimoto
// Copyright (c) 2023-2025 Rust Nostr Developers
// Distributed under the MIT software license

//! Default endpoints

/// Project documentation, linked from the help button.
pub const HELP_LINK: &str = "https://github.com/nikolat/nostr-learn-blossom";

/// Default Blossom servers proposed for uploads, in display order.
///
/// <https://github.com/hzrd149/blossom>
pub const DEFAULT_UPLOADER_URLS: [&str; 5] = [
    "https://blossom.band",
    "https://cdn.nostrcheck.me",
    "https://nostr.download",
    "https://blossom.primal.net",
    "https://cdn.satellite.earth",
];

/// Default relays queried when resolving profile metadata.
pub const DEFAULT_RELAYS_FOR_PROFILE: [&str; 1] = ["wss://directory.yabu.me/"];
