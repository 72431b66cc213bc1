//! Interactive release helper for a Tauri mobile app
//!
//! Wraps the manual release dance for a Tauri project in one interactive
//! session: bump the version in `src-tauri/tauri.conf.json` and
//! `package.json`, commit and push, create and push the `v<version>` tag,
//! and optionally run a local Android APK build.
//!
//! The pieces are exposed as a library so tests can drive them directly:
//!
//! - [`manifest`]: read/bump/write the version in both manifests
//! - [`vcs`]: the git release sequence via system git
//! - [`build`]: the local APK build and artifact collection
//! - [`app`]: the interactive form controller tying it together

pub mod app;
pub mod build;
pub mod core;
pub mod manifest;
pub mod ui;
pub mod vcs;
