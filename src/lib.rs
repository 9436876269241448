//! local-notifier - native desktop notification bridge
//!
//! This crate receives `notify` and `close` calls on the `local_notifier`
//! method channel and forwards them to the operating system's notification
//! service, tracking identifiers of notifications the OS accepted.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Notification value objects, the registry, method call types, and errors
//! - **Application**: The notification bridge and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-rust, XDG config file)
//! - **CLI**: Argument parsing, the stdio method channel, and the app runner

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
