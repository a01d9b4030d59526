//! Cloud IDE Core
//!
//! Layered architecture:
//! - domain: Core entities, errors and the execution contract
//! - repository: Storage adapter and the repositories persisting through it
//! - workspace: Virtual file system of the active project
//! - selection: Active file and open tabs
//! - editor: Text editing surface capability
//! - gateway: Code execution backends and the run gateway
//! - session: Explicit context object tying it together
//!
//! Nothing in here touches the browser; the front end supplies a
//! `KeyValueStore`, `RawFileSource`s and a `TextEditingSurface`.

pub mod config;
pub mod domain;
pub mod editor;
pub mod gateway;
pub mod repository;
pub mod selection;
pub mod session;
pub mod workspace;

pub use config::IdeConfig;
pub use session::IdeSession;
