//! # loopstone-core
//!
//! The tick-driven editing core for the Loopstone loop composer: the
//! drill-down state machine (Loop Adjust → Bar Nav → Layer Nav → Sample Nav
//! → Sample Adjust), the modifier-combo disambiguator, and the session
//! façade the host drives — independent of any rendering, audio, or input
//! hardware.
//!
//! ## Quick Start
//!
//! ```rust
//! use loopstone_core::config::Config;
//! use loopstone_core::session::Session;
//! use loopstone_types::InputFrame;
//!
//! // 1. Create a session with configured defaults
//! let config = Config::load();
//! let mut session = Session::with_config(&config);
//!
//! // 2. Hand over a freshly crafted sound for placement
//! session.ingest_template("Stone 0", 4);
//!
//! // 3. Once per frame: feed the tick delta and the input snapshot
//! let input = InputFrame { confirm_click: true, ..Default::default() };
//! let result = session.tick(16.0, &input);
//!
//! // 4. Forward intents (session complete, previews) to the host,
//! //    and render from the read-only state
//! for intent in result.intents {
//!     let _ = intent;
//! }
//! let _mode = session.state().mode;
//! ```
//!
//! ## Module Overview
//!
//! - [`session`] — `Session::tick()`, the single per-tick entry point
//! - `dispatch` — per-mode input handlers and the back-navigation rule
//! - [`combo`] — the press-then-rotate combo window, delta-driven
//! - [`config`] — TOML editor defaults (embedded + user override)

pub mod combo;
pub mod config;
pub(crate) mod dispatch;
pub mod session;

pub use combo::ComboWindow;
pub use config::Config;
pub use session::Session;
