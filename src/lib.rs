//! CalcMaster: a headless calculator widget engine
//!
//! CalcMaster follows a "pure core, imperative shell" design. The input
//! state machine is a pure reducer over a flat state value; persistence,
//! clocks and logging live in the session shell that drives it.
//!
//! # Core Concepts
//!
//! - **State**: `CalculatorState`, the current operand, pending operation and error
//! - **Commands**: one `Command` vocabulary shared by buttons and keyboard
//! - **History**: newest-first log of completed calculations, persisted on every change
//! - **Session**: the shell that runs commands and commits their results
//!
//! # Example
//!
//! ```rust
//! use calcmaster::config::CalculatorConfig;
//! use calcmaster::session::Session;
//! use calcmaster::storage::{KeyValueStore, MemoryStore, HISTORY_KEY};
//!
//! let mut session = Session::open(MemoryStore::new(), CalculatorConfig::default());
//! for key in ["5", "+", "3", "Enter"] {
//!     session.press_key(key);
//! }
//!
//! assert_eq!(session.view().main_line, "8");
//! assert_eq!(session.history().len(), 1);
//! assert!(session.storage().get(HISTORY_KEY).unwrap().is_some());
//! ```

pub mod config;
pub mod core;
pub mod dispatch;
pub mod history;
pub mod preferences;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use config::CalculatorConfig;
pub use self::core::{reduce, CalcError, CalculatorState, Command, Operator, UnaryFn};
pub use history::{CalculationRecord, HistoryLog, HistoryStore, RecordId};
pub use preferences::Preferences;
pub use session::{DisplayView, Session};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
