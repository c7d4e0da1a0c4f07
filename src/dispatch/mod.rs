// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Name-based invocation of the text components.
//!
//! The dispatcher is the single place where errors become envelopes. Each call
//! moves through `received -> validated -> executed -> responded`; a validation
//! failure skips execution entirely, and a fault inside a component (including a
//! panic) is converted into a `success:false` envelope instead of escaping.
//!
//! # Example
//!
//! ```
//! use the_textsmith::dispatch::{OperationDispatcher, Options};
//!
//! let dispatcher = OperationDispatcher::new();
//! let mut options = Options::new();
//! options.insert("case_type".into(), "snake".into());
//!
//! let envelope = dispatcher.invoke("transform_case", "fooBar baz", &options);
//! assert!(envelope.is_success());
//! assert_eq!(envelope.to_json().unwrap()["transformed"], "foo_bar_baz");
//! ```

mod dispatcher;
pub mod operation;
pub mod params;


pub use dispatcher::OperationDispatcher;
pub use operation::Operation;
pub use params::{OperationRequest, Options, ParameterKind, ParameterSpec};
