/*
 * Copyright (c) 2026 Ilya Shishov
 * Licensed under the MIT License.
 * See the LICENSE file in the project root for full license information.
 */

//! Creates ipset sets by running `ipset create -exist` for a structured
//! [`CreateRequest`].

pub mod command;
pub mod invoker;
pub mod outcome;
pub mod request;
pub mod runner;
#[cfg(test)]
mod test_helpers;

pub use command::{CreateCommand, IPSET_BIN};
pub use invoker::{create_set, create_set_with_callback, run_create, spawn_create};
pub use outcome::{CreateFailure, CreateOutcome};
pub use request::{CreateOptions, CreateRequest, CreateRequestBuilder, RequestDoc};
pub use runner::{ProcessRunner, RunOutput, SystemRunner, TraceRunner};
