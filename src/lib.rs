//! This crate provides a client for the BRB planning API, which manages events, tasks, todos and signs.
//!
//! The REST plumbing lives in the [`client`] module. Typed CRUD access to each kind of record is provided by [`resource`],
//! e.g. `client.todos().list()`.
//!
//! The actual network I/O goes through the [`Transport`](traits::Transport) trait, so that it can be swapped with
//! a [`MockTransport`](mock_transport::MockTransport) in tests.
//!
//! On top of these, the [`views`] module provides stateful screens (todo list, events and tasks, month calendar)
//! that the `brb` binary renders to the terminal.

pub mod traits;

pub mod config;
pub use config::Settings;
pub mod error;
pub use error::ApiError;
pub mod transport;
pub mod mock_transport;
pub mod client;
pub use client::HttpClient;
pub mod resource;

pub mod status;
pub use status::Status;
pub mod time_span;
pub use time_span::{TimeSpan, Timestamp};
mod event;
pub use event::{Event, EventRequest};
mod task;
pub use task::{Task, TaskRequest};
mod todo;
pub use todo::{Todo, TodoRequest};
mod sign;
pub use sign::{Sign, SignRequest};

pub mod calendar;
pub use calendar::MonthGrid;
pub mod views;
pub mod utils;
