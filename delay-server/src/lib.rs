//! Departure delay server.
//!
//! Answers "when is the next departure from A to B, and is it late?" from
//! two Swiss timetable providers, as a chat command and over HTTP.

pub mod delay;
pub mod domain;
pub mod opendata;
pub mod sbb;
pub mod web;
