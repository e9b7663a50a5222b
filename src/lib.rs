//! Luganda Lexicon: dictionary lookup, phrasebook, quizzes and
//! pronunciation for Luganda learners, backed by a generative content
//! service.
//!
//! [`app::Lexicon`] is the entry point. It drives the session and quiz
//! state machines, talks to a [`gateway::ContentGateway`], and keeps
//! favorites and test history in a [`store::PersistenceStore`].

pub mod app;
pub mod audio;
pub mod config;
pub mod content;
pub mod favorites;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod quiz;
pub mod session;
pub mod store;

pub use app::{Lexicon, Outcome, Pending, StartupError, TestsOverview};
