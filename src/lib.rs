//! LayerManagerControl: a small command language for driving a compositor's
//! layer management service.
//!
//! Commands are declared as templates such as `layer <layerid> opacity <opacity>`
//! and folded into a [`grammar::Grammar`]. The [`interpreter`] matches a typed
//! command line against it and runs the bound action over a
//! [`session::Session`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod grammar;
pub mod interpreter;
pub mod session;
