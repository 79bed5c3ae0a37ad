//! Traffic assistant chat backend: keyword-selected canned replies, optionally
//! prefixed with a distance and travel-time estimate from openrouteservice.

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
