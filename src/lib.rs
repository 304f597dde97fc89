//! SalesBooster Lead Scoring API Library
//!
//! A small HTTP service exposing a health check and a lead-scoring endpoint
//! backed by a mock scorer.
//!
//! # Modules
//!
//! - `app`: Router assembly and the middleware chain.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `extract`: Request body decoding for leads.
//! - `handlers`: HTTP request handlers.
//! - `middleware`: JSON body validation ahead of routing.
//! - `models`: Request and response data models.
//! - `scoring`: Lead scorer trait and the mock scorer.

pub mod app;
pub mod config;
pub mod errors;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod scoring;
