//! People Enrichment API Library
//!
//! A CRUD service for person records enriched with inferred age, gender and
//! nationality from public name-inference APIs, stored in Postgres.
//!
//! # Modules
//!
//! - `api`: HTTP-facing components.
//! - `core`: Domain models, enrichment logic and errors.
//! - `data`: Data access layer.
//! - `config`: Configuration management.
//! - `db`: Database connection and pool management.
//! - `db_storage`: Person repository trait and Postgres implementation.
//! - `memory_storage`: In-process person repository.
//! - `enrichment`: Sequential enrichment workflow.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Domain and upstream response models.
//! - `obs`: Tracing setup and request logging.
//! - `openapi`: Generated API documentation.
//! - `routes`: Router assembly.
//! - `services`: Clients for the age, gender and nationality APIs.

pub mod api;
pub mod core;
pub mod data;

pub mod config;
pub mod db;
pub mod db_storage;
pub mod enrichment;
pub mod errors;
pub mod handlers;
pub mod memory_storage;
pub mod models;
pub mod obs;
pub mod openapi;
pub mod routes;
pub mod services;
