//! Supabase REST client library.
//!
//! Typed access to the hosted content backend over its PostgREST API.

pub mod rest;

pub use rest::SupabaseRestClient;
