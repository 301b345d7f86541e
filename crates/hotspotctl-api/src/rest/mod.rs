// RouterOS REST API client
//
// RouterOS v7 serves every console menu under `/rest/{menu path}`:
// GET lists, PUT creates, PATCH updates and DELETE removes a row by `.id`.
// Errors come back as `{ error, message, detail }` with a non-2xx status.

pub mod client;
pub mod models;

pub use client::RestClient;
