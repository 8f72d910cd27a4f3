pub mod config;
pub mod error;
pub mod remote;
pub mod repository;
pub mod rest;
pub mod sync;
pub mod validator;
