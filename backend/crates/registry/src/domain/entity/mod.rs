//! Entity Module

pub mod application;
