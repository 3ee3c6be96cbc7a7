//! Application Configuration
//!
//! Configuration for the registry application layer.

use crate::application::pagination::Paginator;

/// Registry application configuration
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Page size of the public list view
    pub page_size: u64,
    /// Page size of the admin list
    pub admin_page_size: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            admin_page_size: 100,
        }
    }
}

impl RegistryConfig {
    pub fn paginator(&self) -> Paginator {
        Paginator::new(self.page_size)
    }

    pub fn admin_paginator(&self) -> Paginator {
        Paginator::new(self.admin_page_size)
    }
}
