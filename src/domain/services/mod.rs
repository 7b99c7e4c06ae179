pub mod token_service;
pub mod url_policy;
