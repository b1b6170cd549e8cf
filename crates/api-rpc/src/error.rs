//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes.

use jsonrpsee::types::ErrorObjectOwned;
use qanda_core::error::AppError;
use tracing::error;

/// RPC Error Codes
pub mod code {
    /// Client error: a required field is empty after trimming
    pub const VALIDATION_ERROR: i32 = 4000;
    /// Referenced question or answer does not exist
    pub const NOT_FOUND: i32 = 4001;
    /// Server error: the store failed
    pub const DB_ERROR: i32 = 5001;
}

/// Message returned for storage failures; details stay in the server log
pub const STORAGE_ERROR_MESSAGE: &str = "Internal server error";

/// Convert AppError to JSON-RPC ErrorObject
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    match err {
        AppError::Validation(e) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, e.to_string(), None::<()>)
        }
        AppError::NotFound(msg) => ErrorObjectOwned::owned(code::NOT_FOUND, msg, None::<()>),
        AppError::Storage(msg) => {
            error!(error = %msg, "Storage failure while handling request");
            ErrorObjectOwned::owned(code::DB_ERROR, STORAGE_ERROR_MESSAGE, None::<()>)
        }
    }
}
