/******************************************************************************
   Author: Theo Massard
   Email: massar_t@etna-alternance.net
   Date: 12/7/26
******************************************************************************/
/// Request models for the mutating API calls
pub mod requests;
/// Retry configuration for HTTP requests
pub mod retry;
