/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/1/26
******************************************************************************/
/// Animal catalog records
pub mod animal;
/// Authentication models: credentials body and bearer token
pub mod auth;
