pub mod ingress;
pub mod storage;
pub mod upload_service;
