pub mod donor;
pub mod event_log;
pub mod material;
pub mod notification;
pub mod storage_condition;
