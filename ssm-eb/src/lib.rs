pub mod app;
pub mod configs;
pub mod domain;
pub mod modes;
pub mod output;
pub mod storage;
